//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{MessagePusher, RoomRepository},
    infrastructure::dto::websocket::{USER_JOINED_TEXT, USER_LEFT_TEXT, info_frame},
    usecase::{
        BroadcastUseCase, GetRoomDetailUseCase, GetRoomsUseCase, JoinRoomUseCase,
        LeaveRoomUseCase,
    },
};

/// Server notifications, serialized once at startup
#[derive(Debug, Clone)]
pub struct Notices {
    pub user_joined: String,
    pub user_left: String,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            user_joined: info_frame(USER_JOINED_TEXT),
            user_left: info_frame(USER_LEFT_TEXT),
        }
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

/// State handed to every request and connection handler
pub struct AppState {
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    pub broadcast_usecase: Arc<BroadcastUseCase>,
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    /// Registers and unregisters connection outbound queues
    pub message_pusher: Arc<dyn MessagePusher>,
    pub notices: Notices,
    /// Length of each connection's outbound queue
    pub outbound_capacity: usize,
}

impl AppState {
    /// Wire the use cases around one repository and one message pusher.
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        outbound_capacity: usize,
    ) -> Self {
        Self {
            join_room_usecase: Arc::new(JoinRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            leave_room_usecase: Arc::new(LeaveRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            broadcast_usecase: Arc::new(BroadcastUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(repository.clone())),
            get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(repository)),
            message_pusher,
            notices: Notices::new(),
            outbound_capacity: outbound_capacity.max(1),
        }
    }
}
