//! Use case layer: the room registry operations built on the domain
//! interfaces.

mod broadcast;
mod error;
mod get_room_detail;
mod get_rooms;
mod join_room;
mod leave_room;

pub use broadcast::BroadcastUseCase;
pub use error::{GetRoomDetailError, JoinRoomError, LeaveRoomError};
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
