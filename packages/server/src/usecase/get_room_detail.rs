//! UseCase: inspect one room

use std::sync::Arc;

use crate::domain::{Room, RoomName, RoomRepository};

use super::error::GetRoomDetailError;

pub struct GetRoomDetailUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, room_name: String) -> Result<Room, GetRoomDetailError> {
        let room_name =
            RoomName::new(room_name).map_err(|_| GetRoomDetailError::InvalidRoomName)?;
        self.repository
            .get_room(&room_name)
            .await
            .ok_or(GetRoomDetailError::RoomNotFound)
    }
}
