//! UseCase: list open rooms

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

pub struct GetRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Snapshot of every open room, sorted by name
    pub async fn execute(&self) -> Vec<Room> {
        self.repository.get_rooms().await
    }
}
