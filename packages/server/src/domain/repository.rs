//! Repository trait definitions.
//!
//! The use cases depend on this interface; the in-memory implementation lives
//! in the infrastructure layer.

use async_trait::async_trait;

use super::{ConnectionId, JoinOutcome, LeaveOutcome, RepositoryError, Room, RoomName};

/// Room membership registry.
///
/// Every method runs as one critical section: the outcome returned by
/// `add_member` and `remove_member` reflects the membership at the instant of
/// the mutation.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Add `member` to `room`, creating the room if it does not exist.
    async fn add_member(
        &self,
        room: RoomName,
        member: ConnectionId,
    ) -> Result<JoinOutcome, RepositoryError>;

    /// Remove `member` from `room`, deleting the room when it becomes empty.
    async fn remove_member(
        &self,
        room: &RoomName,
        member: &ConnectionId,
    ) -> Result<LeaveOutcome, RepositoryError>;

    /// Members of `room` other than `exclude`. Empty for an unknown room.
    async fn members_except(&self, room: &RoomName, exclude: &ConnectionId) -> Vec<ConnectionId>;

    /// Snapshot of a single room
    async fn get_room(&self, room: &RoomName) -> Option<Room>;

    /// Snapshot of every room, sorted by name
    async fn get_rooms(&self) -> Vec<Room>;
}
