//! In-memory implementation of [`RoomRepository`].
//!
//! All rooms live in one `HashMap` behind a single `tokio::sync::Mutex`, so
//! every join, leave and membership read is serialized against every other.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use roomrelay_shared::time::{Clock, SystemClock};
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, JoinOutcome, LeaveOutcome, RepositoryError, Room, RoomName, RoomRepository,
    Timestamp,
};

/// Room registry held in process memory
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<RoomName, Room>>,
    /// Source of room creation timestamps
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Number of rooms currently open
    pub async fn count_rooms(&self) -> usize {
        self.rooms.lock().await.len()
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn add_member(
        &self,
        room: RoomName,
        member: ConnectionId,
    ) -> Result<JoinOutcome, RepositoryError> {
        let mut rooms = self.rooms.lock().await;

        match rooms.get_mut(&room) {
            Some(existing) => {
                let peers = existing.members_except(&member);
                if !existing.add_member(member) {
                    return Err(RepositoryError::AlreadyMember {
                        room: room.into_string(),
                        connection: member.to_string(),
                    });
                }
                Ok(JoinOutcome {
                    room_created: false,
                    peers,
                })
            }
            None => {
                let created_at = Timestamp::new(self.clock.now_millis());
                rooms.insert(room.clone(), Room::open(room, member, created_at));
                Ok(JoinOutcome {
                    room_created: true,
                    peers: Vec::new(),
                })
            }
        }
    }

    async fn remove_member(
        &self,
        room: &RoomName,
        member: &ConnectionId,
    ) -> Result<LeaveOutcome, RepositoryError> {
        let mut rooms = self.rooms.lock().await;

        let existing = rooms
            .get_mut(room)
            .ok_or_else(|| RepositoryError::RoomNotFound(room.as_str().to_string()))?;

        if !existing.remove_member(member) {
            return Err(RepositoryError::MemberNotFound {
                room: room.as_str().to_string(),
                connection: member.to_string(),
            });
        }

        if existing.is_empty() {
            rooms.remove(room);
            return Ok(LeaveOutcome::RoomClosed);
        }

        Ok(LeaveOutcome::Remaining(existing.members_except(member)))
    }

    async fn members_except(&self, room: &RoomName, exclude: &ConnectionId) -> Vec<ConnectionId> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room)
            .map(|existing| existing.members_except(exclude))
            .unwrap_or_default()
    }

    async fn get_room(&self, room: &RoomName) -> Option<Room> {
        let rooms = self.rooms.lock().await;
        rooms.get(room).cloned()
    }

    async fn get_rooms(&self) -> Vec<Room> {
        let rooms = self.rooms.lock().await;
        let mut snapshot: Vec<Room> = rooms.values().cloned().collect();
        snapshot.sort_by(|a, b| a.name.cmp(&b.name));
        snapshot
    }
}
