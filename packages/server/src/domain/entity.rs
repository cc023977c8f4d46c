//! Entities.

use std::collections::HashSet;

use super::value_object::{ConnectionId, RoomName, Timestamp};

/// A named group of connections that receive each other's broadcasts.
///
/// A `Room` only exists while it has at least one member; the repository
/// drops it as soon as the last member leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: RoomName,
    pub members: HashSet<ConnectionId>,
    pub created_at: Timestamp,
}

impl Room {
    /// Create a room holding its first member.
    pub fn open(name: RoomName, first_member: ConnectionId, created_at: Timestamp) -> Self {
        Self {
            name,
            members: HashSet::from([first_member]),
            created_at,
        }
    }

    /// Add a member. Returns `false` if it was already present.
    pub fn add_member(&mut self, member: ConnectionId) -> bool {
        self.members.insert(member)
    }

    /// Remove a member. Returns `false` if it was not present.
    pub fn remove_member(&mut self, member: &ConnectionId) -> bool {
        self.members.remove(member)
    }

    pub fn contains(&self, member: &ConnectionId) -> bool {
        self.members.contains(member)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Snapshot of every member except `exclude`.
    pub fn members_except(&self, exclude: &ConnectionId) -> Vec<ConnectionId> {
        self.members
            .iter()
            .filter(|id| *id != exclude)
            .copied()
            .collect()
    }

    /// Members sorted for stable presentation.
    pub fn sorted_members(&self) -> Vec<ConnectionId> {
        let mut members: Vec<ConnectionId> = self.members.iter().copied().collect();
        members.sort();
        members
    }
}

/// Result of adding a member to a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    /// `true` if the room did not exist before this join
    pub room_created: bool,
    /// Members that were already in the room
    pub peers: Vec<ConnectionId>,
}

/// Result of removing a member from a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The leaving member was the last one; the room no longer exists
    RoomClosed,
    /// Members still in the room after the removal
    Remaining(Vec<ConnectionId>),
}
