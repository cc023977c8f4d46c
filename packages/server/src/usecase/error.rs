//! Use case errors.

use thiserror::Error;

use crate::domain::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinRoomError {
    #[error("join rejected: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaveRoomError {
    #[error("room '{0}' does not exist")]
    RoomNotFound(String),

    #[error("connection is not a member of room '{0}'")]
    NotMember(String),
}

impl From<RepositoryError> for LeaveRoomError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::RoomNotFound(room) => Self::RoomNotFound(room),
            RepositoryError::MemberNotFound { room, .. }
            | RepositoryError::AlreadyMember { room, .. } => Self::NotMember(room),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("invalid room name")]
    InvalidRoomName,

    #[error("room not found")]
    RoomNotFound,
}
