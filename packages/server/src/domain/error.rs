//! Domain-level error types.

use thiserror::Error;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("room name must not be empty")]
    RoomNameEmpty,
}

/// Errors raised by a [`RoomRepository`](super::RoomRepository)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("connection '{connection}' is not a member of room '{room}'")]
    MemberNotFound { room: String, connection: String },

    #[error("connection '{connection}' is already a member of room '{room}'")]
    AlreadyMember { room: String, connection: String },
}

/// Errors raised by a [`MessagePusher`](super::MessagePusher)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("outbound queue of connection '{0}' is full")]
    QueueFull(String),

    #[error("outbound queue of connection '{0}' is closed")]
    Closed(String),
}
