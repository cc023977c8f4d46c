//! Domain layer: value objects, entities and the interfaces the use cases
//! depend on.

pub mod connection;
pub mod entity;
pub mod error;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use connection::{ConnectionState, IgnoreReason, InboundKind, Transition};
pub use entity::{JoinOutcome, LeaveOutcome, Room};
pub use error::{MessagePushError, RepositoryError, ValueObjectError};
pub use message_pusher::{MessagePusher, PusherChannel};
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
pub use repository::RoomRepository;
pub use value_object::{ConnectionId, RoomName, Timestamp};
