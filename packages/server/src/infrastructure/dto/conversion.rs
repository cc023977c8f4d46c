//! Conversion logic between DTOs and domain types.

use roomrelay_shared::time::millis_to_rfc3339;

use crate::domain::{InboundKind, Room, RoomName};
use crate::infrastructure::dto::{
    http::{RoomDetailDto, RoomSummaryDto},
    websocket::{Envelope, JoinPayload, MessageType},
};

// ========================================
// DTO → Domain
// ========================================

impl From<&Envelope> for InboundKind {
    fn from(envelope: &Envelope) -> Self {
        if !envelope.is(MessageType::Join) {
            return Self::Other;
        }
        let room = serde_json::from_value::<JoinPayload>(envelope.payload.clone())
            .ok()
            .and_then(|payload| RoomName::new(payload.room_name).ok());
        Self::Join { room }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&Room> for RoomSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.as_str().to_string(),
            member_count: room.member_count(),
            created_at: millis_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<&Room> for RoomDetailDto {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.as_str().to_string(),
            members: room
                .sorted_members()
                .iter()
                .map(ToString::to_string)
                .collect(),
            created_at: millis_to_rfc3339(room.created_at.value()),
        }
    }
}
