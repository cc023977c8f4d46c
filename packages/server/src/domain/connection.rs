//! Per-connection protocol state.
//!
//! A connection starts `Unjoined`; the first valid `join` binds it to a room
//! for the rest of its life. There is no transition out of `Joined` other
//! than closing the connection.

use super::value_object::RoomName;

/// What the protocol layer recognized in an inbound envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundKind {
    /// A `join` envelope. `room` is `None` when the payload carried no usable
    /// room name.
    Join { room: Option<RoomName> },
    /// Any other discriminator, `info` included
    Other,
}

/// Why an envelope was dropped without effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A non-join envelope arrived before the connection joined a room
    NotJoined,
    /// A `join` envelope without a valid room name arrived while unjoined
    InvalidJoin,
}

/// Action the connection handler takes for one envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Join the room and become `Joined`
    Join(RoomName),
    /// Relay the envelope verbatim to the other members of the room
    Relay(RoomName),
    Ignore(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Unjoined,
    Joined(RoomName),
}

impl ConnectionState {
    /// Decide what to do with an inbound envelope. Pure; the caller applies
    /// the side effects and calls [`ConnectionState::joined`] once the
    /// registry accepted the join.
    pub fn transition(&self, inbound: InboundKind) -> Transition {
        match (self, inbound) {
            (Self::Joined(room), _) => Transition::Relay(room.clone()),
            (Self::Unjoined, InboundKind::Join { room: Some(room) }) => Transition::Join(room),
            (Self::Unjoined, InboundKind::Join { room: None }) => {
                Transition::Ignore(IgnoreReason::InvalidJoin)
            }
            (Self::Unjoined, InboundKind::Other) => Transition::Ignore(IgnoreReason::NotJoined),
        }
    }

    /// Record a completed join.
    pub fn joined(&mut self, room: RoomName) {
        *self = Self::Joined(room);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_name(name: &str) -> RoomName {
        RoomName::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_unjoined_join_transitions_to_join() {
        // テスト項目: 未参加状態で join を受け取るとルーム参加が選ばれる
        // given (前提条件):
        let state = ConnectionState::default();

        // when (操作):
        let transition = state.transition(InboundKind::Join {
            room: Some(room_name("r1")),
        });

        // then (期待する結果):
        assert_eq!(transition, Transition::Join(room_name("r1")));
    }

    #[test]
    fn test_unjoined_other_is_ignored() {
        // テスト項目: 未参加状態で join 以外を受け取ると無視される
        // given (前提条件):
        let state = ConnectionState::Unjoined;

        // when (操作):
        let transition = state.transition(InboundKind::Other);

        // then (期待する結果):
        assert_eq!(transition, Transition::Ignore(IgnoreReason::NotJoined));
    }

    #[test]
    fn test_unjoined_join_without_room_is_ignored() {
        // テスト項目: ルーム名のない join は無視され、未参加のまま
        // given (前提条件):
        let state = ConnectionState::Unjoined;

        // when (操作):
        let transition = state.transition(InboundKind::Join { room: None });

        // then (期待する結果):
        assert_eq!(transition, Transition::Ignore(IgnoreReason::InvalidJoin));
        assert_eq!(state, ConnectionState::Unjoined);
    }

    #[test]
    fn test_joined_relays_every_envelope() {
        // テスト項目: 参加済み状態ではどの封筒も参加中のルームへ中継される
        // given (前提条件):
        let mut state = ConnectionState::Unjoined;
        state.joined(room_name("r1"));

        // when (操作):
        let other = state.transition(InboundKind::Other);
        let invalid_join = state.transition(InboundKind::Join { room: None });

        // then (期待する結果):
        assert_eq!(other, Transition::Relay(room_name("r1")));
        assert_eq!(invalid_join, Transition::Relay(room_name("r1")));
    }

    #[test]
    fn test_joined_second_join_is_relayed_not_switched() {
        // テスト項目: 参加済みで別ルームへの join を受け取っても移動せず中継される
        // given (前提条件):
        let mut state = ConnectionState::Unjoined;
        state.joined(room_name("r1"));

        // when (操作):
        let transition = state.transition(InboundKind::Join {
            room: Some(room_name("r2")),
        });

        // then (期待する結果):
        assert_eq!(transition, Transition::Relay(room_name("r1")));
        assert_eq!(state, ConnectionState::Joined(room_name("r1")));
    }
}
