//! WebSocket envelope DTOs.
//!
//! Every frame is a JSON object `{ "type": ..., "payload": ... }`. Only
//! `join` and `info` carry meaning for the server; any other type is relayed
//! without being inspected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Notification text sent to existing members when someone joins
pub const USER_JOINED_TEXT: &str = "A new user has joined.";
/// Notification text sent to remaining members when someone leaves
pub const USER_LEFT_TEXT: &str = "A user has left.";

/// Discriminators reserved by the protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// client → server: bind this connection to a room
    Join,
    /// server → clients: system notification
    Info,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Info => "info",
        }
    }
}

/// The unit exchanged over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub r#type: String,
    #[serde(default)]
    pub payload: Value,
}

impl Envelope {
    /// Decode a text frame.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn is(&self, message_type: MessageType) -> bool {
        self.r#type == message_type.as_str()
    }

}

/// Serialized `info` notification carrying `text`
pub fn info_frame(text: &str) -> String {
    serde_json::json!({
        "type": MessageType::Info.as_str(),
        "payload": { "text": text },
    })
    .to_string()
}

/// Payload of a `join` envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinPayload {
    pub room_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_envelope_with_payload() {
        // テスト項目: type と payload を持つ JSON が封筒として解釈される
        // given (前提条件):
        let text = r#"{"type":"chat","payload":{"text":"hi"}}"#;

        // when (操作):
        let envelope = Envelope::parse(text).unwrap();

        // then (期待する結果):
        assert_eq!(envelope.r#type, "chat");
        assert_eq!(envelope.payload, json!({"text": "hi"}));
    }

    #[test]
    fn test_parse_envelope_without_payload_defaults_to_null() {
        // テスト項目: payload が省略された封筒は null の payload を持つ
        // given (前提条件):
        let text = r#"{"type":"ping"}"#;

        // when (操作):
        let envelope = Envelope::parse(text).unwrap();

        // then (期待する結果):
        assert_eq!(envelope.payload, Value::Null);
    }

    #[test]
    fn test_parse_rejects_non_envelope_input() {
        // テスト項目: 封筒の形をしていない入力は解析エラーになる
        // given (前提条件):
        let inputs = [
            "not json",
            r#"["type","chat"]"#,
            r#"{"payload":{}}"#,
            r#"{"type":42,"payload":{}}"#,
        ];

        // when (操作) / then (期待する結果):
        for input in inputs {
            assert!(Envelope::parse(input).is_err(), "accepted: {input}");
        }
    }

    #[test]
    fn test_info_frame_serializes_to_wire_shape() {
        // テスト項目: info 通知が {type, payload: {text}} の形で出力される
        // when (操作):
        let frame = info_frame(USER_JOINED_TEXT);

        // then (期待する結果):
        let value: Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(
            value,
            json!({"type": "info", "payload": {"text": "A new user has joined."}})
        );
        assert!(Envelope::parse(&frame).unwrap().is(MessageType::Info));
    }

    #[test]
    fn test_join_payload_uses_camel_case_room_name() {
        // テスト項目: join の payload は roomName キーで解釈される
        // given (前提条件):
        let payload = json!({"roomName": "r1"});

        // when (操作):
        let join: JoinPayload = serde_json::from_value(payload).unwrap();

        // then (期待する結果):
        assert_eq!(join.room_name, "r1");
        assert!(serde_json::from_value::<JoinPayload>(json!({"room_name": "r1"})).is_err());
    }
}
