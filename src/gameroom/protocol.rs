use crate::rules::MoveSpec;
use serde::Deserialize;

/// Errors that can occur while decoding client messages.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    MalformedEnvelope(String),
    MalformedPayload(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedEnvelope(s) => write!(f, "malformed envelope: {}", s),
            Self::MalformedPayload(s) => write!(f, "malformed payload: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Requests a client can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMessage {
    /// Join the matchmaking slot.
    InitGame,
    /// Propose a move in the current game.
    Move(MoveSpec),
    /// Concede the current game.
    Resign,
    /// Well-formed envelope with a type this server does not handle.
    Unknown(String),
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

#[derive(Deserialize)]
struct MovePayload {
    #[serde(rename = "move")]
    spec: MoveSpec,
}

/// Handles wire decoding of client messages.
/// Envelope and payload shape are checked here; move legality is not.
pub struct Protocol;

impl Protocol {
    pub fn decode(raw: &str) -> Result<ClientMessage, ProtocolError> {
        let envelope = serde_json::from_str::<Envelope>(raw)
            .map_err(|e| ProtocolError::MalformedEnvelope(e.to_string()))?;
        match envelope.kind.as_str() {
            "INIT_GAME" => Ok(ClientMessage::InitGame),
            "RESIGN" => Ok(ClientMessage::Resign),
            "MOVE" => serde_json::from_value::<MovePayload>(envelope.payload)
                .map(|p| ClientMessage::Move(p.spec))
                .map_err(|e| ProtocolError::MalformedPayload(e.to_string())),
            _ => Ok(ClientMessage::Unknown(envelope.kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decode_requests() {
        assert_eq!(
            Protocol::decode(r#"{"type":"INIT_GAME"}"#).unwrap(),
            ClientMessage::InitGame
        );
        assert_eq!(
            Protocol::decode(r#"{"type":"RESIGN","payload":null}"#).unwrap(),
            ClientMessage::Resign
        );
        assert_eq!(
            Protocol::decode(r#"{"type":"MOVE","payload":{"move":{"from":"e7","to":"e8","promotion":"q"}}}"#)
                .unwrap(),
            ClientMessage::Move(MoveSpec::new("e7", "e8").promote("q"))
        );
    }
    #[test]
    fn decode_unknown_type() {
        assert_eq!(
            Protocol::decode(r#"{"type":"CHAT","payload":{"text":"hi"}}"#).unwrap(),
            ClientMessage::Unknown("CHAT".to_string())
        );
    }
    #[test]
    fn decode_malformed() {
        assert!(matches!(
            Protocol::decode("not json"),
            Err(ProtocolError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            Protocol::decode(r#"{"payload":{}}"#),
            Err(ProtocolError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            Protocol::decode(r#"{"type":"MOVE","payload":{"from":"e2"}}"#),
            Err(ProtocolError::MalformedPayload(_))
        ));
        assert!(matches!(
            Protocol::decode(r#"{"type":"MOVE"}"#),
            Err(ProtocolError::MalformedPayload(_))
        ));
    }
}
