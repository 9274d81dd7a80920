use serde::{Deserialize, Serialize};

use crate::games::tictactoe::MoveOutcome;

/// Payload of the inbound `info` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRequest {
    pub number: Option<i64>,
    #[serde(rename = "gameMode", default, skip_serializing_if = "Option::is_none")]
    pub game_mode: Option<i64>,
}

/// Payload of the outbound `update` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNotification {
    pub number: i64,
    pub parity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win: Option<bool>,
}

impl From<MoveOutcome> for UpdateNotification {
    fn from(outcome: MoveOutcome) -> Self {
        Self {
            number: outcome.number,
            parity: outcome.parity,
            win: outcome.won,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ClientMessage {
    Info(InfoRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ServerMessage {
    Update(UpdateNotification),
}

impl ClientMessage {
    pub fn decode(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to decode client message: {}", e))
    }
}

impl ServerMessage {
    pub fn encode(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to encode server message: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_info_with_game_mode() {
        let text = r#"{"event":"info","data":{"number":0,"gameMode":1}}"#;
        let message = ClientMessage::decode(text).unwrap();
        assert_eq!(
            message,
            ClientMessage::Info(InfoRequest { number: Some(0), game_mode: Some(1) })
        );
    }

    #[test]
    fn test_decode_info_without_fields() {
        let message = ClientMessage::decode(r#"{"event":"info","data":{}}"#).unwrap();
        assert_eq!(message, ClientMessage::Info(InfoRequest { number: None, game_mode: None }));
    }

    #[test]
    fn test_decode_rejects_unknown_event() {
        assert!(ClientMessage::decode(r#"{"event":"chat","data":{"text":"hi"}}"#).is_err());
        assert!(ClientMessage::decode("not json").is_err());
    }

    #[test]
    fn test_update_omits_win_while_game_continues() {
        let message = ServerMessage::Update(UpdateNotification { number: 3, parity: 1, win: None });
        assert_eq!(
            message.encode().unwrap(),
            r#"{"event":"update","data":{"number":3,"parity":1}}"#
        );
    }

    #[test]
    fn test_update_carries_win_flag() {
        let message = ServerMessage::Update(UpdateNotification {
            number: 7,
            parity: 0,
            win: Some(true),
        });
        assert_eq!(
            message.encode().unwrap(),
            r#"{"event":"update","data":{"number":7,"parity":0,"win":true}}"#
        );
    }
}
