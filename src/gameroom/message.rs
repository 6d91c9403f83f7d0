use super::*;
use crate::rules::Color;
use crate::rules::MoveSpec;
use serde::Serialize;

/// Messages sent from server to client over WebSocket.
/// Encoded as `{"type": ..., "payload": ...}` envelopes.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    /// Game created, with this player's color and both display names.
    #[serde(rename_all = "camelCase")]
    InitGame {
        color: Color,
        white_player_name: String,
        black_player_name: String,
    },
    /// A move was accepted. Times are seconds remaining, white first.
    #[serde(rename_all = "camelCase")]
    Move {
        #[serde(rename = "move")]
        spec: MoveSpec,
        player1_time: u32,
        player2_time: u32,
    },
    /// The game is finished.
    GameOver { winner: Winner, reason: Reason },
    /// The sender's request was refused.
    GameAlert { message: String },
    /// The other player left mid-game.
    OpponentDisconnected { message: String },
}

impl ServerMessage {
    pub fn init_game(color: Color, names: &Names) -> Self {
        Self::InitGame {
            color,
            white_player_name: names.white().to_string(),
            black_player_name: names.black().to_string(),
        }
    }
    pub fn moved(spec: &MoveSpec, clock: &Clock) -> Self {
        let (white, black) = clock.snapshot();
        Self::Move {
            spec: spec.clone(),
            player1_time: white,
            player2_time: black,
        }
    }
    pub fn game_over(outcome: Outcome) -> Self {
        Self::GameOver {
            winner: outcome.winner,
            reason: outcome.reason,
        }
    }
    pub fn alert(message: &str) -> Self {
        Self::GameAlert {
            message: message.to_string(),
        }
    }
    pub fn opponent_disconnected() -> Self {
        Self::OpponentDisconnected {
            message: "Opponent disconnected".to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    fn value(msg: ServerMessage) -> serde_json::Value {
        serde_json::from_str(&msg.to_json()).unwrap()
    }
    #[test]
    fn init_game_envelope() {
        let names = Names::new("Swift Pawn #1", "Calm Owl #2");
        assert_eq!(
            value(ServerMessage::init_game(Color::Black, &names)),
            json!({
                "type": "INIT_GAME",
                "payload": {
                    "color": "black",
                    "whitePlayerName": "Swift Pawn #1",
                    "blackPlayerName": "Calm Owl #2",
                }
            })
        );
    }
    #[test]
    fn move_envelope() {
        let mut clock = Clock::new(600);
        clock.tick(Color::White);
        assert_eq!(
            value(ServerMessage::moved(&MoveSpec::new("e2", "e4"), &clock)),
            json!({
                "type": "MOVE",
                "payload": {
                    "move": { "from": "e2", "to": "e4" },
                    "player1Time": 599,
                    "player2Time": 600,
                }
            })
        );
    }
    #[test]
    fn game_over_envelope() {
        let outcome = Outcome::new(Winner::Black, Reason::Resignation);
        assert_eq!(
            value(ServerMessage::game_over(outcome)),
            json!({
                "type": "GAME_OVER",
                "payload": { "winner": "black", "reason": "resignation" }
            })
        );
    }
    #[test]
    fn notice_envelopes() {
        assert_eq!(
            value(ServerMessage::alert("not your turn")),
            json!({ "type": "GAME_ALERT", "payload": { "message": "not your turn" } })
        );
        assert_eq!(
            value(ServerMessage::opponent_disconnected())["type"],
            json!("OPPONENT_DISCONNECTED")
        );
    }
}
