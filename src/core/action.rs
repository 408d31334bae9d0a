//! Actions submitted by players.
//!
//! Actions arrive from the transport layer as tagged records:
//!
//! ```
//! use homeworlds::core::{Action, Color, Player, Size};
//!
//! let action: Action = serde_json::from_str(
//!     r#"{"type":"setup:take_star","color":"yellow","size":1,"player":"player1"}"#,
//! ).unwrap();
//!
//! assert_eq!(action, Action::TakeStar {
//!     color: Color::Yellow,
//!     size: Size::Small,
//!     player: Player::Player1,
//! });
//! ```

use serde::{Deserialize, Serialize};

use super::piece::{Color, Size};
use super::player::Player;

/// A setup-phase action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Claim a star from the bank for the player's home system.
    #[serde(rename = "setup:take_star")]
    TakeStar { color: Color, size: Size, player: Player },

    /// Claim a ship from the bank for the player's home system.
    #[serde(rename = "setup:take_ship")]
    TakeShip { color: Color, size: Size, player: Player },
}

impl Action {
    /// The acting player.
    #[must_use]
    pub const fn player(&self) -> Player {
        match *self {
            Action::TakeStar { player, .. } | Action::TakeShip { player, .. } => player,
        }
    }

    /// Requested piece color.
    #[must_use]
    pub const fn color(&self) -> Color {
        match *self {
            Action::TakeStar { color, .. } | Action::TakeShip { color, .. } => color,
        }
    }

    /// Requested piece size.
    #[must_use]
    pub const fn size(&self) -> Size {
        match *self {
            Action::TakeStar { size, .. } | Action::TakeShip { size, .. } => size,
        }
    }

    /// Wire name of this action.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Action::TakeStar { .. } => "setup:take_star",
            Action::TakeShip { .. } => "setup:take_ship",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} by {}",
            self.kind(),
            self.color(),
            self.size(),
            self.player()
        )
    }
}

/// An entry in a game's action log.
///
/// The hosting service persists these; replaying them in `sequence` order
/// from the initial state reproduces the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the log, starting at 0.
    pub sequence: u32,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    #[must_use]
    pub fn new(sequence: u32, action: Action) -> Self {
        Self { sequence, action }
    }

    /// The player who took this action.
    #[must_use]
    pub fn player(&self) -> Player {
        self.action.player()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_accessors() {
        let action = Action::TakeShip {
            color: Color::Green,
            size: Size::Large,
            player: Player::Player2,
        };

        assert_eq!(action.player(), Player::Player2);
        assert_eq!(action.color(), Color::Green);
        assert_eq!(action.size(), Size::Large);
        assert_eq!(action.kind(), "setup:take_ship");
        assert_eq!(action.to_string(), "setup:take_ship green 3 by player2");
    }

    #[test]
    fn test_action_wire_format() {
        let action = Action::TakeShip {
            color: Color::Red,
            size: Size::Medium,
            player: Player::Player1,
        };
        let json = serde_json::to_value(action).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "setup:take_ship",
                "color": "red",
                "size": 2,
                "player": "player1",
            })
        );
    }

    #[test]
    fn test_action_rejects_unknown_type() {
        let result = serde_json::from_str::<Action>(
            r#"{"type":"setup:take_moon","color":"red","size":2,"player":"player1"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            3,
            Action::TakeStar {
                color: Color::Blue,
                size: Size::Small,
                player: Player::Player2,
            },
        );

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "sequence": 3,
                "action": {"type": "setup:take_star", "color": "blue", "size": 1, "player": "player2"},
            })
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
        assert_eq!(deserialized.player(), Player::Player2);
    }
}
