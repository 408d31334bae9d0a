//! Setup-phase rules: each player claims two stars, then a ship.
//!
//! ## Validation order
//!
//! 1. Phase must be setup.
//! 2. The acting player must be the active player.
//! 3. The bank must hold a piece of the requested color and size.
//! 4. `TakeStar`: the home system must have fewer than two stars.
//! 5. `TakeShip`: the home system must already have two stars.
//!
//! ## Application
//!
//! The piece moves from the bank to the acting player's home (as a star, or
//! as a ship they own) and the turn passes. After a ship is taken, the game
//! enters the normal phase once both home systems are valid.
//!
//! ```
//! use homeworlds::core::{Action, Color, GameState, Player, Size};
//! use homeworlds::rules::{RulesEngine, SetupRules};
//!
//! let rules = SetupRules::default();
//! let state = GameState::initial();
//! let action = Action::TakeStar { color: Color::Blue, size: Size::Small, player: Player::Player1 };
//!
//! assert!(rules.validate(&state, &action).is_ok());
//! let next = rules.apply(&state, &action);
//! assert_eq!(next.active_player, Player::Player2);
//! assert_eq!(next.home_system(Player::Player1).stars.len(), 1);
//! ```

use std::borrow::Cow;

use crate::core::{Action, GameState, PhaseTag, RulesConfig};

use super::engine::RulesEngine;
use super::validation::{ValidationError, ValidationResult};

/// Rule set for the setup phase.
#[derive(Clone, Debug, Default)]
pub struct SetupRules {
    config: RulesConfig,
}

impl SetupRules {
    /// Create with the given rule constants.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    fn check(&self, state: &GameState, action: &Action) -> ValidationResult {
        let phase = state.tag();
        if phase != PhaseTag::Setup {
            return Err(ValidationError::WrongPhase {
                expected: PhaseTag::Setup,
                actual: phase,
            });
        }

        let player = action.player();
        if player != state.active_player {
            return Err(ValidationError::WrongPlayer {
                expected: state.active_player,
                actual: player,
            });
        }

        let (color, size) = (action.color(), action.size());
        if !state.bank.has_piece_of(color, size) {
            return Err(ValidationError::PieceNotInBank { color, size });
        }

        let star_count = state.home_system(player).stars.len();
        let required = self.config.home_star_count;
        match action {
            Action::TakeStar { .. } if star_count >= required => {
                Err(ValidationError::HomeSystemAlreadyHasTwoStars { player, required })
            }
            Action::TakeShip { .. } if star_count < required => {
                Err(ValidationError::HomeSystemNeedsTwoStars { player, required })
            }
            _ => Ok(()),
        }
    }
}

impl RulesEngine for SetupRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn validate(&self, state: &GameState, action: &Action) -> ValidationResult {
        let result = self.check(state, action);
        if let Err(error) = &result {
            tracing::trace!(%action, kind = error.kind(), "action rejected");
        }
        result
    }

    fn apply<'a>(&self, state: &'a GameState, action: &Action) -> Cow<'a, GameState> {
        let Some((piece, taken)) = state.take_piece_from_bank(action.color(), action.size()) else {
            tracing::debug!(%action, "piece not in bank, state unchanged");
            return Cow::Borrowed(state);
        };

        let player = action.player();
        let home = taken.home_system(player);
        let home = match action {
            Action::TakeStar { .. } => home.add_star(piece),
            Action::TakeShip { .. } => home.add_ship(piece.into_ship(player)),
        };
        tracing::debug!(%action, %piece, "action applied");

        let next = taken.with_home_system(player, home).switch_active_player();
        match action {
            Action::TakeStar { .. } => Cow::Owned(next),
            Action::TakeShip { .. } => Cow::Owned(next.maybe_to_normal().into_owned()),
        }
    }
}

/// Validate a setup action under the standard rules.
pub fn validate(state: &GameState, action: &Action) -> ValidationResult {
    SetupRules::default().validate(state, action)
}

/// Apply a setup action under the standard rules.
pub fn apply<'a>(state: &'a GameState, action: &Action) -> Cow<'a, GameState> {
    SetupRules::default().apply(state, action)
}
