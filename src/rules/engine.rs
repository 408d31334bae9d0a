//! Rules engine trait.
//!
//! A rule set exposes two separate pure functions:
//!
//! - `validate`: decide whether an action is legal, reporting why not.
//! - `apply`: carry out an action, trusting that it was validated.
//!
//! Callers must validate first and only apply on `Ok`. `apply` never fails:
//! if what it needs is missing it returns the input state borrowed and
//! unchanged. [`RulesEngine::submit`] runs both steps in order.

use std::borrow::Cow;

use crate::core::{Action, Color, GameState, RulesConfig, Size, StarSystem};

use super::validation::{ValidationError, ValidationResult};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` must not mutate anything and must be deterministic.
/// - `apply` must be deterministic and total; it returns
///   `Cow::Borrowed(state)` when it makes no change.
pub trait RulesEngine {
    /// Rule constants in effect.
    fn config(&self) -> &RulesConfig;

    /// Check whether `action` is legal in `state`.
    fn validate(&self, state: &GameState, action: &Action) -> ValidationResult;

    /// Carry out a validated action.
    fn apply<'a>(&self, state: &'a GameState, action: &Action) -> Cow<'a, GameState>;

    // === Convenience Methods ===

    /// Validate, then apply on success.
    ///
    /// Returns the rejection instead of a state when `action` is illegal.
    fn submit(&self, state: &GameState, action: &Action) -> Result<GameState, ValidationError> {
        self.validate(state, action)?;
        Ok(self.apply(state, action).into_owned())
    }

    /// Every action the active player may legally submit.
    ///
    /// Enumerates each color and size for each action kind, in canonical
    /// order, and keeps those that validate.
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let player = state.active_player;
        let mut actions = Vec::new();

        for color in Color::ALL {
            for size in Size::ALL {
                for action in [
                    Action::TakeStar { color, size, player },
                    Action::TakeShip { color, size, player },
                ] {
                    if self.validate(state, &action).is_ok() {
                        actions.push(action);
                    }
                }
            }
        }

        actions
    }

    /// Colors overpopulated in `system` under this rule set's threshold.
    fn overpopulations(&self, system: &StarSystem) -> Vec<Color> {
        system.overpopulations_at(self.config().overpopulation_threshold)
    }
}
