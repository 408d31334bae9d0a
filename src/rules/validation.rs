//! Validation results.
//!
//! Rule violations are data: `validate` returns one of these rather than
//! panicking. Each variant serializes with a `kind` tag so a host can pass it
//! to clients as-is.
//!
//! ```
//! use homeworlds::core::{Player, PhaseTag};
//! use homeworlds::rules::ValidationError;
//!
//! let error = ValidationError::WrongPhase {
//!     expected: PhaseTag::Setup,
//!     actual: PhaseTag::Normal,
//! };
//! assert_eq!(error.kind(), "wrong_phase");
//! assert_eq!(error.to_string(), "action is only legal during setup, game is in normal");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Color, PhaseTag, Player, Size};

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongPlayer { expected: Player, actual: Player },

    #[error("action is only legal during {expected}, game is in {actual}")]
    WrongPhase { expected: PhaseTag, actual: PhaseTag },

    #[error("no {color} piece of size {size} left in the bank")]
    PieceNotInBank { color: Color, size: Size },

    /// Wire names follow the standard two-star home; `required` carries the
    /// configured count.
    #[error("{player}'s home system already has its {required} stars")]
    HomeSystemAlreadyHasTwoStars { player: Player, required: usize },

    #[error("{player}'s home system needs {required} stars before taking a ship")]
    HomeSystemNeedsTwoStars { player: Player, required: usize },
}

impl ValidationError {
    /// Wire name of this error.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            ValidationError::WrongPlayer { .. } => "wrong_player",
            ValidationError::WrongPhase { .. } => "wrong_phase",
            ValidationError::PieceNotInBank { .. } => "piece_not_in_bank",
            ValidationError::HomeSystemAlreadyHasTwoStars { .. } => "home_system_already_has_two_stars",
            ValidationError::HomeSystemNeedsTwoStars { .. } => "home_system_needs_two_stars",
        }
    }
}

/// `Ok(())` when the action may be applied.
pub type ValidationResult = Result<(), ValidationError>;
