//! Game rules: validation and application of actions.
//!
//! Rule sets implement `RulesEngine`. Validation and application are kept
//! as two separate pure functions; see `engine` for the calling protocol.

pub mod validation;
pub mod engine;
pub mod setup;
pub mod replay;
pub mod playout;

pub use validation::{ValidationError, ValidationResult};
pub use engine::RulesEngine;
pub use setup::{apply, validate, SetupRules};
pub use replay::{replay, replay_records, ReplayError};
pub use playout::{random_setup, Playout};
