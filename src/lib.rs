//! # homeworlds
//!
//! Rules engine for a two-player strategy game of star systems built from a
//! shared bank of 36 colored, sized pieces.
//!
//! ## Design Principles
//!
//! 1. **Immutable State**: Every transition returns a new `GameState`. Old
//!    states stay valid and comparable, so hosts get undo, replay and
//!    snapshots for free.
//!
//! 2. **Validate, Then Apply**: Rule checking (`validate`) and mutation
//!    (`apply`) are separate pure functions. Violations are returned as
//!    data; `apply` never fails and leaves the state untouched when its
//!    precondition does not hold.
//!
//! 3. **Conservation**: Every piece is always in exactly one place: the
//!    bank, a star, or a ship.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `im-rs` collections make state clones
//!   cheap.
//!
//! - **Determinism**: Replaying an ordered action log from
//!   `GameState::initial()` always reproduces the same state.
//!
//! - **No Internal Synchronization**: Hosts serialize validate+apply pairs
//!   per game themselves.
//!
//! ## Modules
//!
//! - `core`: Pieces, players, bank, star systems, state, actions, config
//! - `rules`: Validation, setup rules, replay and random playouts
//!
//! ## Example
//!
//! ```
//! use homeworlds::{Action, Color, GameState, PhaseTag, Player, RulesEngine, SetupRules, Size};
//!
//! let rules = SetupRules::default();
//! let mut state = GameState::initial();
//!
//! for action in [
//!     Action::TakeStar { color: Color::Yellow, size: Size::Small, player: Player::Player1 },
//!     Action::TakeStar { color: Color::Blue, size: Size::Medium, player: Player::Player2 },
//!     Action::TakeStar { color: Color::Green, size: Size::Medium, player: Player::Player1 },
//!     Action::TakeStar { color: Color::Red, size: Size::Small, player: Player::Player2 },
//!     Action::TakeShip { color: Color::Green, size: Size::Large, player: Player::Player1 },
//!     Action::TakeShip { color: Color::Blue, size: Size::Large, player: Player::Player2 },
//! ] {
//!     state = rules.submit(&state, &action).unwrap();
//! }
//!
//! assert_eq!(state.tag(), PhaseTag::Normal);
//! assert_eq!(state.active_player, Player::Player1);
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Color, Size, Piece, Ship, Star, INSTANCES_PER_KIND, TOTAL_PIECES,
    Player, PerPlayer,
    Bank,
    StarSystem, SystemId, SystemValidity,
    GameState, Phase, PhaseTag, ConservationError,
    Action, ActionRecord,
    RulesConfig, GameRng,
};

pub use crate::rules::{
    RulesEngine, SetupRules,
    ValidationError, ValidationResult,
    replay, replay_records, ReplayError,
    random_setup, Playout,
};
