//! Core engine types: pieces, players, bank, star systems, state, actions.
//!
//! Everything here is plain data with pure transformations. Rule checking
//! lives in `rules`.

pub mod piece;
pub mod player;
pub mod bank;
pub mod system;
pub mod state;
pub mod action;
pub mod config;
pub mod rng;

pub use piece::{Color, InvalidSize, Piece, Ship, Size, Star, INSTANCES_PER_KIND, TOTAL_PIECES};
pub use player::{PerPlayer, Player};
pub use bank::Bank;
pub use system::{StarSystem, SystemId, SystemValidity, OVERPOPULATION_THRESHOLD};
pub use state::{ConservationError, GameState, Phase, PhaseTag};
pub use action::{Action, ActionRecord};
pub use config::RulesConfig;
pub use rng::GameRng;
