//! Random playouts.
//!
//! Plays uniformly random legal actions from a seeded [`GameRng`]. The same
//! seed always yields the same log, which makes playouts usable as fixtures
//! for property tests and benchmarks.

use crate::core::{ActionRecord, GameRng, GameState, PhaseTag};

use super::engine::RulesEngine;

/// Final state of a playout and the log that produced it.
#[derive(Clone, Debug)]
pub struct Playout {
    pub state: GameState,
    pub log: Vec<ActionRecord>,
}

/// Play random legal actions from the initial state until setup ends or no
/// action is legal.
pub fn random_setup<R>(rules: &R, rng: &mut GameRng) -> Playout
where
    R: RulesEngine + ?Sized,
{
    let mut state = GameState::initial();
    let mut log = Vec::new();

    while state.tag() == PhaseTag::Setup {
        let legal = rules.legal_actions(&state);
        let Some(&action) = rng.choose(&legal) else {
            tracing::debug!(active_player = %state.active_player, "no legal action, stopping playout");
            break;
        };
        state = rules.apply(&state, &action).into_owned();
        log.push(ActionRecord::new(log.len() as u32, action));
    }

    Playout { state, log }
}
