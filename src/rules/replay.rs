//! Rebuilding state from an action log.
//!
//! Rules are deterministic, so replaying the same ordered actions from
//! `GameState::initial()` always reproduces the same state. Hosts can
//! persist the log instead of full snapshots.

use thiserror::Error;

use crate::core::{Action, ActionRecord, GameState};

use super::engine::RulesEngine;
use super::validation::ValidationError;

/// Why a log could not be replayed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("action {index} ({action}) rejected: {error}")]
    Rejected {
        index: usize,
        action: Action,
        #[source]
        error: ValidationError,
    },

    #[error("log entry {index} has sequence {found}, expected {expected}")]
    OutOfSequence {
        index: usize,
        expected: u32,
        found: u32,
    },
}

/// Replay `actions` in order from the initial state.
///
/// Each action is validated before it is applied; the first rejection stops
/// the replay.
pub fn replay<'a, R>(rules: &R, actions: impl IntoIterator<Item = &'a Action>) -> Result<GameState, ReplayError>
where
    R: RulesEngine + ?Sized,
{
    let mut state = GameState::initial();
    for (index, action) in actions.into_iter().enumerate() {
        state = rules
            .submit(&state, action)
            .map_err(|error| ReplayError::Rejected {
                index,
                action: *action,
                error,
            })?;
    }
    tracing::debug!(tag = %state.tag(), "replay finished");
    Ok(state)
}

/// Replay a persisted log, requiring sequence numbers `0, 1, 2, ...`.
pub fn replay_records<R>(rules: &R, records: &[ActionRecord]) -> Result<GameState, ReplayError>
where
    R: RulesEngine + ?Sized,
{
    for (index, record) in records.iter().enumerate() {
        let expected = index as u32;
        if record.sequence != expected {
            return Err(ReplayError::OutOfSequence {
                index,
                expected,
                found: record.sequence,
            });
        }
    }
    replay(rules, records.iter().map(|record| &record.action))
}
