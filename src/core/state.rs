//! Game state: the aggregate every action transforms.
//!
//! ## Phases
//!
//! - `Setup`: players alternately claim two stars and one ship each.
//! - `Normal`: entered once both home systems are valid. Only this phase
//!   carries in-play systems and a winner slot.
//!
//! ## Immutability
//!
//! Every transition takes `&self` and returns a new state. Collections are
//! `im` persistent structures, so a new state shares most of its memory with
//! the old one. Transitions that may leave the state untouched return
//! `Cow::Borrowed(self)` in that case.
//!
//! ## Conservation
//!
//! Every one of the 36 pieces is always in exactly one place: the bank, a
//! system's stars, or a system's ships.
//! [`check_conservation`](GameState::check_conservation) verifies this.

use std::borrow::Cow;

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bank::Bank;
use super::piece::{Color, Piece, Size, TOTAL_PIECES};
use super::player::{PerPlayer, Player};
use super::system::{StarSystem, SystemId, SystemValidity};

/// Phase discriminant, without phase data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseTag {
    Setup,
    Normal,
}

impl std::fmt::Display for PhaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseTag::Setup => f.write_str("setup"),
            PhaseTag::Normal => f.write_str("normal"),
        }
    }
}

/// Game phase with its phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Normal {
        /// Systems in play besides the two home systems.
        systems: Vector<StarSystem>,
        winner: Option<Player>,
    },
}

impl Phase {
    #[must_use]
    pub fn tag(&self) -> PhaseTag {
        match self {
            Phase::Setup => PhaseTag::Setup,
            Phase::Normal { .. } => PhaseTag::Normal,
        }
    }
}

/// A broken conservation invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConservationError {
    #[error("expected {expected} pieces across bank and systems, found {actual}")]
    PieceCountMismatch { expected: usize, actual: usize },

    #[error("piece {0} is in more than one place")]
    DuplicatePiece(Piece),
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub bank: Bank,
    pub active_player: Player,
    pub home_systems: PerPlayer<StarSystem>,
    #[serde(flatten)]
    pub phase: Phase,
}

impl GameState {
    /// The canonical start: full bank, empty homes, setup phase, player 1
    /// to move.
    ///
    /// ```
    /// use homeworlds::core::{GameState, PhaseTag, Player};
    ///
    /// let state = GameState::initial();
    /// assert_eq!(state.bank.size(), 36);
    /// assert_eq!(state.tag(), PhaseTag::Setup);
    /// assert_eq!(state.active_player, Player::Player1);
    /// ```
    #[must_use]
    pub fn initial() -> Self {
        Self {
            bank: Bank::full(),
            active_player: Player::Player1,
            home_systems: PerPlayer::new(StarSystem::empty_home),
            phase: Phase::Setup,
        }
    }

    /// Current phase tag.
    #[must_use]
    pub fn tag(&self) -> PhaseTag {
        self.phase.tag()
    }

    /// In-play systems, or `None` during setup.
    #[must_use]
    pub fn systems(&self) -> Option<&Vector<StarSystem>> {
        match &self.phase {
            Phase::Setup => None,
            Phase::Normal { systems, .. } => Some(systems),
        }
    }

    /// The winner, once one has been decided.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match &self.phase {
            Phase::Setup => None,
            Phase::Normal { winner, .. } => *winner,
        }
    }

    // === Players ===

    /// Copy of this state with the other player to move.
    #[must_use]
    pub fn switch_active_player(&self) -> Self {
        Self {
            active_player: self.active_player.opponent(),
            ..self.clone()
        }
    }

    // === Bank ===

    /// Take the earliest bank piece of the given color and size.
    ///
    /// Returns `None` if none is available.
    #[must_use]
    pub fn take_piece_from_bank(&self, color: Color, size: Size) -> Option<(Piece, Self)> {
        let (piece, bank) = self.bank.take_piece(color, size)?;
        Some((piece, Self { bank, ..self.clone() }))
    }

    /// Copy of this state with `piece` returned to the bank.
    #[must_use]
    pub fn add_piece_to_bank(&self, piece: Piece) -> Self {
        Self {
            bank: self.bank.add_piece(piece),
            ..self.clone()
        }
    }

    // === Systems ===

    /// A player's home system.
    #[must_use]
    pub fn home_system(&self, player: Player) -> &StarSystem {
        &self.home_systems[player]
    }

    /// Copy of this state with a player's home system replaced.
    #[must_use]
    pub fn with_home_system(&self, player: Player, system: StarSystem) -> Self {
        Self {
            home_systems: self.home_systems.with(player, system),
            ..self.clone()
        }
    }

    /// Home systems, then in-play systems once the game is underway.
    pub fn all_systems(&self) -> impl Iterator<Item = &StarSystem> {
        self.home_systems
            .values()
            .chain(self.systems().into_iter().flat_map(|systems| systems.iter()))
    }

    /// Look up any system by id.
    #[must_use]
    pub fn find_system(&self, id: &SystemId) -> Option<&StarSystem> {
        self.all_systems().find(|system| system.id == *id)
    }

    /// Copy of this state with a new in-play system.
    ///
    /// Returns `None` during setup, which has no in-play systems.
    #[must_use]
    pub fn add_system(&self, system: StarSystem) -> Option<Self> {
        let Phase::Normal { systems, winner } = &self.phase else {
            return None;
        };
        let mut systems = systems.clone();
        systems.push_back(system);
        Some(Self {
            phase: Phase::Normal {
                systems,
                winner: *winner,
            },
            ..self.clone()
        })
    }

    /// Every piece placed in a system, ownership stripped.
    #[must_use]
    pub fn all_pieces(&self) -> Vec<Piece> {
        self.all_systems().flat_map(|system| system.pieces()).collect()
    }

    // === Phase ===

    /// Enter the normal phase if still in setup and both home systems are
    /// valid. Otherwise returns `self` untouched.
    #[must_use]
    pub fn maybe_to_normal(&self) -> Cow<'_, Self> {
        if self.tag() != PhaseTag::Setup {
            return Cow::Borrowed(self);
        }
        if !self.home_systems.values().all(StarSystem::is_valid) {
            return Cow::Borrowed(self);
        }

        tracing::info!(active_player = %self.active_player, "setup complete, entering normal phase");
        Cow::Owned(Self {
            phase: Phase::Normal {
                systems: Vector::new(),
                winner: None,
            },
            ..self.clone()
        })
    }

    // === Cleanup ===

    /// Dissolve every in-play system that has lost all its stars or all its
    /// ships, returning the pieces to the bank.
    ///
    /// Home systems are never removed.
    #[must_use]
    pub fn cleanup_systems(&self) -> Cow<'_, Self> {
        let Phase::Normal { systems, winner } = &self.phase else {
            return Cow::Borrowed(self);
        };
        if systems.iter().all(StarSystem::is_valid) {
            return Cow::Borrowed(self);
        }

        let mut bank = self.bank.clone();
        let mut kept = Vector::new();
        for system in systems {
            match system.validate() {
                SystemValidity::Valid => kept.push_back(system.clone()),
                SystemValidity::Invalid { pieces_to_cleanup } => {
                    tracing::info!(
                        system = %system.id,
                        returned = pieces_to_cleanup.len(),
                        "dissolving system"
                    );
                    bank = bank.add_pieces(pieces_to_cleanup);
                }
            }
        }

        Cow::Owned(Self {
            bank,
            phase: Phase::Normal {
                systems: kept,
                winner: *winner,
            },
            ..self.clone()
        })
    }

    /// Strip every piece of `color` from a system, return them to the bank,
    /// then dissolve any in-play system left invalid.
    ///
    /// Returns `None` if no system has that id.
    #[must_use]
    pub fn purge_color(&self, id: &SystemId, color: Color) -> Option<Self> {
        let system = self.find_system(id)?;
        let (removed, purged) = system.remove_pieces_of_color(color);
        tracing::debug!(system = %id, %color, removed = removed.len(), "purging color");

        let bank = self.bank.add_pieces(removed);
        let state = match *id {
            SystemId::Home(player) => Self {
                bank,
                ..self.with_home_system(player, purged)
            },
            SystemId::Star(_) => {
                let Phase::Normal { systems, winner } = &self.phase else {
                    return None;
                };
                let systems = systems
                    .iter()
                    .map(|s| if s.id == *id { purged.clone() } else { s.clone() })
                    .collect();
                Self {
                    bank,
                    phase: Phase::Normal {
                        systems,
                        winner: *winner,
                    },
                    ..self.clone()
                }
            }
        };

        Some(state.cleanup_systems().into_owned())
    }

    // === Invariants ===

    /// Verify every piece is in exactly one place.
    pub fn check_conservation(&self) -> Result<(), ConservationError> {
        let mut seen = FxHashSet::default();
        let mut actual = 0;

        for piece in self.bank.pieces().chain(self.all_pieces()) {
            if !seen.insert(piece) {
                return Err(ConservationError::DuplicatePiece(piece));
            }
            actual += 1;
        }

        if actual != TOTAL_PIECES {
            return Err(ConservationError::PieceCountMismatch {
                expected: TOTAL_PIECES,
                actual,
            });
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
