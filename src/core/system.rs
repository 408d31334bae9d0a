//! Star systems: a location holding stars and ships.
//!
//! ## Kinds
//!
//! - A **normal** system has one star; its id is that star's piece.
//! - A **binary** system has two stars and is a player's home; its id is the
//!   player's home tag.
//!
//! ## Validity
//!
//! A settled system needs at least one star and at least one ship. A system
//! lacking either is dissolved and its remaining pieces go back to the bank.
//! [`StarSystem::validate`] reports which pieces that would be; mutation
//! helpers never cascade cleanup themselves.
//!
//! ## Overpopulation
//!
//! A color is overpopulated once four or more stars and ships of that color
//! share a system.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::{Color, Piece, Ship, Star};
use super::player::Player;

/// Default overpopulation threshold.
pub const OVERPOPULATION_THRESHOLD: usize = 4;

/// Star system identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemId {
    /// A normal system, named after its sole star.
    Star(Piece),
    /// A player's home system.
    Home(Player),
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemId::Star(piece) => write!(f, "{piece}"),
            SystemId::Home(player) => write!(f, "home-{player}"),
        }
    }
}

/// Outcome of checking a system against the settled-system rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SystemValidity {
    Valid,
    /// The system must be dissolved; these pieces return to the bank.
    Invalid { pieces_to_cleanup: Vec<Piece> },
}

impl SystemValidity {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, SystemValidity::Valid)
    }
}

/// A named collection of stars and ships.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarSystem {
    pub id: SystemId,
    pub stars: SmallVec<[Star; 2]>,
    pub ships: Vector<Ship>,
}

impl StarSystem {
    /// Create a normal (single-star) system.
    #[must_use]
    pub fn normal(star: Star, ships: impl IntoIterator<Item = Ship>) -> Self {
        Self {
            id: SystemId::Star(star),
            stars: smallvec::smallvec![star],
            ships: ships.into_iter().collect(),
        }
    }

    /// Create a binary home system.
    #[must_use]
    pub fn binary(
        player: Player,
        star1: Star,
        star2: Star,
        ships: impl IntoIterator<Item = Ship>,
    ) -> Self {
        Self {
            id: SystemId::Home(player),
            stars: smallvec::smallvec![star1, star2],
            ships: ships.into_iter().collect(),
        }
    }

    /// An empty home system, as held by each player before setup.
    #[must_use]
    pub fn empty_home(player: Player) -> Self {
        Self {
            id: SystemId::Home(player),
            stars: SmallVec::new(),
            ships: Vector::new(),
        }
    }

    /// Check the settled-system rule.
    ///
    /// With no stars, every ship (stripped of its owner) must be cleaned up.
    /// With stars but no ships, every star must be cleaned up.
    #[must_use]
    pub fn validate(&self) -> SystemValidity {
        if self.stars.is_empty() {
            SystemValidity::Invalid {
                pieces_to_cleanup: self.ships.iter().map(|ship| ship.into_piece()).collect(),
            }
        } else if self.ships.is_empty() {
            SystemValidity::Invalid {
                pieces_to_cleanup: self.stars.to_vec(),
            }
        } else {
            SystemValidity::Valid
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Copy of this system with a star appended.
    #[must_use]
    pub fn add_star(&self, star: Star) -> Self {
        let mut system = self.clone();
        system.stars.push(star);
        system
    }

    /// Copy of this system with a ship appended.
    #[must_use]
    pub fn add_ship(&self, ship: Ship) -> Self {
        let mut system = self.clone();
        system.ships.push_back(ship);
        system
    }

    /// Remove a ship, matched by its piece.
    ///
    /// Returns `None` if the ship is not here. Callers re-run
    /// [`validate`](Self::validate) afterwards.
    #[must_use]
    pub fn remove_ship(&self, ship: &Ship) -> Option<(Piece, Self)> {
        let index = self.ship_index(ship)?;
        let mut system = self.clone();
        let removed = system.ships.remove(index);
        Some((removed.into_piece(), system))
    }

    /// Strip every star and ship of `color`, returning the removed pieces
    /// (stars first).
    #[must_use]
    pub fn remove_pieces_of_color(&self, color: Color) -> (Vec<Piece>, Self) {
        let (removed_stars, kept_stars): (Vec<Star>, Vec<Star>) =
            self.stars.iter().partition(|star| star.color == color);
        let (removed_ships, kept_ships): (Vec<Ship>, Vec<Ship>) =
            self.ships.iter().partition(|ship| ship.color() == color);

        let removed = removed_stars
            .into_iter()
            .chain(removed_ships.into_iter().map(Ship::into_piece))
            .collect();

        let system = Self {
            id: self.id,
            stars: kept_stars.into_iter().collect(),
            ships: kept_ships.into_iter().collect(),
        };

        (removed, system)
    }

    /// Number of stars and ships of `color`.
    #[must_use]
    pub fn color_count(&self, color: Color) -> usize {
        let stars = self.stars.iter().filter(|star| star.color == color).count();
        let ships = self.ships.iter().filter(|ship| ship.color() == color).count();
        stars + ships
    }

    /// Colors with at least [`OVERPOPULATION_THRESHOLD`] pieces here.
    #[must_use]
    pub fn overpopulations(&self) -> Vec<Color> {
        self.overpopulations_at(OVERPOPULATION_THRESHOLD)
    }

    /// Colors with at least `threshold` pieces here, in canonical color order.
    #[must_use]
    pub fn overpopulations_at(&self, threshold: usize) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|&color| self.color_count(color) >= threshold)
            .collect()
    }

    fn ship_index(&self, ship: &Ship) -> Option<usize> {
        self.ships.iter().position(|here| here.piece == ship.piece)
    }

    /// Hand a ship, matched by its piece, to another player.
    ///
    /// Returns `None` if the ship is not here.
    #[must_use]
    pub fn change_ship_owner(&self, ship: &Ship, new_owner: Player) -> Option<Self> {
        let index = self.ship_index(ship)?;
        let mut system = self.clone();
        system.ships.set(index, Ship::new(ship.piece, new_owner));
        Some(system)
    }

    /// Ships owned by `player`.
    pub fn player_ships(&self, player: Player) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(move |ship| ship.owner == player)
    }

    /// Colors `player` can draw on here: their ship colors plus the star
    /// colors, in canonical color order.
    #[must_use]
    pub fn available_colors(&self, player: Player) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|&color| {
                self.stars.iter().any(|star| star.color == color)
                    || self.player_ships(player).any(|ship| ship.color() == color)
            })
            .collect()
    }

    /// Every piece here, stars first, ownership stripped.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.stars
            .iter()
            .copied()
            .chain(self.ships.iter().map(|ship| ship.into_piece()))
    }

    /// Total stars and ships.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.stars.len() + self.ships.len()
    }
}
