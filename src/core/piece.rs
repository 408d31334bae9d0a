//! Pieces: the physical tokens every star and ship is made from.
//!
//! ## Supply
//!
//! There are four colors and three sizes, with exactly
//! [`INSTANCES_PER_KIND`] physical pieces of each (color, size) pair:
//! 36 pieces in total. A piece's identity is the triple
//! `(color, size, instance)`, rendered as `"{color}-{size}-{instance}"`.
//!
//! ```
//! use homeworlds::core::{Color, Piece, Size};
//!
//! let piece = Piece::new(Color::Blue, Size::Medium, 0);
//! assert_eq!(piece.id(), "blue-2-0");
//! ```
//!
//! ## Stars and Ships
//!
//! A [`Star`] is a bare piece. A [`Ship`] is a piece with an owner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::Player;

/// Number of physical pieces per (color, size) pair.
pub const INSTANCES_PER_KIND: u8 = 3;

/// Total number of pieces in a game.
pub const TOTAL_PIECES: usize = Color::COUNT * Size::COUNT * INSTANCES_PER_KIND as usize;

/// Piece color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Green,
    Blue,
    Red,
}

impl Color {
    /// Number of colors.
    pub const COUNT: usize = 4;

    /// All colors, in canonical order.
    pub const ALL: [Color; Self::COUNT] = [Color::Yellow, Color::Green, Color::Blue, Color::Red];

    /// Position of this color in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece size, serialized as the integer 1, 2 or 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Size {
    Small = 1,
    Medium = 2,
    Large = 3,
}

/// Raised when an integer outside 1..=3 is read as a [`Size`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid piece size {0}, expected 1, 2 or 3")]
pub struct InvalidSize(pub u8);

impl Size {
    /// Number of sizes.
    pub const COUNT: usize = 3;

    /// All sizes, smallest first.
    pub const ALL: [Size; Self::COUNT] = [Size::Small, Size::Medium, Size::Large];

    /// Position of this size in [`Size::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Numeric value (1..=3).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl From<Size> for u8 {
    fn from(size: Size) -> u8 {
        size.value()
    }
}

impl TryFrom<u8> for Size {
    type Error = InvalidSize;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Size::Small),
            2 => Ok(Size::Medium),
            3 => Ok(Size::Large),
            other => Err(InvalidSize(other)),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A physical piece.
///
/// Identity is the full `(color, size, instance)` triple; `instance` is in
/// `0..INSTANCES_PER_KIND`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub size: Size,
    pub instance: u8,
}

impl Piece {
    /// Create a piece.
    #[must_use]
    pub const fn new(color: Color, size: Size, instance: u8) -> Self {
        Self { color, size, instance }
    }

    /// Composite id, unique across the whole supply.
    #[must_use]
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// Attach an owner, turning this piece into a ship.
    #[must_use]
    pub const fn into_ship(self, owner: Player) -> Ship {
        Ship { piece: self, owner }
    }

    /// Iterate over every piece in the supply, in canonical order
    /// (color, then size, then instance).
    pub fn all() -> impl Iterator<Item = Piece> {
        Color::ALL.into_iter().flat_map(|color| {
            Size::ALL.into_iter().flat_map(move |size| {
                (0..INSTANCES_PER_KIND).map(move |instance| Piece::new(color, size, instance))
            })
        })
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.color, self.size, self.instance)
    }
}

/// A star is an owner-less piece.
pub type Star = Piece;

/// A piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ship {
    pub piece: Piece,
    pub owner: Player,
}

impl Ship {
    /// Create a ship.
    #[must_use]
    pub const fn new(piece: Piece, owner: Player) -> Self {
        Self { piece, owner }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.piece.color
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.piece.size
    }

    /// Strip ownership, leaving the bare piece.
    #[must_use]
    pub const fn into_piece(self) -> Piece {
        self.piece
    }
}
