//! The bank: the shared pool of pieces not placed in any star system.
//!
//! Pieces are grouped by color and size. Within a group the available
//! instance indices are kept in insertion order: pieces returned to the bank
//! are appended, and taking always removes the earliest entry.
//!
//! All operations are pure. "Not found" is an absent result, never an error.
//!
//! ```
//! use homeworlds::core::{Bank, Color, Size};
//!
//! let bank = Bank::full();
//! assert_eq!(bank.size(), 36);
//!
//! let (piece, bank) = bank.take_piece(Color::Red, Size::Small).unwrap();
//! assert_eq!(piece.id(), "red-1-0");
//! assert_eq!(bank.size(), 35);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece, Size, INSTANCES_PER_KIND};

/// Available pieces, indexed by color then size.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bank {
    supply: [[Vector<u8>; Size::COUNT]; Color::COUNT],
}

impl Bank {
    /// A bank holding no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            supply: std::array::from_fn(|_| std::array::from_fn(|_| Vector::new())),
        }
    }

    /// A bank holding the whole supply.
    #[must_use]
    pub fn full() -> Self {
        Self {
            supply: std::array::from_fn(|_| {
                std::array::from_fn(|_| (0..INSTANCES_PER_KIND).collect())
            }),
        }
    }

    fn group(&self, color: Color, size: Size) -> &Vector<u8> {
        &self.supply[color.index()][size.index()]
    }

    fn group_mut(&mut self, color: Color, size: Size) -> &mut Vector<u8> {
        &mut self.supply[color.index()][size.index()]
    }

    /// Return a piece to the bank, appending it to its group.
    ///
    /// A piece that is already in the bank is not added twice.
    #[must_use]
    pub fn add_piece(&self, piece: Piece) -> Self {
        let mut bank = self.clone();
        if self.has_piece(&piece) {
            tracing::warn!(piece = %piece, "piece already in bank");
            return bank;
        }
        bank.group_mut(piece.color, piece.size).push_back(piece.instance);
        bank
    }

    /// Return several pieces to the bank, in order.
    #[must_use]
    pub fn add_pieces(&self, pieces: impl IntoIterator<Item = Piece>) -> Self {
        pieces
            .into_iter()
            .fold(self.clone(), |bank, piece| bank.add_piece(piece))
    }

    /// Take the earliest available piece of the given color and size.
    ///
    /// Returns `None` if the group is empty.
    #[must_use]
    pub fn take_piece(&self, color: Color, size: Size) -> Option<(Piece, Self)> {
        let mut bank = self.clone();
        let instance = bank.group_mut(color, size).pop_front()?;
        Some((Piece::new(color, size, instance), bank))
    }

    /// Check whether this exact piece is in the bank.
    #[must_use]
    pub fn has_piece(&self, piece: &Piece) -> bool {
        self.group(piece.color, piece.size).contains(&piece.instance)
    }

    /// Check whether any piece of the given color and size is available.
    #[must_use]
    pub fn has_piece_of(&self, color: Color, size: Size) -> bool {
        !self.group(color, size).is_empty()
    }

    /// Smallest size with at least one available piece of `color`.
    #[must_use]
    pub fn smallest_size_for_color(&self, color: Color) -> Option<Size> {
        Size::ALL
            .into_iter()
            .find(|&size| self.has_piece_of(color, size))
    }

    /// Take the smallest available piece of `color`.
    #[must_use]
    pub fn take_smallest_piece(&self, color: Color) -> Option<(Piece, Self)> {
        let size = self.smallest_size_for_color(color)?;
        self.take_piece(color, size)
    }

    /// Number of pieces available of a given color and size.
    #[must_use]
    pub fn count_of(&self, color: Color, size: Size) -> usize {
        self.group(color, size).len()
    }

    /// Total number of pieces in the bank.
    #[must_use]
    pub fn size(&self) -> usize {
        self.supply.iter().flatten().map(Vector::len).sum()
    }

    /// Check if the bank is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Iterate over every available piece (color, size, then insertion order).
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        Color::ALL.into_iter().flat_map(move |color| {
            Size::ALL.into_iter().flat_map(move |size| {
                self.group(color, size)
                    .iter()
                    .map(move |&instance| Piece::new(color, size, instance))
            })
        })
    }

    /// Flatten into a list of pieces.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Piece> {
        self.pieces().collect()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::full()
    }
}
