//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game always has exactly two players. `Player1` moves first.
//!
//! ## PerPlayer
//!
//! Two-slot storage indexable by `Player`, used for home systems.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// The other player.
    ///
    /// ```
    /// use homeworlds::core::Player;
    ///
    /// assert_eq!(Player::Player1.opponent(), Player::Player2);
    /// assert_eq!(Player::Player2.opponent(), Player::Player1);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Player1 => f.write_str("player1"),
            Player::Player2 => f.write_str("player2"),
        }
    }
}

/// Per-player data storage.
///
/// ## Example
///
/// ```
/// use homeworlds::core::{Player, PerPlayer};
///
/// let mut stars: PerPlayer<u32> = PerPlayer::with_value(0);
/// stars[Player::Player2] = 2;
///
/// assert_eq!(stars[Player::Player1], 0);
/// assert_eq!(stars[Player::Player2], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    player1: T,
    player2: T,
}

impl<T> PerPlayer<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            player1: factory(Player::Player1),
            player2: factory(Player::Player2),
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player1: value.clone(),
            player2: value,
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::Player1 => &self.player1,
            Player::Player2 => &self.player2,
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::Player1 => &mut self.player1,
            Player::Player2 => &mut self.player2,
        }
    }

    /// Iterate over `(Player, &T)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [(Player::Player1, &self.player1), (Player::Player2, &self.player2)].into_iter()
    }

    /// Iterate over values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        [&self.player1, &self.player2].into_iter()
    }

    /// Copy of this map with one player's entry replaced.
    #[must_use]
    pub fn with(&self, player: Player, value: T) -> Self
    where
        T: Clone,
    {
        let mut updated = self.clone();
        *updated.get_mut(player) = value;
        updated
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::Player1.to_string(), "player1");
        assert_eq!(Player::Player2.to_string(), "player2");
        assert_eq!(Player::Player2.index(), 1);
    }

    #[test]
    fn test_per_player_new() {
        let map = PerPlayer::new(|p| p.index() * 10);

        assert_eq!(map[Player::Player1], 0);
        assert_eq!(map[Player::Player2], 10);
    }

    #[test]
    fn test_per_player_with() {
        let map = PerPlayer::with_value(1);
        let updated = map.with(Player::Player1, 5);

        assert_eq!(map[Player::Player1], 1);
        assert_eq!(updated[Player::Player1], 5);
        assert_eq!(updated[Player::Player2], 1);
    }

    #[test]
    fn test_per_player_iter() {
        let map = PerPlayer::new(|p| p.index());
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Player::Player1, &0), (Player::Player2, &1)]);
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::Player1).unwrap();
        assert_eq!(json, r#""player1""#);

        let map = PerPlayer::new(|p| p.index() as i32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PerPlayer<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
