//! Player identification and per-player score storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access. The engine uses it for
//! banked scores; its length is fixed at construction and never changes.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Most players a single engine can seat.
pub const MAX_PLAYERS: usize = 255;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around a table of `player_count`.
    ///
    /// ```
    /// use farkle_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// assert_eq!(PlayerId::new(0).next(1), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use farkle_engine::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// scores[PlayerId::new(1)] += 350;
///
/// assert_eq!(scores.as_slice(), &[0, 350, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// Callers validate `player_count` first; see `EngineConfig::validate`.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Wrap existing per-player values, in seat order.
    ///
    /// Returns `None` for an empty or oversized table.
    pub fn from_vec(data: Vec<T>) -> Option<Self> {
        if data.is_empty() || data.len() > MAX_PLAYERS {
            return None;
        }
        Some(Self { data })
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Values in seat order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
