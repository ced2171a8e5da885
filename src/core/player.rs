//! Players: identification, per-player storage, and hands.
//!
//! ## PlayerId
//!
//! Type-safe 0-based player index.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a `Vec`, indexed by `PlayerId`. Lookups that
//! come from outside the engine go through `get`, which returns `None` for
//! out-of-range ids.
//!
//! ## Player
//!
//! A named seat with a hand of tiles and an active flag. Hands are kept
//! sorted by kind name for display; the order carries no rules meaning.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::tiles::Tile;

/// 0-based player index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use ra_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Wrap one entry per player, in seat order.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry, or `None` if the id is out of range.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Entries in seat order.
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

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
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

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    tiles: Vec<Tile>,
    active: bool,
}

impl Player {
    /// New active player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tiles: Vec::new(),
            active: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hand, sorted by kind name.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Add a tile to the hand.
    ///
    /// The hand is re-sorted by kind name so equal tiles sit together. The
    /// sort is stable and never changes membership.
    pub fn add_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
        self.tiles.sort_by_key(|t| t.name());
    }

    /// End the round for this player.
    ///
    /// Reactivates the player and keeps only permanent tiles, in their
    /// existing order. Returns the discarded tiles.
    pub fn end_round(&mut self) -> Vec<Tile> {
        self.active = true;
        let (kept, discarded): (Vec<Tile>, Vec<Tile>) =
            std::mem::take(&mut self.tiles).into_iter().partition(|t| t.is_permanent());
        self.tiles = kept;
        discarded
    }

    /// Take this player out of the current round.
    pub fn mark_inactive(&mut self) {
        self.active = false;
    }
}
