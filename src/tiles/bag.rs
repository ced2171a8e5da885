//! The bag: every tile in the game, shuffled once, drawn without replacement.
//!
//! The bag is built from [`TILE_COUNTS`] and permuted with the game RNG at
//! construction. Drawing pops from the end of the sequence, so the "top" of
//! the bag is the last element. Nothing else ever mutates it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::kind::TileKind;
use super::tile::Tile;
use crate::core::rng::GameRng;
use crate::error::{RaError, RaResult};

/// Number of tiles of each kind in a fresh bag.
pub const TILE_COUNTS: [(TileKind, usize); 23] = [
    (TileKind::Ra, 30),
    (TileKind::Pharaoh, 25),
    (TileKind::Nile, 25),
    (TileKind::Flood, 12),
    (TileKind::GoldenGod, 8),
    (TileKind::Gold, 5),
    (TileKind::War, 4),
    (TileKind::Earthquake, 2),
    (TileKind::Funeral, 2),
    (TileKind::Drought, 2),
    (TileKind::Astronomy, 5),
    (TileKind::Agriculture, 5),
    (TileKind::Writing, 5),
    (TileKind::Religion, 5),
    (TileKind::Art, 5),
    (TileKind::Fortress, 5),
    (TileKind::Obelisk, 5),
    (TileKind::Palace, 5),
    (TileKind::Pyramid, 5),
    (TileKind::Temple, 5),
    (TileKind::Statue, 5),
    (TileKind::StepPyramid, 5),
    (TileKind::Sphinx, 5),
];

/// Size of a fresh bag.
pub const TOTAL_TILES: usize = 180;

/// Shuffled source of every tile in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    /// Remaining tiles; top of the bag is the end of the vec.
    tiles: Vec<Tile>,
}

impl Bag {
    /// Build the full tile set and shuffle it.
    ///
    /// The permutation is uniform (Fisher–Yates) and deterministic for a
    /// given RNG seed.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut tiles = Self::full_set();
        rng.shuffle(&mut tiles);
        debug!(seed = rng.seed(), tiles = tiles.len(), "shuffled new bag");
        Self { tiles }
    }

    /// Build a bag with an explicit draw order.
    ///
    /// The last tile in `tiles` is drawn first. Used to stack the bag for
    /// scripted games and tests; no shuffle is applied.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// The unshuffled multiset described by [`TILE_COUNTS`].
    #[must_use]
    pub fn full_set() -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(TOTAL_TILES);
        for (kind, count) in TILE_COUNTS {
            tiles.extend(std::iter::repeat(Tile::new(kind)).take(count));
        }
        tiles
    }

    /// Remove and return the top tile.
    ///
    /// Fails with [`RaError::ExhaustedBag`] when nothing is left.
    pub fn draw(&mut self) -> RaResult<Tile> {
        self.tiles.pop().ok_or(RaError::ExhaustedBag)
    }

    /// Number of tiles left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remaining tiles. The next draw is the last element.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Remaining tiles tallied per kind. Kinds with none left are absent.
    #[must_use]
    pub fn counts(&self) -> FxHashMap<TileKind, usize> {
        let mut counts = FxHashMap::default();
        for tile in &self.tiles {
            *counts.entry(tile.kind()).or_insert(0) += 1;
        }
        counts
    }
}
