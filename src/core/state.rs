//! Game state: the full table and the public snapshot of it.
//!
//! ## GameState
//!
//! Everything the engine owns:
//! - Configuration (player count, Ra track size, seed)
//! - Players and their hands
//! - The bag
//! - Chest and Ra tracks
//! - Rotation cursor, round counter, status
//! - Action history
//!
//! `GameState` is the checkpoint format; it round-trips through serde.
//!
//! ## PublicState
//!
//! What a rendering layer reads after every transition. The bag order is
//! hidden; only its remaining size is exposed.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::config::{max_ra_for, GameConfig, CHEST_CAPACITY, MAX_PLAYERS, MIN_PLAYERS};
use super::player::{Player, PlayerId, PlayerMap};
use crate::error::{RaError, RaResult};
use crate::tiles::{Bag, Tile, TILE_COUNTS};

/// Largest Ra track any table size needs.
pub const RA_TRACK_INLINE: usize = max_ra_for(MAX_PLAYERS);

/// Chest track storage.
pub type ChestTrack = SmallVec<[Tile; CHEST_CAPACITY]>;

/// Ra track storage.
pub type RaTrack = SmallVec<[Tile; RA_TRACK_INLINE]>;

/// Whether the game can continue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Tiles remain, or no draw has hit the empty bag yet.
    #[default]
    InProgress,
    /// A draw found the bag empty. The game is over.
    Over,
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) bag: Bag,
    pub(crate) chest_track: ChestTrack,
    pub(crate) ra_track: RaTrack,
    pub(crate) current_player: PlayerId,
    /// Current round (starts at 1).
    pub(crate) round: u32,
    /// Next action sequence number.
    pub(crate) sequence: u32,
    pub(crate) status: GameStatus,
    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// Fresh table: empty tracks, round 1, first player current.
    #[must_use]
    pub fn new(config: GameConfig, players: Vec<Player>, bag: Bag) -> Self {
        Self {
            config,
            players: PlayerMap::from_vec(players),
            bag,
            chest_track: ChestTrack::new(),
            ra_track: RaTrack::new(),
            current_player: PlayerId::new(0),
            round: 1,
            sequence: 0,
            status: GameStatus::InProgress,
            history: Vector::new(),
        }
    }

    /// Check the structural invariants of a state built outside the engine.
    ///
    /// Covers table size, track bounds and contents, the cursor, the
    /// history counter, the game-over status, and per-kind tile counts
    /// against [`TILE_COUNTS`].
    ///
    /// The engine never produces a state that fails this; it guards
    /// checkpoints read back from storage.
    pub fn validate(&self) -> RaResult<()> {
        let count = self.players.player_count();
        let fail = |msg: String| Err(RaError::InvalidCheckpoint(msg));

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return fail(format!("{count} players"));
        }
        if self.config.player_count != count {
            return fail(format!(
                "config says {} players, table has {count}",
                self.config.player_count
            ));
        }
        if self.config.max_ra != max_ra_for(count) {
            return fail(format!("max_ra {} for {count} players", self.config.max_ra));
        }
        // A full Ra track resets immediately, so it is never observed full.
        if self.ra_track.len() >= self.config.max_ra {
            return fail(format!("Ra track holds {} tiles", self.ra_track.len()));
        }
        if self.chest_track.len() > CHEST_CAPACITY {
            return fail(format!("chest track holds {} tiles", self.chest_track.len()));
        }
        if self.ra_track.iter().any(|t| !t.is_ra()) || self.chest_track.iter().any(|t| t.is_ra()) {
            return fail("tile on the wrong track".to_string());
        }
        if self.current_player.index() >= count {
            return fail(format!("current player {}", self.current_player.index()));
        }
        if self.round == 0 {
            return fail("round 0".to_string());
        }
        if self.sequence as usize != self.history.len() {
            return fail(format!(
                "sequence {} with {} recorded actions",
                self.sequence,
                self.history.len()
            ));
        }
        // Over is only reached by drawing from an empty bag.
        if self.status == GameStatus::Over && !self.bag.is_empty() {
            return fail(format!("game over with {} tiles in the bag", self.bag.remaining()));
        }

        // Tiles leave play on resets and chest discards but are never created.
        let mut tally = self.bag.counts();
        let in_play = self
            .chest_track
            .iter()
            .chain(&self.ra_track)
            .chain(self.players.as_slice().iter().flat_map(|p| p.tiles()));
        for tile in in_play {
            *tally.entry(tile.kind()).or_insert(0) += 1;
        }
        for (kind, limit) in TILE_COUNTS {
            let count = tally.get(&kind).copied().unwrap_or(0);
            if count > limit {
                return fail(format!("{count} {kind} tiles, only {limit} exist"));
            }
        }
        Ok(())
    }

    /// Build the public snapshot.
    #[must_use]
    pub fn public(&self) -> PublicState {
        PublicState {
            round: self.round,
            status: self.status,
            max_ra: self.config.max_ra,
            chest_capacity: CHEST_CAPACITY,
            current_player: self.current_player,
            chest_track: self.chest_track.to_vec(),
            ra_track: self.ra_track.to_vec(),
            players: self.players.as_slice().to_vec(),
            bag_remaining: self.bag.remaining(),
            seed: self.config.seed,
        }
    }
}

/// Read-only view of the table for renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub round: u32,
    pub status: GameStatus,
    pub max_ra: usize,
    pub chest_capacity: usize,
    pub current_player: PlayerId,
    pub chest_track: Vec<Tile>,
    pub ra_track: Vec<Tile>,
    /// Players in seat order.
    pub players: Vec<Player>,
    pub bag_remaining: usize,
    pub seed: Option<u64>,
}

impl PublicState {
    /// Empty Ra track slots before the round ends.
    #[must_use]
    pub fn ra_slots_left(&self) -> usize {
        self.max_ra.saturating_sub(self.ra_track.len())
    }

    /// Empty chest track slots before it is discarded.
    #[must_use]
    pub fn chest_slots_left(&self) -> usize {
        self.chest_capacity.saturating_sub(self.chest_track.len())
    }
}
