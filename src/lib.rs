//! # ra-engine
//!
//! Rules engine for the tile-drawing core of an Egyptian-themed auction
//! game: a shared bag of 180 tiles, a Ra track that ends rounds, a chest
//! track players claim, and hands pruned to permanent tiles between rounds.
//!
//! ## Design Principles
//!
//! 1. **Driver-Agnostic**: The engine owns the state and validates every
//!    transition, but never decides whose turn it is or when to draw. A UI,
//!    network session, or simulator drives it.
//!
//! 2. **Deterministic**: Every game is reproducible from its shuffle seed,
//!    or from the shuffled bag plus the recorded action history.
//!
//! 3. **No Hidden Effects**: Tiles carry no behaviour. Disaster effects and
//!    scoring plug in through the `TileEffect` hook.
//!
//! ## Modules
//!
//! - `tiles`: Tile kinds, classifiers, and the bag
//! - `core`: Players, state, actions, RNG, configuration
//! - `effects`: The tile effect hook
//! - `rules`: The round/turn engine
//! - `error`: The engine error type

pub mod core;
pub mod effects;
pub mod error;
pub mod rules;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, GameSetup, GameState, GameStatus, Player,
    PlayerId, PlayerMap, PublicState, CHEST_CAPACITY, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::effects::{EffectEvent, EffectLog, NoEffect, TileEffect};

pub use crate::error::{RaError, RaResult};

pub use crate::rules::{DrawOutcome, Game, TakeOutcome, Track};

pub use crate::tiles::{Bag, Tile, TileCategory, TileKind, TILE_COUNTS, TOTAL_TILES};
