//! Engine error type.
//!
//! Every fallible engine operation returns [`RaResult`]. Precondition
//! violations (bad player index, unknown tile name, bad player count) reject
//! the call and leave state untouched; [`RaError::ExhaustedBag`] is the one
//! legitimate end-of-game condition.

use thiserror::Error;

/// Errors surfaced by the rules engine.
#[derive(Debug, Error)]
pub enum RaError {
    /// A draw was attempted on an empty bag. Ends the game.
    #[error("the bag is exhausted; no tiles remain to draw")]
    ExhaustedBag,

    /// A player index outside `0..player_count`.
    #[error("player index {index} is out of range for a {player_count}-player game")]
    InvalidPlayerIndex {
        /// The rejected index.
        index: usize,
        /// Number of players in the game.
        player_count: usize,
    },

    /// A tile name outside the fixed enumeration.
    #[error("unknown tile kind {0:?}")]
    InvalidTileKind(String),

    /// Game setup with too few or too many players.
    #[error("a game needs 2 to 5 players, got {0}")]
    InvalidPlayerCount(usize),

    /// Checkpoint bytes could not be encoded or decoded.
    #[error("checkpoint codec failed: {0}")]
    Checkpoint(#[from] bincode::Error),

    /// Checkpoint decoded but describes an impossible game state.
    #[error("checkpoint is inconsistent: {0}")]
    InvalidCheckpoint(String),
}

/// Result alias used throughout the engine.
pub type RaResult<T> = Result<T, RaError>;
