//! Core engine types: players, state, actions, RNG, configuration.
//!
//! These are the building blocks the rules engine in [`crate::rules`]
//! operates on.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, GameSetup, CHEST_CAPACITY, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, GameStatus, PublicState};
