//! The round/turn engine.
//!
//! `Game` owns the bag, both shared tracks, and every player, and exposes
//! the draw / take / mark-inactive transitions plus the turn query. An
//! external driver (UI, network session, simulator) calls these; the engine
//! never advances turns on its own.

pub mod engine;

pub use engine::{DrawOutcome, Game, TakeOutcome, Track};
