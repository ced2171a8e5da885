//! Tile effect hook.
//!
//! - `TileEffect`: Callbacks on tile-added and round-end
//! - `NoEffect`: The default; does nothing
//! - `EffectLog`: Records every call
//!
//! This is where disaster-tile effects and scoring would plug in. Neither is
//! part of the rules implemented here, so the hook only observes.

mod hook;

pub use hook::{EffectEvent, EffectLog, NoEffect, TileEffect};
