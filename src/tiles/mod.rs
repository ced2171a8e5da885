//! Tiles: kinds, classification, and the bag.
//!
//! ## Key Types
//!
//! - `TileKind`: The closed set of 23 kinds, with pure classifiers
//! - `TileCategory`: Coarse grouping (Ra, Monument, Disaster, ...)
//! - `Tile`: An immutable tile value
//! - `Bag`: Shuffled multiset of every tile, drawn without replacement

pub mod bag;
pub mod kind;
pub mod tile;

pub use bag::{Bag, TILE_COUNTS, TOTAL_TILES};
pub use kind::{TileCategory, TileKind};
pub use tile::Tile;
