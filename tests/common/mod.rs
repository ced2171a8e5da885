//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use ra_engine::{Bag, Game, GameSetup, Tile, TileKind};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Bag that yields `kinds` in the given order.
pub fn stacked(kinds: &[TileKind]) -> Bag {
    Bag::from_tiles(kinds.iter().rev().map(|&k| Tile::new(k)).collect())
}

/// Setup with `players` seats named P0, P1, ...
pub fn setup(players: usize) -> GameSetup {
    GameSetup::new((0..players).map(|i| format!("P{i}"))).unwrap()
}

/// Game over a stacked bag.
pub fn game(players: usize, kinds: &[TileKind]) -> Game {
    init_logging();
    Game::new(&setup(players), stacked(kinds)).unwrap()
}
