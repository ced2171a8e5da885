//! Tile effect hook.
//!
//! The engine calls a [`TileEffect`] every time a tile enters a hand and
//! every time a round ends for a player. Disaster effects and scoring would
//! live behind this trait; the rules as implemented give neither any
//! consequence, so the default [`NoEffect`] ignores every call.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::tiles::Tile;

/// Callbacks fired by the engine as tiles move into and out of hands.
///
/// Implementations observe; they cannot veto or alter the transition.
pub trait TileEffect: std::fmt::Debug {
    /// A tile was added to `player`'s hand by a take.
    fn on_tile_added(&mut self, player: PlayerId, tile: Tile) {
        let _ = (player, tile);
    }

    /// A round ended; `discarded` are the non-permanent tiles `player` lost.
    fn on_round_end(&mut self, player: PlayerId, discarded: &[Tile]) {
        let _ = (player, discarded);
    }
}

/// The rules as specified: tiles have no effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoEffect;

impl TileEffect for NoEffect {}

/// One observed hook call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectEvent {
    TileAdded { player: PlayerId, tile: Tile },
    RoundEnded { player: PlayerId, discarded: Vec<Tile> },
}

/// Hook that records every call, for drivers and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectLog {
    events: Vec<EffectEvent>,
}

impl EffectLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls seen so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[EffectEvent] {
        &self.events
    }

    /// Disaster tiles that entered any hand.
    pub fn disasters_added(&self) -> impl Iterator<Item = (PlayerId, Tile)> + '_ {
        self.events.iter().filter_map(|event| match event {
            EffectEvent::TileAdded { player, tile } if tile.is_disaster() => Some((*player, *tile)),
            _ => None,
        })
    }

    /// Forget recorded calls.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TileEffect for EffectLog {
    fn on_tile_added(&mut self, player: PlayerId, tile: Tile) {
        self.events.push(EffectEvent::TileAdded { player, tile });
    }

    fn on_round_end(&mut self, player: PlayerId, discarded: &[Tile]) {
        self.events.push(EffectEvent::RoundEnded {
            player,
            discarded: discarded.to_vec(),
        });
    }
}
