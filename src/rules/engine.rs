//! Round/turn engine.
//!
//! `Game` owns the whole table and exposes the transitions a turn-flow
//! driver invokes:
//!
//! - **Draw**: take a tile from the bag and place it on the Ra or chest
//!   track. A full chest track is discarded before the draw; a full Ra track
//!   ends the round.
//! - **Take**: an active player claims every tile on the chest track.
//! - **Reset**: clears both tracks and prunes every hand to permanent tiles.
//!   Only ever triggered by a draw.
//!
//! Turn order is not enforced. `next_player_index` answers "who is next",
//! and the driver decides when to move the cursor or mark players inactive.
//!
//! ## Bag exhaustion
//!
//! Drawing from an empty bag ends the game: the draw fails with
//! [`RaError::ExhaustedBag`], the status becomes [`GameStatus::Over`], and
//! nothing else changes. Takes stay legal so the final chest can still be
//! claimed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{
    Action, ActionRecord, GameSetup, GameState, GameStatus, Player, PlayerId, PublicState,
    CHEST_CAPACITY,
};
use crate::effects::{NoEffect, TileEffect};
use crate::error::{RaError, RaResult};
use crate::tiles::{Bag, Tile};

/// Which shared track a drawn tile landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    Chest,
    Ra,
}

/// What a successful draw did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The tile drawn.
    pub tile: Tile,
    /// Where it was placed.
    pub track: Track,
    /// Tiles thrown away because the chest track was full before the draw.
    pub chest_discarded: Vec<Tile>,
    /// The draw filled the Ra track and the round was reset.
    pub round_ended: bool,
}

/// What a take did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TakeOutcome {
    /// The player received these tiles, in chest track order.
    Taken(Vec<Tile>),
    /// The player is inactive; nothing changed.
    Inactive,
}

/// A game in progress.
///
/// Generic over the [`TileEffect`] hook; the default hook does nothing.
///
/// ```
/// use ra_engine::{Game, GameSetup, PlayerId};
///
/// let setup = GameSetup::new(["Ahmose", "Tiye", "Nefertari"]).unwrap().with_seed(42);
/// let mut game = Game::from_setup(&setup).unwrap();
/// assert_eq!(game.max_ra(), 8);
///
/// game.draw_tile().unwrap();
/// game.player_takes(PlayerId::new(1)).unwrap();
/// assert!(game.chest_track().is_empty());
/// ```
#[derive(Debug)]
pub struct Game<E: TileEffect = NoEffect> {
    state: GameState,
    effect: E,
}

impl Game {
    /// Seat the players from `setup` around `bag`.
    pub fn new(setup: &GameSetup, bag: Bag) -> RaResult<Self> {
        Self::with_effect(setup, bag, NoEffect)
    }

    /// Seat the players and shuffle a fresh bag.
    ///
    /// The seed used (given or drawn from entropy) is recorded in the
    /// config so the game can be reproduced.
    pub fn from_setup(setup: &GameSetup) -> RaResult<Self> {
        let (bag, seed) = setup.shuffle_bag();
        let mut game = Self::new(setup, bag)?;
        game.state.config.seed = Some(seed);
        Ok(game)
    }

    /// Rebuild a game from a checkpoint.
    pub fn restore(bytes: &[u8]) -> RaResult<Self> {
        Self::restore_with_effect(bytes, NoEffect)
    }

    /// Re-apply recorded actions to a fresh game over `bag`.
    ///
    /// With the same bag, the result matches the game the actions were
    /// recorded from.
    pub fn replay(
        setup: &GameSetup,
        bag: Bag,
        actions: impl IntoIterator<Item = Action>,
    ) -> RaResult<Self> {
        let mut game = Self::new(setup, bag)?;
        for action in actions {
            game.apply(action)?;
        }
        Ok(game)
    }
}

impl<E: TileEffect> Game<E> {
    /// Seat the players from `setup` around `bag`, with a custom effect hook.
    pub fn with_effect(setup: &GameSetup, bag: Bag, effect: E) -> RaResult<Self> {
        let config = setup.config()?;
        let players = setup.names().iter().map(|name| Player::new(name.as_str())).collect();
        info!(
            players = config.player_count,
            max_ra = config.max_ra,
            bag = bag.remaining(),
            "new game"
        );

        Ok(Self {
            state: GameState::new(config, players, bag),
            effect,
        })
    }

    /// Rebuild a game from a checkpoint, with a custom effect hook.
    pub fn restore_with_effect(bytes: &[u8], effect: E) -> RaResult<Self> {
        let state: GameState = bincode::deserialize(bytes)?;
        state.validate()?;
        debug!(round = state.round, actions = state.history.len(), "restored checkpoint");
        Ok(Self { state, effect })
    }

    /// Encode the full table state.
    pub fn checkpoint(&self) -> RaResult<Vec<u8>> {
        Ok(bincode::serialize(&self.state)?)
    }

    // === Transitions ===

    /// Draw one tile and place it.
    pub fn draw_tile(&mut self) -> RaResult<DrawOutcome> {
        if self.state.bag.is_empty() {
            if self.state.status == GameStatus::InProgress {
                self.state.status = GameStatus::Over;
                info!(round = self.state.round, "bag exhausted, game over");
            }
            warn!("draw attempted on an empty bag");
            return Err(RaError::ExhaustedBag);
        }

        let mut chest_discarded = Vec::new();
        if self.state.chest_track.len() >= CHEST_CAPACITY {
            chest_discarded = std::mem::take(&mut self.state.chest_track).into_vec();
            debug!(tiles = chest_discarded.len(), "chest track full, discarded");
        }

        let tile = self.state.bag.draw()?;
        let track = if tile.is_ra() {
            self.state.ra_track.push(tile);
            Track::Ra
        } else {
            self.state.chest_track.push(tile);
            Track::Chest
        };
        debug!(
            %tile,
            category = ?tile.kind().category(),
            ?track,
            ra = self.state.ra_track.len(),
            chest = self.state.chest_track.len(),
            "drew tile"
        );

        let round_ended = self.state.ra_track.len() == self.state.config.max_ra;
        self.record(Action::Draw);
        if round_ended {
            self.reset();
        }

        Ok(DrawOutcome {
            tile,
            track,
            chest_discarded,
            round_ended,
        })
    }

    /// Give `player` every tile on the chest track.
    ///
    /// Inactive players take nothing. The Ra track is untouched either way.
    pub fn player_takes(&mut self, player: PlayerId) -> RaResult<TakeOutcome> {
        self.check_player(player)?;

        let state = &mut self.state;
        let seat = &mut state.players[player];
        let outcome = if seat.is_active() {
            let taken = std::mem::take(&mut state.chest_track);
            for &tile in &taken {
                seat.add_tile(tile);
                self.effect.on_tile_added(player, tile);
            }
            debug!(%player, tiles = taken.len(), "took chest track");
            TakeOutcome::Taken(taken.into_vec())
        } else {
            debug!(%player, "inactive player cannot take");
            TakeOutcome::Inactive
        };

        self.record(Action::Take(player));
        Ok(outcome)
    }

    /// Take `player` out of the current round until the next reset.
    pub fn mark_inactive(&mut self, player: PlayerId) -> RaResult<()> {
        self.check_player(player)?;
        self.state.players[player].mark_inactive();
        debug!(%player, "marked inactive");
        self.record(Action::MarkInactive(player));
        Ok(())
    }

    /// Move the rotation cursor.
    pub fn set_current_player(&mut self, player: PlayerId) -> RaResult<()> {
        self.check_player(player)?;
        self.state.current_player = player;
        self.record(Action::SetCurrentPlayer(player));
        Ok(())
    }

    /// Apply a recorded action.
    pub fn apply(&mut self, action: Action) -> RaResult<()> {
        match action {
            Action::Draw => self.draw_tile().map(drop),
            Action::Take(player) => self.player_takes(player).map(drop),
            Action::MarkInactive(player) => self.mark_inactive(player),
            Action::SetCurrentPlayer(player) => self.set_current_player(player),
        }
    }

    fn reset(&mut self) {
        self.state.ra_track.clear();
        self.state.chest_track.clear();
        for (player, seat) in self.state.players.iter_mut() {
            let discarded = seat.end_round();
            self.effect.on_round_end(player, &discarded);
        }
        info!(round = self.state.round, "Ra track full, round over");
        self.state.round += 1;
    }

    fn record(&mut self, action: Action) {
        let record = ActionRecord::new(self.state.round, self.state.sequence, action);
        self.state.sequence += 1;
        self.state.history.push_back(record);
    }

    fn check_player(&self, player: PlayerId) -> RaResult<()> {
        let player_count = self.state.players.player_count();
        if player.index() < player_count {
            Ok(())
        } else {
            Err(RaError::InvalidPlayerIndex {
                index: player.index(),
                player_count,
            })
        }
    }

    // === Queries ===

    /// Next active player after the current one, wrapping around.
    ///
    /// The current player is never returned; `None` means nobody else is
    /// active. Does not move the cursor.
    #[must_use]
    pub fn next_player_index(&self) -> Option<PlayerId> {
        let count = self.state.players.player_count();
        let current = self.state.current_player.index();
        (1..count)
            .map(|offset| PlayerId::new(((current + offset) % count) as u8))
            .find(|&player| self.state.players[player].is_active())
    }

    /// Validate a raw seat index.
    pub fn player_id(&self, index: usize) -> RaResult<PlayerId> {
        let player_count = self.state.players.player_count();
        if index < player_count {
            Ok(PlayerId::new(index as u8))
        } else {
            Err(RaError::InvalidPlayerIndex { index, player_count })
        }
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    #[must_use]
    pub fn chest_track(&self) -> &[Tile] {
        &self.state.chest_track
    }

    #[must_use]
    pub fn ra_track(&self) -> &[Tile] {
        &self.state.ra_track
    }

    /// Ra track length that ends the round.
    #[must_use]
    pub fn max_ra(&self) -> usize {
        self.state.config.max_ra
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.state.players.as_slice()
    }

    pub fn player(&self, player: PlayerId) -> RaResult<&Player> {
        self.check_player(player)?;
        Ok(&self.state.players[player])
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.players.player_count()
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.status == GameStatus::Over
    }

    #[must_use]
    pub fn bag_remaining(&self) -> usize {
        self.state.bag.remaining()
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.state.config.seed
    }

    /// Every successful action so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<ActionRecord> {
        &self.state.history
    }

    /// The actions from [`Game::history`], ready for [`Game::replay`].
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.state.history.iter().map(|record| record.action)
    }

    /// Snapshot for a rendering layer.
    #[must_use]
    pub fn snapshot(&self) -> PublicState {
        self.state.public()
    }

    /// Full table state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }
}
