//! Game configuration and setup.
//!
//! - `GameConfig`: Derived table parameters (player count, Ra track size,
//!   shuffle seed)
//! - `GameSetup`: What a setup flow collects: ordered player names and an
//!   optional seed
//!
//! The chest track capacity is fixed by the rules; the Ra track capacity
//! depends on the player count.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::error::{RaError, RaResult};
use crate::tiles::Bag;

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game supports.
pub const MAX_PLAYERS: usize = 5;

/// Tiles the chest track holds before it is discarded on the next draw.
pub const CHEST_CAPACITY: usize = 8;

/// Ra track length that ends a round for `player_count` players.
///
/// ```
/// use ra_engine::core::config::max_ra_for;
///
/// assert_eq!(max_ra_for(2), 6);
/// assert_eq!(max_ra_for(3), 8);
/// assert_eq!(max_ra_for(5), 10);
/// ```
#[must_use]
pub const fn max_ra_for(player_count: usize) -> usize {
    let offset = if player_count == 2 { 4 } else { 5 };
    player_count + offset
}

/// Table parameters for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-5).
    pub player_count: usize,

    /// Ra track capacity; reaching it ends the round.
    pub max_ra: usize,

    /// Shuffle seed, when the bag was built by the engine.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for `player_count` players.
    pub fn new(player_count: usize) -> RaResult<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(RaError::InvalidPlayerCount(player_count));
        }

        Ok(Self {
            player_count,
            max_ra: max_ra_for(player_count),
            seed: None,
        })
    }

    /// Record the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Player names and optional seed collected by a setup flow.
///
/// ```
/// use ra_engine::core::GameSetup;
///
/// let setup = GameSetup::new(["Ahmose", "Tiye", "Nefertari"]).unwrap().with_seed(7);
/// assert_eq!(setup.player_count(), 3);
///
/// assert!(GameSetup::new(["Solo"]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    names: Vec<String>,
    seed: Option<u64>,
}

impl GameSetup {
    /// Seat players in the given order.
    pub fn new<I, S>(names: I) -> RaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(RaError::InvalidPlayerCount(names.len()));
        }
        Ok(Self { names, seed: None })
    }

    /// Use a fixed shuffle seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Derive the table configuration.
    pub fn config(&self) -> RaResult<GameConfig> {
        let config = GameConfig::new(self.player_count())?;
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }

    /// Build and shuffle a fresh bag.
    ///
    /// Uses the configured seed, or OS entropy when none was given. Returns
    /// the seed actually used alongside the bag.
    #[must_use]
    pub fn shuffle_bag(&self) -> (Bag, u64) {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let bag = Bag::new(&mut rng);
        (bag, rng.seed())
    }
}
