//! A single physical tile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::kind::TileKind;
use crate::error::RaError;

/// An immutable tile, identified entirely by its kind.
///
/// ```
/// use ra_engine::tiles::{Tile, TileKind};
///
/// let tile: Tile = "Pharaoh".parse().unwrap();
/// assert_eq!(tile.kind(), TileKind::Pharaoh);
/// assert!(tile.is_permanent());
///
/// assert!("Camel".parse::<Tile>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile {
    kind: TileKind,
}

impl Tile {
    /// Create a tile of the given kind.
    #[must_use]
    pub const fn new(kind: TileKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub const fn kind(self) -> TileKind {
        self.kind
    }

    /// Kind name, also the display sort key for hands.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub const fn is_ra(self) -> bool {
        self.kind.is_ra()
    }

    #[must_use]
    pub const fn is_permanent(self) -> bool {
        self.kind.is_permanent()
    }

    #[must_use]
    pub const fn is_disaster(self) -> bool {
        self.kind.is_disaster()
    }
}

impl From<TileKind> for Tile {
    fn from(kind: TileKind) -> Self {
        Self::new(kind)
    }
}

impl FromStr for Tile {
    type Err = RaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<TileKind>().map(Self::new)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
