//! Tile kinds and their classification.
//!
//! The game uses a closed set of 23 tile kinds. Every classification
//! (Ra, Monument, Civilization, Disaster, Permanent, ...) is a pure function
//! of the kind, implemented as enumeration membership.
//!
//! ## Categories
//!
//! | Group        | Kinds                                                          |
//! |--------------|----------------------------------------------------------------|
//! | Ra           | Ra                                                             |
//! | Monument     | Fortress, Obelisk, Palace, Pyramid, Temple, Statue, StepPyramid, Sphinx |
//! | Civilization | Astronomy, Agriculture, Writing, Religion, Art                 |
//! | Disaster     | War, Earthquake, Funeral, Drought                              |
//! | Other        | Pharaoh, Nile, Flood, Gold, GoldenGod                          |
//!
//! Permanent tiles (Monument, Pharaoh, Nile) survive the end of a round.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RaError;

/// One of the 23 tile kinds.
///
/// Serializes as its kind name (`"StepPyramid"`, `"Ra"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Ra,
    Pharaoh,
    Nile,
    Flood,
    GoldenGod,
    Gold,
    // Disasters
    War,
    Earthquake,
    Funeral,
    Drought,
    // Civilizations
    Astronomy,
    Agriculture,
    Writing,
    Religion,
    Art,
    // Monuments
    Fortress,
    Obelisk,
    Palace,
    Pyramid,
    Temple,
    Statue,
    StepPyramid,
    Sphinx,
}

/// Coarse grouping of a kind, for display and tallies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileCategory {
    Ra,
    Pharaoh,
    Nile,
    Flood,
    Gold,
    GoldenGod,
    Civilization,
    Monument,
    Disaster,
}

impl TileKind {
    /// Every kind, in declaration order.
    pub const ALL: [TileKind; 23] = [
        TileKind::Ra,
        TileKind::Pharaoh,
        TileKind::Nile,
        TileKind::Flood,
        TileKind::GoldenGod,
        TileKind::Gold,
        TileKind::War,
        TileKind::Earthquake,
        TileKind::Funeral,
        TileKind::Drought,
        TileKind::Astronomy,
        TileKind::Agriculture,
        TileKind::Writing,
        TileKind::Religion,
        TileKind::Art,
        TileKind::Fortress,
        TileKind::Obelisk,
        TileKind::Palace,
        TileKind::Pyramid,
        TileKind::Temple,
        TileKind::Statue,
        TileKind::StepPyramid,
        TileKind::Sphinx,
    ];

    /// The eight monument kinds.
    pub const MONUMENTS: [TileKind; 8] = [
        TileKind::Fortress,
        TileKind::Obelisk,
        TileKind::Palace,
        TileKind::Pyramid,
        TileKind::Temple,
        TileKind::Statue,
        TileKind::StepPyramid,
        TileKind::Sphinx,
    ];

    /// The five civilization kinds.
    pub const CIVILIZATIONS: [TileKind; 5] = [
        TileKind::Astronomy,
        TileKind::Agriculture,
        TileKind::Writing,
        TileKind::Religion,
        TileKind::Art,
    ];

    /// Canonical kind name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TileKind::Ra => "Ra",
            TileKind::Pharaoh => "Pharaoh",
            TileKind::Nile => "Nile",
            TileKind::Flood => "Flood",
            TileKind::GoldenGod => "GoldenGod",
            TileKind::Gold => "Gold",
            TileKind::War => "War",
            TileKind::Earthquake => "Earthquake",
            TileKind::Funeral => "Funeral",
            TileKind::Drought => "Drought",
            TileKind::Astronomy => "Astronomy",
            TileKind::Agriculture => "Agriculture",
            TileKind::Writing => "Writing",
            TileKind::Religion => "Religion",
            TileKind::Art => "Art",
            TileKind::Fortress => "Fortress",
            TileKind::Obelisk => "Obelisk",
            TileKind::Palace => "Palace",
            TileKind::Pyramid => "Pyramid",
            TileKind::Temple => "Temple",
            TileKind::Statue => "Statue",
            TileKind::StepPyramid => "StepPyramid",
            TileKind::Sphinx => "Sphinx",
        }
    }

    /// Look up a kind by its exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    // === Single-kind predicates ===

    #[must_use]
    pub const fn is_ra(self) -> bool {
        matches!(self, TileKind::Ra)
    }

    #[must_use]
    pub const fn is_earthquake(self) -> bool {
        matches!(self, TileKind::Earthquake)
    }

    #[must_use]
    pub const fn is_nile(self) -> bool {
        matches!(self, TileKind::Nile)
    }

    #[must_use]
    pub const fn is_flood(self) -> bool {
        matches!(self, TileKind::Flood)
    }

    #[must_use]
    pub const fn is_drought(self) -> bool {
        matches!(self, TileKind::Drought)
    }

    #[must_use]
    pub const fn is_pharaoh(self) -> bool {
        matches!(self, TileKind::Pharaoh)
    }

    #[must_use]
    pub const fn is_funeral(self) -> bool {
        matches!(self, TileKind::Funeral)
    }

    #[must_use]
    pub const fn is_war(self) -> bool {
        matches!(self, TileKind::War)
    }

    // === Group predicates ===

    /// One of the eight monument kinds.
    #[must_use]
    pub const fn is_monument(self) -> bool {
        matches!(
            self,
            TileKind::Fortress
                | TileKind::Obelisk
                | TileKind::Palace
                | TileKind::Pyramid
                | TileKind::Temple
                | TileKind::Statue
                | TileKind::StepPyramid
                | TileKind::Sphinx
        )
    }

    /// One of the five civilization kinds.
    #[must_use]
    pub const fn is_civilization(self) -> bool {
        matches!(
            self,
            TileKind::Astronomy
                | TileKind::Agriculture
                | TileKind::Writing
                | TileKind::Religion
                | TileKind::Art
        )
    }

    /// Kept in a player's hand across round resets.
    #[must_use]
    pub const fn is_permanent(self) -> bool {
        self.is_monument() || self.is_pharaoh() || self.is_nile()
    }

    /// Earthquake, Drought, Funeral or War.
    ///
    /// Disasters are classified but carry no gameplay effect in the engine;
    /// see [`crate::effects::TileEffect`] for the hook where one would go.
    #[must_use]
    pub const fn is_disaster(self) -> bool {
        self.is_earthquake() || self.is_drought() || self.is_funeral() || self.is_war()
    }

    /// Coarse category of this kind.
    #[must_use]
    pub const fn category(self) -> TileCategory {
        match self {
            TileKind::Ra => TileCategory::Ra,
            TileKind::Pharaoh => TileCategory::Pharaoh,
            TileKind::Nile => TileCategory::Nile,
            TileKind::Flood => TileCategory::Flood,
            TileKind::Gold => TileCategory::Gold,
            TileKind::GoldenGod => TileCategory::GoldenGod,
            k if k.is_civilization() => TileCategory::Civilization,
            k if k.is_monument() => TileCategory::Monument,
            _ => TileCategory::Disaster,
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileKind {
    type Err = RaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RaError::InvalidTileKind(s.to_string()))
    }
}
