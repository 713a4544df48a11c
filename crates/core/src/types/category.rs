//! Product categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Plant category used to group the product listing.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Indoor Plants")]
    IndoorPlants,
    #[serde(rename = "Succulents")]
    Succulents,
    #[serde(rename = "Flowering Plants")]
    FloweringPlants,
}

/// Returned when a string does not name a category.
#[derive(Debug, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::IndoorPlants, Self::Succulents, Self::FloweringPlants];

    /// Human-readable name (e.g., "Indoor Plants").
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IndoorPlants => "Indoor Plants",
            Self::Succulents => "Succulents",
            Self::FloweringPlants => "Flowering Plants",
        }
    }

    /// URL/CLI-friendly identifier (e.g., "indoor-plants").
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::IndoorPlants => "indoor-plants",
            Self::Succulents => "succulents",
            Self::FloweringPlants => "flowering-plants",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts either the slug or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(needle) || c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
