//! Catalog partitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One of the six fixed catalog partitions exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Planets,
    Films,
    Species,
    Vehicles,
    Starships,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::People,
        Category::Planets,
        Category::Films,
        Category::Species,
        Category::Vehicles,
        Category::Starships,
    ];

    /// URL path segment used by the API.
    pub fn path_segment(self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Planets => "planets",
            Category::Films => "films",
            Category::Species => "species",
            Category::Vehicles => "vehicles",
            Category::Starships => "starships",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::People => "Characters",
            Category::Planets => "Planets",
            Category::Films => "Films",
            Category::Species => "Species",
            Category::Vehicles => "Vehicles",
            Category::Starships => "Starships",
        }
    }

    /// Icon key for the presentation layer.
    pub fn icon(self) -> &'static str {
        match self {
            Category::People => "person.fill",
            Category::Planets => "globe",
            Category::Films => "film",
            Category::Species => "pawprint.fill",
            Category::Vehicles => "car",
            Category::Starships => "airplane",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for Category {
    type Err = AppError;

    /// Accepts either the path segment or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.path_segment() == needle || c.label().to_lowercase() == needle)
            .ok_or_else(|| AppError::validation(format!("Unknown category '{}'", s.trim())))
    }
}
