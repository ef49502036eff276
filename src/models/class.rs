//! Character class

use serde::{Deserialize, Serialize};
use std::fmt;

/// Character class a loadout, store, or item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DestinyClass {
    Titan,
    Hunter,
    Warlock,
    /// Class-agnostic ("any class")
    #[default]
    Unknown,
}

impl DestinyClass {
    /// Whether this represents "any class"
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for DestinyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Titan => write!(f, "Titan"),
            Self::Hunter => write!(f, "Hunter"),
            Self::Warlock => write!(f, "Warlock"),
            Self::Unknown => write!(f, "Any"),
        }
    }
}
