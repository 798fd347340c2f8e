//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for units
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UnitId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Turn counter (starts at 1)
pub type Turn = u32;

/// Side tag used for hostility checks
///
/// Two tagging schemes coexist: the three-way `Player`/`Ally`/`Enemy`
/// model and the four-colour `Blue`/`Red`/`Green`/`Neutral` model.
/// Which pairs are hostile is decided by a `HostilityPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Player,
    Ally,
    Enemy,
    Blue,
    Red,
    Green,
    Neutral,
}

impl Faction {
    /// Fixed turn order used when rotating through factions
    pub const ALL: [Faction; 7] = [
        Faction::Player,
        Faction::Ally,
        Faction::Enemy,
        Faction::Blue,
        Faction::Red,
        Faction::Green,
        Faction::Neutral,
    ];

    /// Single-character glyph for text rendering
    pub fn glyph(&self) -> char {
        match self {
            Faction::Player => 'P',
            Faction::Ally => 'A',
            Faction::Enemy => 'E',
            Faction::Blue => 'B',
            Faction::Red => 'R',
            Faction::Green => 'G',
            Faction::Neutral => 'N',
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Faction::Player => "player",
            Faction::Ally => "ally",
            Faction::Enemy => "enemy",
            Faction::Blue => "blue",
            Faction::Red => "red",
            Faction::Green => "green",
            Faction::Neutral => "neutral",
        };
        f.write_str(name)
    }
}
