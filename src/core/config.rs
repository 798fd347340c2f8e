//! Movement configuration with documented constants
//!
//! Every knob that changes how a movement range is computed lives here and
//! can be loaded from TOML:
//!
//! ```toml
//! pattern = "row-parity"
//! step_cost = 1
//! zoc_entry_penalty = 1
//!
//! [hostility]
//! model = "matrix"
//! pairs = [["blue", "red"], ["red", "green"]]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacticsError};
use crate::core::types::Faction;
use crate::hex::NeighborPattern;
use crate::tactics::hostility::HostilityModel;

/// Cost rules for range expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementRules {
    /// Adjacency convention of the grid being rendered
    pub pattern: NeighborPattern,

    /// Cost of every single step between adjacent hexes
    pub step_cost: u32,

    /// Extra cost charged when a step crosses from outside a hostile zone
    /// of control into it
    ///
    /// Steps that stay inside the zone pay only `step_cost`.
    pub zoc_entry_penalty: u32,
}

impl Default for MovementRules {
    fn default() -> Self {
        Self {
            pattern: NeighborPattern::Cube,
            step_cost: 1,
            zoc_entry_penalty: 1,
        }
    }
}

impl MovementRules {
    pub fn with_pattern(mut self, pattern: NeighborPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        // A free step would let expansion run unbounded
        if self.step_cost == 0 {
            return Err("step_cost must be at least 1".into());
        }
        Ok(())
    }
}

/// Full configuration: cost rules plus the hostility model
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovementConfig {
    #[serde(flatten)]
    pub rules: MovementRules,

    #[serde(default)]
    pub hostility: HostilityModel,
}

impl MovementConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.rules.validate()?;

        if let HostilityModel::Matrix { pairs } = &self.hostility {
            if let Some((a, _)) = pairs.iter().find(|(a, b)| a == b) {
                return Err(format!("faction {} cannot be hostile to itself", a));
            }
        }

        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MovementConfig = toml::from_str(content)?;
        config.validate().map_err(TacticsError::InvalidConfig)?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Factions named anywhere in the hostility model
    pub fn named_factions(&self) -> Vec<Faction> {
        match &self.hostility {
            HostilityModel::Matrix { pairs } => {
                let mut factions: Vec<Faction> =
                    pairs.iter().flat_map(|(a, b)| [*a, *b]).collect();
                factions.sort();
                factions.dedup();
                factions
            }
            _ => Vec::new(),
        }
    }
}
