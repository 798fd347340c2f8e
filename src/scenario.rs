//! Scenario seeds: the built-in unit list, TOML files, and random boards
//!
//! Scenario files live under `data/scenarios/`:
//!
//! ```toml
//! name = "Ford"
//!
//! [config]
//! pattern = "row-parity"
//!
//! [[units]]
//! id = "knight"
//! position = [0, 0]
//! movement = 3
//! faction = "player"
//! ```

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::config::MovementConfig;
use crate::core::error::{Result, TacticsError};
use crate::core::types::Faction;
use crate::hex::HexCoordinate;
use crate::tactics::registry::{Unit, UnitRegistry};
use crate::tactics::skirmish::Skirmish;

/// One unit as written in a scenario file; position is `[x, y]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSeed {
    pub id: String,
    pub position: (i32, i32),
    pub movement: u32,
    pub faction: Faction,
}

impl UnitSeed {
    fn new(id: &str, position: (i32, i32), movement: u32, faction: Faction) -> Self {
        Self {
            id: id.to_string(),
            position,
            movement,
            faction,
        }
    }

    pub fn to_unit(&self) -> Unit {
        let (x, y) = self.position;
        Unit::new(self.id.as_str(), HexCoordinate::new(x, y), self.movement, self.faction)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub config: MovementConfig,
    #[serde(default)]
    pub units: Vec<UnitSeed>,
}

impl Scenario {
    /// The fixed board used when nothing else is given
    pub fn seed() -> Self {
        Self {
            name: "Crossroads".to_string(),
            config: MovementConfig::default(),
            units: vec![
                UnitSeed::new("knight", (0, 0), 3, Faction::Player),
                UnitSeed::new("archer", (-2, 1), 2, Faction::Player),
                UnitSeed::new("ranger", (-1, -2), 4, Faction::Ally),
                UnitSeed::new("orc", (3, -1), 3, Faction::Enemy),
                UnitSeed::new("troll", (2, 2), 2, Faction::Enemy),
            ],
        }
    }

    /// Parse and validate a TOML scenario
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario
            .config
            .validate()
            .map_err(TacticsError::InvalidConfig)?;
        Ok(scenario)
    }

    /// Random placement inside a hexagon of `radius` around the origin
    ///
    /// Deterministic for a given seed. Factions cycle player, enemy, ally.
    pub fn random(seed: u64, count: usize, radius: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cells = HexCoordinate::ORIGIN.hexes_in_range(radius);
        cells.shuffle(&mut rng);

        let factions = [Faction::Player, Faction::Enemy, Faction::Ally];
        let units = cells
            .into_iter()
            .take(count)
            .enumerate()
            .map(|(i, cell)| UnitSeed {
                id: format!("unit-{}", i + 1),
                position: (cell.x, cell.y),
                movement: rng.gen_range(1..=4),
                faction: factions[i % factions.len()],
            })
            .collect();

        Self {
            name: format!("Random #{}", seed),
            config: MovementConfig::default(),
            units,
        }
    }

    pub fn build_registry(&self) -> Result<UnitRegistry> {
        UnitRegistry::from_units(self.units.iter().map(UnitSeed::to_unit))
    }

    pub fn into_skirmish(self) -> Result<Skirmish> {
        let registry = self.build_registry()?;
        Ok(Skirmish::new(registry, self.config))
    }
}

/// Load a scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = fs::read_to_string(path)?;
    let scenario = Scenario::from_toml_str(&content)?;
    tracing::debug!(
        "Loaded scenario '{}' from {:?} ({} units)",
        scenario.name,
        path,
        scenario.units.len()
    );
    Ok(scenario)
}
