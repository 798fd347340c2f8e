//! Unit registry with coordinate lookup
//!
//! Units live in a plain list. A coordinate → index map is rebuilt
//! wholesale after every mutation, which keeps lookups O(1) without any
//! incremental bookkeeping. No two units may share a hex.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacticsError};
use crate::core::types::{Faction, UnitId};
use crate::hex::HexCoordinate;

/// A unit on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub position: HexCoordinate,
    /// Movement budget per query (hexes of range at unit cost)
    pub movement: u32,
    pub faction: Faction,
}

impl Unit {
    pub fn new(id: impl Into<UnitId>, position: HexCoordinate, movement: u32, faction: Faction) -> Self {
        Self {
            id: id.into(),
            position,
            movement,
            faction,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: Vec<Unit>,
    by_position: AHashMap<HexCoordinate, usize>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a seed list, rejecting duplicates
    pub fn from_units(units: impl IntoIterator<Item = Unit>) -> Result<Self> {
        let mut registry = Self::new();
        for unit in units {
            registry.add_unit(unit)?;
        }
        Ok(registry)
    }

    pub fn add_unit(&mut self, unit: Unit) -> Result<()> {
        let pos = unit.position;
        if !pos.is_valid() {
            return Err(TacticsError::MalformedCoordinate {
                x: pos.x,
                y: pos.y,
                z: pos.z,
            });
        }
        if self.get(&unit.id).is_some() {
            return Err(TacticsError::DuplicateUnit(unit.id));
        }
        if let Some(occupant) = self.unit_at(pos) {
            return Err(TacticsError::DuplicatePosition {
                position: pos,
                occupant: occupant.id.clone(),
            });
        }

        tracing::debug!("Added unit {} ({}) at {}", unit.id, unit.faction, pos);
        self.units.push(unit);
        self.rebuild_index();
        Ok(())
    }

    /// Remove a unit by id; absent ids are a no-op
    pub fn remove_unit(&mut self, id: &UnitId) -> Option<Unit> {
        let idx = self.units.iter().position(|u| &u.id == id)?;
        let removed = self.units.remove(idx);
        self.rebuild_index();
        tracing::debug!("Removed unit {} from {}", removed.id, removed.position);
        Some(removed)
    }

    /// Reassign a unit's position
    pub fn move_unit(&mut self, id: &UnitId, to: HexCoordinate) -> Result<()> {
        if !to.is_valid() {
            return Err(TacticsError::MalformedCoordinate {
                x: to.x,
                y: to.y,
                z: to.z,
            });
        }
        let idx = self
            .units
            .iter()
            .position(|u| &u.id == id)
            .ok_or_else(|| TacticsError::UnitNotFound(id.clone()))?;

        if let Some(&occupant_idx) = self.by_position.get(&to) {
            if occupant_idx != idx {
                return Err(TacticsError::DuplicatePosition {
                    position: to,
                    occupant: self.units[occupant_idx].id.clone(),
                });
            }
        }

        self.units[idx].position = to;
        self.rebuild_index();
        Ok(())
    }

    /// Lookup by `(x, y)`; `z` is derived
    pub fn get_unit_at(&self, x: i32, y: i32) -> Option<&Unit> {
        self.unit_at(HexCoordinate::new(x, y))
    }

    pub fn unit_at(&self, coord: HexCoordinate) -> Option<&Unit> {
        self.by_position.get(&coord).map(|&idx| &self.units[idx])
    }

    pub fn get(&self, id: &UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| &u.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Distinct factions present, in `Faction::ALL` order
    pub fn factions(&self) -> Vec<Faction> {
        Faction::ALL
            .into_iter()
            .filter(|f| self.units.iter().any(|u| u.faction == *f))
            .collect()
    }

    fn rebuild_index(&mut self) {
        self.by_position = self
            .units
            .iter()
            .enumerate()
            .map(|(idx, unit)| (unit.position, idx))
            .collect();
    }
}
