//! Zone of control
//!
//! A unit threatens the six hexes around it. The union of those hexes over
//! every unit hostile to a mover is the mover's opposing zone of control.
//! Nothing is cached; zones are derived per query from current positions.

use ahash::AHashSet;

use crate::hex::{HexCoordinate, NeighborPattern};
use crate::tactics::hostility::HostilityPolicy;
use crate::tactics::registry::{Unit, UnitRegistry};

/// Hexes threatened by a unit standing at `position`
pub fn zone_of_control(pattern: NeighborPattern, position: HexCoordinate) -> [HexCoordinate; 6] {
    pattern.neighbors(position)
}

/// Union of the zones of every unit hostile to `mover`
///
/// The mover itself never contributes, whatever the policy says.
pub fn opposing_zoc<P: HostilityPolicy + ?Sized>(
    pattern: NeighborPattern,
    mover: &Unit,
    units: &UnitRegistry,
    policy: &P,
) -> AHashSet<HexCoordinate> {
    units
        .iter()
        .filter(|other| other.id != mover.id)
        .filter(|other| policy.is_hostile(mover.faction, other.faction))
        .flat_map(|other| zone_of_control(pattern, other.position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Faction;
    use crate::tactics::hostility::HostilityModel;

    fn registry(units: Vec<Unit>) -> UnitRegistry {
        UnitRegistry::from_units(units).expect("valid seed")
    }

    #[test]
    fn test_zone_matches_neighbors() {
        let pos = HexCoordinate::new(2, -1);
        for pattern in [
            NeighborPattern::Cube,
            NeighborPattern::RowParity,
            NeighborPattern::QuadParity,
        ] {
            assert_eq!(zone_of_control(pattern, pos), pattern.neighbors(pos));
        }
    }

    #[test]
    fn test_zone_excludes_own_hex() {
        let pos = HexCoordinate::ORIGIN;
        assert!(!zone_of_control(NeighborPattern::Cube, pos).contains(&pos));
    }

    #[test]
    fn test_opposing_zoc_only_hostiles() {
        let units = registry(vec![
            Unit::new("hero", HexCoordinate::ORIGIN, 3, Faction::Player),
            Unit::new("friend", HexCoordinate::new(-4, 0), 3, Faction::Ally),
            Unit::new("orc", HexCoordinate::new(4, 0), 3, Faction::Enemy),
        ]);
        let hero = units.get(&"hero".into()).unwrap();

        let zoc = opposing_zoc(NeighborPattern::Cube, hero, &units, &HostilityModel::TwoSided);
        assert_eq!(zoc.len(), 6);
        assert!(zoc.contains(&HexCoordinate::new(3, 0)));
        assert!(!zoc.contains(&HexCoordinate::new(-3, 0)));
    }

    #[test]
    fn test_enemy_mover_sees_player_and_ally_zones() {
        let units = registry(vec![
            Unit::new("hero", HexCoordinate::ORIGIN, 3, Faction::Player),
            Unit::new("friend", HexCoordinate::new(-4, 0), 3, Faction::Ally),
            Unit::new("orc", HexCoordinate::new(4, 0), 3, Faction::Enemy),
        ]);
        let orc = units.get(&"orc".into()).unwrap();

        let zoc = opposing_zoc(NeighborPattern::Cube, orc, &units, &HostilityModel::TwoSided);
        assert_eq!(zoc.len(), 12);
    }

    #[test]
    fn test_overlapping_zones_union() {
        let units = registry(vec![
            Unit::new("hero", HexCoordinate::new(0, 5), 3, Faction::Player),
            Unit::new("a", HexCoordinate::new(0, 0), 3, Faction::Enemy),
            Unit::new("b", HexCoordinate::new(1, 0), 3, Faction::Enemy),
        ]);
        let hero = units.get(&"hero".into()).unwrap();

        let zoc = opposing_zoc(NeighborPattern::Cube, hero, &units, &HostilityModel::TwoSided);
        // Two adjacent units share two neighbors and each sits in the other's zone
        assert_eq!(zoc.len(), 10);
    }

    #[test]
    fn test_mover_never_in_own_zone() {
        let units = registry(vec![Unit::new("solo", HexCoordinate::ORIGIN, 3, Faction::Red)]);
        let solo = units.get(&"solo".into()).unwrap();
        let everyone = |_: Faction, _: Faction| true;
        assert!(opposing_zoc(NeighborPattern::Cube, solo, &units, &everyone).is_empty());
    }
}
