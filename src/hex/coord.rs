//! Hex coordinate system (cube coordinates)
//!
//! A position is three coupled integers `(x, y, z)` with `x + y + z == 0`.
//! Build coordinates with [`HexCoordinate::new`] so `z` is always derived;
//! hand-built values can be checked with [`HexCoordinate::is_valid`] or
//! [`HexCoordinate::try_new`].
//!
//! The usable board is every `(x, y)` whose derived `z = -x - y` fits in an
//! `i32`. Nothing here panics at the edge of that range: `new` wraps the
//! derived `z` (the result then fails `is_valid`), and a neighbor step that
//! would leave the `i32` range yields an invalid off-board marker, so range
//! expansion never walks off the board or wraps to the far side.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacticsError};

/// Cube offsets of the six neighbors, counter-clockwise from east
const CUBE_OFFSETS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Returned for steps past the `i32` edge; never valid
const OFF_BOARD: HexCoordinate = HexCoordinate {
    x: i32::MAX,
    y: i32::MAX,
    z: i32::MAX,
};

/// Cube hex coordinate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct HexCoordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl HexCoordinate {
    pub const ORIGIN: HexCoordinate = HexCoordinate { x: 0, y: 0, z: 0 };

    /// Create from `(x, y)`; `z` is derived as `-x - y`
    ///
    /// Never panics. When `-x - y` does not fit in an `i32` the derived `z`
    /// wraps and the result is not valid.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            z: x.wrapping_neg().wrapping_sub(y),
        }
    }

    /// Create from all three components, rejecting a non-zero sum
    pub fn try_new(x: i32, y: i32, z: i32) -> Result<Self> {
        let coord = Self { x, y, z };
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(TacticsError::MalformedCoordinate { x, y, z })
        }
    }

    /// Cube constraint check, exact for every `i32` triple
    pub fn is_valid(&self) -> bool {
        i64::from(self.x) + i64::from(self.y) + i64::from(self.z) == 0
    }

    /// Max of absolute component deltas
    pub fn distance(&self, other: &Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.max(dy).max(dz)
    }

    /// The six cube neighbors, counter-clockwise from east
    pub fn cube_neighbors(&self) -> [HexCoordinate; 6] {
        self.offset_all(&CUBE_OFFSETS)
    }

    /// Shift by each `(dx, dy)` in `offsets`
    pub(crate) fn offset_all(&self, offsets: &[(i32, i32); 6]) -> [HexCoordinate; 6] {
        offsets.map(|(dx, dy)| match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => HexCoordinate::new(x, y),
            _ => OFF_BOARD,
        })
    }

    /// Get all hexes within range (inclusive)
    pub fn hexes_in_range(&self, range: u32) -> Vec<HexCoordinate> {
        let range = range as i32;
        let mut results = Vec::new();
        for dx in -range..=range {
            for dy in (-range).max(-dx - range)..=range.min(-dx + range) {
                results.push(HexCoordinate::new(self.x + dx, self.y + dy));
            }
        }
        results
    }
}

impl fmt::Display for HexCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_z() {
        let coord = HexCoordinate::new(2, 3);
        assert_eq!(coord.z, -5);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_try_new_rejects_malformed() {
        assert!(HexCoordinate::try_new(1, 1, -2).is_ok());
        let err = HexCoordinate::try_new(1, 1, 1).unwrap_err();
        assert!(matches!(
            err,
            TacticsError::MalformedCoordinate { x: 1, y: 1, z: 1 }
        ));
    }

    #[test]
    fn test_hand_built_coordinate_invalid() {
        let coord = HexCoordinate { x: 1, y: 0, z: 0 };
        assert!(!coord.is_valid());
    }

    #[test]
    fn test_distance_same() {
        let a = HexCoordinate::new(4, -7);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_distance_adjacent() {
        let a = HexCoordinate::ORIGIN;
        let b = HexCoordinate::new(1, 0);
        assert_eq!(a.distance(&b), 1);
    }

    #[test]
    fn test_distance_diagonal() {
        let a = HexCoordinate::ORIGIN;
        let b = HexCoordinate::new(2, 2);
        assert_eq!(a.distance(&b), 4);
        assert_eq!(b.distance(&a), 4);
    }

    #[test]
    fn test_cube_neighbors_at_distance_one() {
        let center = HexCoordinate::new(3, -1);
        let neighbors = center.cube_neighbors();
        assert_eq!(neighbors.len(), 6);
        for n in neighbors {
            assert!(n.is_valid());
            assert_eq!(center.distance(&n), 1);
        }
    }

    #[test]
    fn test_hexes_in_range() {
        let center = HexCoordinate::ORIGIN;
        assert_eq!(center.hexes_in_range(0).len(), 1);
        assert_eq!(center.hexes_in_range(1).len(), 7);
        assert_eq!(center.hexes_in_range(2).len(), 19);
    }

    #[test]
    fn test_new_at_i32_edge_does_not_panic() {
        // -i32::MIN does not fit, so the derived z wraps
        assert!(!HexCoordinate::new(i32::MIN, 0).is_valid());
        assert!(HexCoordinate::new(i32::MIN + 1, 0).is_valid());
        assert!(HexCoordinate::new(i32::MAX, i32::MIN).is_valid());
    }

    #[test]
    fn test_is_valid_hand_built_extremes() {
        let far = HexCoordinate {
            x: i32::MAX,
            y: i32::MAX,
            z: 0,
        };
        assert!(!far.is_valid());
        assert!(HexCoordinate::try_new(i32::MAX, i32::MIN, 1).is_ok());
    }

    #[test]
    fn test_distance_across_full_range() {
        let a = HexCoordinate::new(i32::MAX, i32::MIN);
        let b = HexCoordinate::new(i32::MIN + 1, i32::MAX);
        assert_eq!(a.distance(&b), u32::MAX);
        assert_eq!(b.distance(&a), u32::MAX);
    }

    #[test]
    fn test_neighbors_past_edge_are_invalid() {
        let edge = HexCoordinate::new(i32::MAX, -i32::MAX);
        let valid = edge.cube_neighbors().iter().filter(|n| n.is_valid()).count();
        assert_eq!(valid, 4);
    }

    #[test]
    fn test_step_never_wraps_to_far_side() {
        // (MIN, 1, MAX) would be a valid cube coordinate
        let edge = HexCoordinate::new(i32::MAX, 1);
        assert!(edge.is_valid());
        let east = edge.cube_neighbors()[0];
        assert!(!east.is_valid());
        assert!(!OFF_BOARD.is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(HexCoordinate::new(2, 3).to_string(), "(2, 3, -5)");
    }
}
