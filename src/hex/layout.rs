//! Neighbor patterns for the supported grid layouts
//!
//! `Cube` is the plain cube-coordinate adjacency. The two parity layouts
//! read `(x, y)` as (column, row) of a grid whose odd rows are shifted half
//! a hex to the right, so the neighbor offsets depend on parity:
//!
//! - `RowParity`: two offset tables, chosen by `y mod 2`.
//! - `QuadParity`: four tables keyed by `(x mod 2, y mod 2)`. Row parity
//!   picks the offsets, column parity picks the winding (even columns
//!   enumerate counter-clockwise from east, odd columns clockwise). The
//!   adjacency relation is the same as `RowParity`; only the enumeration
//!   order, and therefore expansion order, differs.
//!
//! `z` stays `-x - y` in every layout, so coordinates remain valid cube
//! values. Use [`NeighborPattern::distance`] rather than
//! [`HexCoordinate::distance`] when measuring on a parity layout.

use serde::{Deserialize, Serialize};

use crate::hex::coord::HexCoordinate;

type Offsets = [(i32, i32); 6];

const EVEN_ROW: Offsets = [(1, 0), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)];
const ODD_ROW: Offsets = [(1, 0), (1, -1), (0, -1), (-1, 0), (0, 1), (1, 1)];

// Same sets as above, clockwise from east
const EVEN_ROW_CW: Offsets = [(1, 0), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1)];
const ODD_ROW_CW: Offsets = [(1, 0), (1, 1), (0, 1), (-1, 0), (0, -1), (1, -1)];

/// Adjacency convention used by neighbor enumeration and zone of control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborPattern {
    #[default]
    Cube,
    RowParity,
    QuadParity,
}

impl NeighborPattern {
    /// The six hexes adjacent to `coord`
    pub fn neighbors(&self, coord: HexCoordinate) -> [HexCoordinate; 6] {
        match self {
            NeighborPattern::Cube => coord.cube_neighbors(),
            NeighborPattern::RowParity => {
                coord.offset_all(row_table(coord.y.rem_euclid(2) == 1, false))
            }
            NeighborPattern::QuadParity => coord.offset_all(row_table(
                coord.y.rem_euclid(2) == 1,
                coord.x.rem_euclid(2) == 1,
            )),
        }
    }

    /// Layout-correct hex distance
    ///
    /// Parity layouts convert offset coordinates to axial first. Computed in
    /// `i64`, so it is exact anywhere on the board.
    pub fn distance(&self, a: &HexCoordinate, b: &HexCoordinate) -> u32 {
        let (aq, ar) = self.axial(a);
        let (bq, br) = self.axial(b);
        let dq = aq - bq;
        let dr = ar - br;
        let d = dq.abs().max(dr.abs()).max((dq + dr).abs());
        u32::try_from(d).unwrap_or(u32::MAX)
    }

    /// Axial `(q, r)` of a layout coordinate; identity for `Cube`
    fn axial(&self, coord: &HexCoordinate) -> (i64, i64) {
        let (x, y) = (i64::from(coord.x), i64::from(coord.y));
        match self {
            NeighborPattern::Cube => (x, y),
            NeighborPattern::RowParity | NeighborPattern::QuadParity => (x - y.div_euclid(2), y),
        }
    }

    /// Whether odd rows render shifted by half a hex
    pub fn shifts_odd_rows(&self) -> bool {
        !matches!(self, NeighborPattern::Cube)
    }
}

fn row_table(odd_row: bool, clockwise: bool) -> &'static Offsets {
    match (odd_row, clockwise) {
        (false, false) => &EVEN_ROW,
        (true, false) => &ODD_ROW,
        (false, true) => &EVEN_ROW_CW,
        (true, true) => &ODD_ROW_CW,
    }
}
