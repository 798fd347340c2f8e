//! Hex grid geometry: cube coordinates and layout-dependent adjacency

pub mod coord;
pub mod layout;

pub use coord::HexCoordinate;
pub use layout::NeighborPattern;
