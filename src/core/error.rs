use thiserror::Error;

use crate::core::types::UnitId;
use crate::hex::HexCoordinate;

#[derive(Error, Debug)]
pub enum TacticsError {
    #[error("Malformed coordinate ({x}, {y}, {z}): components must sum to zero")]
    MalformedCoordinate { x: i32, y: i32, z: i32 },

    #[error("Duplicate unit id: {0}")]
    DuplicateUnit(UnitId),

    #[error("Position {position} already occupied by {occupant}")]
    DuplicatePosition {
        position: HexCoordinate,
        occupant: UnitId,
    },

    #[error("Unit not found: {0}")]
    UnitNotFound(UnitId),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TacticsError>;
