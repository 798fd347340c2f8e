pub mod config;
pub mod error;
pub mod types;

pub use config::{MovementConfig, MovementRules};
pub use error::{Result, TacticsError};
pub use types::{Faction, Turn, UnitId};
