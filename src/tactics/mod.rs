//! Tactical movement: factions, zones of control, and movement ranges
//!
//! A query flows leaf to root: the registry resolves the unit at a hex, the
//! zone-of-control calculator derives the hexes its opponents threaten, and
//! range expansion turns position, budget, and zone into a reachable set.

pub mod events;
pub mod hostility;
pub mod reachable;
pub mod registry;
pub mod skirmish;
pub mod zoc;

// Re-exports for convenient access
pub use events::{EventLog, GameEvent, LoggedEvent, MoveRejection, SkirmishEvent};
pub use hostility::{HostilityModel, HostilityPolicy};
pub use reachable::{compute_reachable, compute_reachable_with_config, step_cost, MovementRange};
pub use registry::{Unit, UnitRegistry};
pub use skirmish::{MovementManager, SelectionManager, Skirmish, TurnManager};
pub use zoc::{opposing_zoc, zone_of_control};
