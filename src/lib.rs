//! Hex Tactics - movement ranges on a hex grid with zone of control
//!
//! - `core`: ids, factions, errors, movement configuration
//! - `hex`: cube coordinates and neighbor layouts
//! - `tactics`: unit registry, zone of control, reachability, skirmish events
//! - `scenario`: built-in, TOML and random boards

pub mod core;
pub mod hex;
pub mod scenario;
pub mod tactics;
