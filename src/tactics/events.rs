//! Typed event schema between the input layer and the skirmish managers
//!
//! `GameEvent` is what the UI feeds in (pointer already translated to hex
//! coordinates). `SkirmishEvent` is what comes back for rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{Faction, Turn, UnitId};
use crate::hex::HexCoordinate;

/// Input events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    HoverEnter { at: HexCoordinate },
    HoverLeave,
    Select { at: HexCoordinate },
    MoveRequested { unit_id: UnitId, to: HexCoordinate },
    EndTurn,
}

/// Why a move was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    UnknownUnit,
    NotYourTurn { active: Faction },
    AlreadyMoved,
    AlreadyThere,
    Occupied { by: UnitId },
    OutOfRange,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::UnknownUnit => write!(f, "unknown unit"),
            MoveRejection::NotYourTurn { active } => write!(f, "it is {}'s turn", active),
            MoveRejection::AlreadyMoved => write!(f, "unit already moved this turn"),
            MoveRejection::AlreadyThere => write!(f, "unit is already on that hex"),
            MoveRejection::Occupied { by } => write!(f, "hex occupied by {}", by),
            MoveRejection::OutOfRange => write!(f, "target out of range"),
        }
    }
}

/// Output events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkirmishEvent {
    RangeHighlighted {
        unit_id: UnitId,
        hexes: Vec<HexCoordinate>,
    },
    HighlightCleared,
    UnitSelected {
        unit_id: UnitId,
    },
    SelectionCleared,
    UnitMoved {
        unit_id: UnitId,
        from: HexCoordinate,
        to: HexCoordinate,
        cost: u32,
    },
    MoveRejected {
        unit_id: UnitId,
        reason: MoveRejection,
    },
    TurnStarted {
        turn: Turn,
        faction: Faction,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    pub turn: Turn,
    pub event: SkirmishEvent,
}

/// Everything the skirmish emitted, tagged with the turn
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<LoggedEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn, event: SkirmishEvent) {
        self.events.push(LoggedEvent { turn, event });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events emitted during `turn`
    pub fn for_turn(&self, turn: Turn) -> impl Iterator<Item = &SkirmishEvent> {
        self.events
            .iter()
            .filter(move |e| e.turn == turn)
            .map(|e| &e.event)
    }
}
