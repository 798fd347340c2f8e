//! Skirmish state driven by typed events
//!
//! Three managers each own one concern and react to specific `GameEvent`
//! variants:
//!
//! - `SelectionManager`: `HoverEnter`, `HoverLeave`, `Select`
//! - `MovementManager`: `MoveRequested` (and clicks on empty hexes while a
//!   unit is selected)
//! - `TurnManager`: `EndTurn`
//!
//! All mutation of the unit registry goes through `Skirmish::dispatch`, so
//! every range query sees a consistent snapshot.

use ahash::AHashSet;

use crate::core::config::MovementConfig;
use crate::core::types::{Faction, Turn, UnitId};
use crate::hex::HexCoordinate;
use crate::tactics::events::{EventLog, GameEvent, MoveRejection, SkirmishEvent};
use crate::tactics::reachable::{compute_reachable_with_config, MovementRange};
use crate::tactics::registry::UnitRegistry;

/// Range of a unit using its own movement budget
fn unit_range(registry: &UnitRegistry, config: &MovementConfig, unit_id: &UnitId) -> MovementRange {
    match registry.get(unit_id) {
        Some(unit) => compute_reachable_with_config(unit.position, unit.movement, registry, config),
        None => MovementRange::empty(),
    }
}

fn highlight(unit_id: &UnitId, range: &MovementRange) -> SkirmishEvent {
    SkirmishEvent::RangeHighlighted {
        unit_id: unit_id.clone(),
        hexes: range.to_set().into_iter().collect(),
    }
}

/// Hover and selection state
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    hovered: Option<UnitId>,
    selected: Option<UnitId>,
}

impl SelectionManager {
    pub fn selected(&self) -> Option<&UnitId> {
        self.selected.as_ref()
    }

    pub fn hovered(&self) -> Option<&UnitId> {
        self.hovered.as_ref()
    }

    fn on_hover_enter(
        &mut self,
        at: HexCoordinate,
        registry: &UnitRegistry,
        config: &MovementConfig,
    ) -> Vec<SkirmishEvent> {
        match registry.unit_at(at) {
            Some(unit) => {
                self.hovered = Some(unit.id.clone());
                let range = unit_range(registry, config, &unit.id);
                vec![highlight(&unit.id, &range)]
            }
            None => self.on_hover_leave(),
        }
    }

    fn on_hover_leave(&mut self) -> Vec<SkirmishEvent> {
        match self.hovered.take() {
            Some(_) => vec![SkirmishEvent::HighlightCleared],
            None => Vec::new(),
        }
    }

    fn select(
        &mut self,
        unit_id: &UnitId,
        registry: &UnitRegistry,
        config: &MovementConfig,
    ) -> Vec<SkirmishEvent> {
        self.selected = Some(unit_id.clone());
        let range = unit_range(registry, config, unit_id);
        vec![
            SkirmishEvent::UnitSelected {
                unit_id: unit_id.clone(),
            },
            highlight(unit_id, &range),
        ]
    }

    /// Drop hover and selection once the unit they refer to has moved
    fn after_move(&mut self) -> Vec<SkirmishEvent> {
        self.hovered = None;
        let mut out = self.clear();
        out.push(SkirmishEvent::HighlightCleared);
        out
    }

    fn clear(&mut self) -> Vec<SkirmishEvent> {
        match self.selected.take() {
            Some(_) => vec![SkirmishEvent::SelectionCleared],
            None => Vec::new(),
        }
    }
}

/// Validates and applies moves; one move per unit per turn
#[derive(Debug, Clone, Default)]
pub struct MovementManager {
    moved_this_turn: AHashSet<UnitId>,
}

impl MovementManager {
    pub fn has_moved(&self, unit_id: &UnitId) -> bool {
        self.moved_this_turn.contains(unit_id)
    }

    fn reset(&mut self) {
        self.moved_this_turn.clear();
    }

    fn on_move_requested(
        &mut self,
        unit_id: &UnitId,
        to: HexCoordinate,
        active: Faction,
        registry: &mut UnitRegistry,
        config: &MovementConfig,
    ) -> SkirmishEvent {
        let reject = |reason: MoveRejection| {
            tracing::debug!("Move of {} to {} rejected: {}", unit_id, to, reason);
            SkirmishEvent::MoveRejected {
                unit_id: unit_id.clone(),
                reason,
            }
        };

        let Some(unit) = registry.get(unit_id) else {
            return reject(MoveRejection::UnknownUnit);
        };
        if unit.faction != active {
            return reject(MoveRejection::NotYourTurn { active });
        }
        if self.has_moved(unit_id) {
            return reject(MoveRejection::AlreadyMoved);
        }
        if unit.position == to {
            return reject(MoveRejection::AlreadyThere);
        }
        if let Some(occupant) = registry.unit_at(to) {
            if &occupant.id != unit_id {
                return reject(MoveRejection::Occupied {
                    by: occupant.id.clone(),
                });
            }
        }

        let from = unit.position;
        let range = unit_range(registry, config, unit_id);
        let Some(cost) = range.cost_to(&to) else {
            return reject(MoveRejection::OutOfRange);
        };

        if let Err(err) = registry.move_unit(unit_id, to) {
            tracing::warn!("Registry refused move of {}: {}", unit_id, err);
            return reject(MoveRejection::OutOfRange);
        }
        self.moved_this_turn.insert(unit_id.clone());
        tracing::info!("{} moved {} -> {} (cost {})", unit_id, from, to, cost);

        SkirmishEvent::UnitMoved {
            unit_id: unit_id.clone(),
            from,
            to,
            cost,
        }
    }
}

/// Rotates the active faction among those present on the board
#[derive(Debug, Clone)]
pub struct TurnManager {
    turn: Turn,
    active: Faction,
}

impl TurnManager {
    fn new(registry: &UnitRegistry) -> Self {
        let active = registry.factions().first().copied().unwrap_or(Faction::Player);
        Self { turn: 1, active }
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn active(&self) -> Faction {
        self.active
    }

    fn on_end_turn(&mut self, registry: &UnitRegistry) -> SkirmishEvent {
        let present = registry.factions();
        let start = Faction::ALL
            .iter()
            .position(|f| *f == self.active)
            .unwrap_or(0);

        // Next present faction after the current one, wrapping around
        self.active = (1..=Faction::ALL.len())
            .map(|step| Faction::ALL[(start + step) % Faction::ALL.len()])
            .find(|f| present.contains(f))
            .unwrap_or(self.active);
        self.turn += 1;

        tracing::info!("Turn {}: {} to move", self.turn, self.active);
        SkirmishEvent::TurnStarted {
            turn: self.turn,
            faction: self.active,
        }
    }
}

/// A board of units plus the managers that drive it
#[derive(Debug, Clone)]
pub struct Skirmish {
    registry: UnitRegistry,
    config: MovementConfig,
    selection: SelectionManager,
    movement: MovementManager,
    turns: TurnManager,
    log: EventLog,
}

impl Skirmish {
    pub fn new(registry: UnitRegistry, config: MovementConfig) -> Self {
        let turns = TurnManager::new(&registry);
        Self {
            registry,
            config,
            selection: SelectionManager::default(),
            movement: MovementManager::default(),
            turns,
            log: EventLog::new(),
        }
    }

    /// Route an input event to the manager subscribed to it
    pub fn dispatch(&mut self, event: GameEvent) -> Vec<SkirmishEvent> {
        let out = match event {
            GameEvent::HoverEnter { at } => {
                self.selection
                    .on_hover_enter(at, &self.registry, &self.config)
            }
            GameEvent::HoverLeave => self.selection.on_hover_leave(),
            GameEvent::Select { at } => self.on_select(at),
            GameEvent::MoveRequested { unit_id, to } => self.request_move(&unit_id, to),
            GameEvent::EndTurn => {
                let mut out = self.selection.clear();
                self.movement.reset();
                out.push(self.turns.on_end_turn(&self.registry));
                out
            }
        };

        let turn = self.turns.turn();
        for e in &out {
            self.log.push(turn, e.clone());
        }
        out
    }

    fn on_select(&mut self, at: HexCoordinate) -> Vec<SkirmishEvent> {
        if let Some(unit) = self.registry.unit_at(at) {
            let unit_id = unit.id.clone();
            return self.selection.select(&unit_id, &self.registry, &self.config);
        }

        // Click on an empty hex moves the selected unit there
        match self.selection.selected().cloned() {
            Some(unit_id) => self.request_move(&unit_id, at),
            None => Vec::new(),
        }
    }

    fn request_move(&mut self, unit_id: &UnitId, to: HexCoordinate) -> Vec<SkirmishEvent> {
        let result = self.movement.on_move_requested(
            unit_id,
            to,
            self.turns.active(),
            &mut self.registry,
            &self.config,
        );

        let moved = matches!(result, SkirmishEvent::UnitMoved { .. });
        let mut out = vec![result];
        if moved {
            out.extend(self.selection.after_move());
        }
        out
    }

    /// Current range of a unit with its own movement budget
    pub fn range_of(&self, unit_id: &UnitId) -> MovementRange {
        unit_range(&self.registry, &self.config, unit_id)
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn active_faction(&self) -> Faction {
        self.turns.active()
    }

    pub fn turn(&self) -> Turn {
        self.turns.turn()
    }
}
