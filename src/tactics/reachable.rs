//! Movement-range expansion
//!
//! Dijkstra over the hex graph with unit step cost plus a zone-of-control
//! entry penalty. The penalty is charged only on a step from a hex outside
//! the opposing zone into a hex inside it; moving within the zone costs the
//! plain step cost.
//!
//! A step never costs less than 1, even when the rules were built by hand
//! with `step_cost: 0`, so expansion always terminates.
//!
//! Equal-cost frontier entries are popped in insertion order, so the
//! acceptance trace (`MovementRange::visit_order`) is reproducible. The
//! reachable set itself does not depend on tie order.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};

use ahash::{AHashMap, AHashSet};

use crate::core::config::{MovementConfig, MovementRules};
use crate::hex::HexCoordinate;
use crate::tactics::hostility::HostilityPolicy;
use crate::tactics::registry::UnitRegistry;
use crate::tactics::zoc::opposing_zoc;

/// Entry in the expansion frontier
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierNode {
    coord: HexCoordinate,
    cost: u32,
    seq: u64,
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap; earlier insertion wins ties
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hexes a unit can reach, with the minimal cost of each
#[derive(Debug, Clone, Default)]
pub struct MovementRange {
    origin: Option<HexCoordinate>,
    costs: AHashMap<HexCoordinate, u32>,
    came_from: AHashMap<HexCoordinate, HexCoordinate>,
    order: Vec<HexCoordinate>,
}

impl MovementRange {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start hex, if a unit stood there
    pub fn origin(&self) -> Option<HexCoordinate> {
        self.origin
    }

    pub fn contains(&self, coord: &HexCoordinate) -> bool {
        self.costs.contains_key(coord)
    }

    /// Minimal movement cost to reach `coord`
    pub fn cost_to(&self, coord: &HexCoordinate) -> Option<u32> {
        self.costs.get(coord).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reachable hexes in acceptance order
    pub fn iter(&self) -> impl Iterator<Item = &HexCoordinate> {
        self.order.iter()
    }

    /// Acceptance order: non-decreasing cost, insertion order within a cost
    pub fn visit_order(&self) -> &[HexCoordinate] {
        &self.order
    }

    pub fn to_set(&self) -> BTreeSet<HexCoordinate> {
        self.order.iter().copied().collect()
    }

    /// Minimal-cost path from the origin to `target`, both inclusive
    pub fn path_to(&self, target: HexCoordinate) -> Option<Vec<HexCoordinate>> {
        if !self.contains(&target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(&prev) = self.came_from.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Compute every hex the unit at `start` can reach within `budget`
///
/// Returns an empty range when no unit stands at `start`. A zero budget
/// yields exactly `{start}`. Never fails, and rules that fail
/// `MovementRules::validate` are still honoured with a step cost of 1.
pub fn compute_reachable<P: HostilityPolicy + ?Sized>(
    start: HexCoordinate,
    budget: u32,
    units: &UnitRegistry,
    rules: &MovementRules,
    policy: &P,
) -> MovementRange {
    let Some(mover) = units.unit_at(start) else {
        tracing::debug!("No unit at {}, empty range", start);
        return MovementRange::empty();
    };

    if let Err(reason) = rules.validate() {
        tracing::warn!("Invalid movement rules ({}), clamping step cost to 1", reason);
    }

    let zoc = opposing_zoc(rules.pattern, mover, units, policy);
    let range = expand(start, budget, rules, &zoc);

    tracing::debug!(
        "Range for {} from {} (budget {}): {} hexes, {} hexes under hostile control",
        mover.id,
        start,
        budget,
        range.len(),
        zoc.len()
    );
    range
}

/// `compute_reachable` with the rules and hostility model of a config
pub fn compute_reachable_with_config(
    start: HexCoordinate,
    budget: u32,
    units: &UnitRegistry,
    config: &MovementConfig,
) -> MovementRange {
    compute_reachable(start, budget, units, &config.rules, &config.hostility)
}

/// Cost of a single step from `from` into `to`; at least 1
pub fn step_cost(
    rules: &MovementRules,
    zoc: &AHashSet<HexCoordinate>,
    from: HexCoordinate,
    to: HexCoordinate,
) -> u32 {
    let base = rules.step_cost.max(1);
    let entering = !zoc.contains(&from) && zoc.contains(&to);
    if entering {
        base.saturating_add(rules.zoc_entry_penalty)
    } else {
        base
    }
}

fn expand(
    start: HexCoordinate,
    budget: u32,
    rules: &MovementRules,
    zoc: &AHashSet<HexCoordinate>,
) -> MovementRange {
    let mut range = MovementRange {
        origin: Some(start),
        ..MovementRange::default()
    };

    let mut best: AHashMap<HexCoordinate, u32> = AHashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    best.insert(start, 0);
    frontier.push(FrontierNode {
        coord: start,
        cost: 0,
        seq,
    });

    while let Some(current) = frontier.pop() {
        if range.costs.contains_key(&current.coord) {
            continue;
        }
        if best.get(&current.coord).is_some_and(|&b| current.cost > b) {
            continue;
        }
        if current.cost > budget {
            continue;
        }

        range.costs.insert(current.coord, current.cost);
        range.order.push(current.coord);

        if current.cost >= budget {
            continue;
        }

        for neighbor in rules.pattern.neighbors(current.coord) {
            // Past the i32 edge of the board
            if !neighbor.is_valid() {
                continue;
            }
            let cost = current
                .cost
                .saturating_add(step_cost(rules, zoc, current.coord, neighbor));
            if cost > budget {
                continue;
            }
            if best.get(&neighbor).is_some_and(|&b| cost >= b) {
                continue;
            }

            best.insert(neighbor, cost);
            range.came_from.insert(neighbor, current.coord);
            seq += 1;
            frontier.push(FrontierNode {
                coord: neighbor,
                cost,
                seq,
            });
        }
    }

    range
}
