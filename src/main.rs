//! Hex Tactics - movement range viewer
//!
//! Loads a board (built-in seed, TOML scenario, or random), runs a movement
//! range query for one unit, and prints the result as an ASCII map or JSON.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use hex_tactics::core::error::{Result, TacticsError};
use hex_tactics::core::types::{Faction, UnitId};
use hex_tactics::hex::{HexCoordinate, NeighborPattern};
use hex_tactics::scenario::{load_scenario, Scenario};
use hex_tactics::tactics::{compute_reachable_with_config, MovementRange, UnitRegistry};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PatternArg {
    Cube,
    RowParity,
    QuadParity,
}

impl From<PatternArg> for NeighborPattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Cube => NeighborPattern::Cube,
            PatternArg::RowParity => NeighborPattern::RowParity,
            PatternArg::QuadParity => NeighborPattern::QuadParity,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Show which hexes a unit can reach
#[derive(Parser, Debug)]
#[command(name = "hex-tactics")]
#[command(about = "Compute and display hex-grid movement ranges with zone of control")]
struct Args {
    /// Scenario TOML file (see data/scenarios/)
    #[arg(long, conflicts_with = "random")]
    scenario: Option<PathBuf>,

    /// Generate a random board with this many units
    #[arg(long)]
    random: Option<usize>,

    /// Random seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Override the scenario's neighbor pattern
    #[arg(long, value_enum)]
    pattern: Option<PatternArg>,

    /// Query hex as `x,y` (defaults to the first unit's position)
    #[arg(long, value_parser = parse_hex, allow_hyphen_values = true)]
    at: Option<HexCoordinate>,

    /// Override the unit's movement budget
    #[arg(long)]
    budget: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

fn parse_hex(s: &str) -> std::result::Result<HexCoordinate, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let x = x.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(HexCoordinate::new(x, y))
}

/// JSON output structure
#[derive(Serialize)]
struct RangeReport {
    scenario: String,
    pattern: NeighborPattern,
    unit: Option<UnitId>,
    faction: Option<Faction>,
    start: HexCoordinate,
    budget: u32,
    reachable: Vec<ReachableHex>,
}

#[derive(Serialize)]
struct ReachableHex {
    hex: HexCoordinate,
    cost: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hex_tactics=info")),
        )
        .init();

    let args = Args::parse();

    let mut scenario = match (&args.scenario, args.random) {
        (Some(path), _) => load_scenario(path)?,
        (None, Some(count)) => Scenario::random(args.seed, count, 4),
        (None, None) => Scenario::seed(),
    };
    if let Some(pattern) = args.pattern {
        scenario.config.rules.pattern = pattern.into();
    }
    tracing::info!("Scenario '{}' with {} units", scenario.name, scenario.units.len());

    let registry = scenario.build_registry()?;
    let start = match args.at {
        Some(at) => at,
        None => registry
            .iter()
            .next()
            .map(|u| u.position)
            .ok_or_else(|| TacticsError::InvalidConfig("scenario has no units".into()))?,
    };

    let unit = registry.unit_at(start);
    if unit.is_none() {
        tracing::warn!("No unit at {}; range is empty", start);
    }
    let budget = args
        .budget
        .or(unit.map(|u| u.movement))
        .unwrap_or_default();

    let range = compute_reachable_with_config(start, budget, &registry, &scenario.config);

    match args.format {
        Format::Json => {
            let report = RangeReport {
                scenario: scenario.name.clone(),
                pattern: scenario.config.rules.pattern,
                unit: unit.map(|u| u.id.clone()),
                faction: unit.map(|u| u.faction),
                start,
                budget,
                reachable: range
                    .iter()
                    .map(|hex| ReachableHex {
                        hex: *hex,
                        cost: range.cost_to(hex).unwrap_or_default(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Text => {
            println!("=== {} ===", scenario.name);
            match unit {
                Some(u) => println!(
                    "{} ({}) at {} with budget {}: {} hexes reachable",
                    u.id,
                    u.faction,
                    start,
                    budget,
                    range.len()
                ),
                None => println!("No unit at {}", start),
            }
            println!();
            print!(
                "{}",
                render(&registry, &range, scenario.config.rules.pattern)
            );
        }
    }

    Ok(())
}

/// ASCII map of the bounding box of units and reachable hexes
fn render(registry: &UnitRegistry, range: &MovementRange, pattern: NeighborPattern) -> String {
    let points: Vec<HexCoordinate> = registry
        .iter()
        .map(|u| u.position)
        .chain(range.iter().copied())
        .collect();
    let (Some(min_x), Some(max_x)) = (
        points.iter().map(|p| p.x).min(),
        points.iter().map(|p| p.x).max(),
    ) else {
        return String::new();
    };
    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);

    let mut out = String::new();
    for y in min_y..=max_y {
        // Cube rows slant by half a hex each; parity layouts shift odd rows
        let indent = if pattern.shifts_odd_rows() {
            usize::from(y.rem_euclid(2) == 1)
        } else {
            (y - min_y) as usize
        };
        out.push_str(&" ".repeat(indent));
        for x in min_x..=max_x {
            let hex = HexCoordinate::new(x, y);
            let glyph = match registry.unit_at(hex) {
                Some(unit) => unit.faction.glyph(),
                None if range.contains(&hex) => '*',
                None => '.',
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
