//! Which factions oppose each other
//!
//! Zone-of-control penalties only apply from hostile units, so every range
//! query takes a `HostilityPolicy`. Closures work directly:
//!
//! ```
//! use hex_tactics::core::Faction;
//! use hex_tactics::tactics::HostilityPolicy;
//!
//! let everyone_fights = |a: Faction, b: Faction| a != b;
//! assert!(everyone_fights.is_hostile(Faction::Player, Faction::Ally));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::types::Faction;

/// Decides whether `other` opposes a unit of faction `mover`
pub trait HostilityPolicy {
    fn is_hostile(&self, mover: Faction, other: Faction) -> bool;
}

impl<F> HostilityPolicy for F
where
    F: Fn(Faction, Faction) -> bool,
{
    fn is_hostile(&self, mover: Faction, other: Faction) -> bool {
        self(mover, other)
    }
}

/// Built-in, configurable hostility models
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "kebab-case")]
pub enum HostilityModel {
    /// Enemy against everyone else
    ///
    /// An `Enemy` mover is opposed by `Player` and `Ally`; any other mover
    /// is opposed by `Enemy` only. Colour factions are never involved.
    #[default]
    TwoSided,

    /// Any two different non-neutral factions are hostile
    OpenConflict,

    /// Explicit hostile pairs, read symmetrically
    Matrix { pairs: Vec<(Faction, Faction)> },
}

impl HostilityModel {
    pub fn matrix(pairs: impl IntoIterator<Item = (Faction, Faction)>) -> Self {
        HostilityModel::Matrix {
            pairs: pairs.into_iter().collect(),
        }
    }
}

impl HostilityPolicy for HostilityModel {
    fn is_hostile(&self, mover: Faction, other: Faction) -> bool {
        match self {
            HostilityModel::TwoSided => match mover {
                Faction::Enemy => matches!(other, Faction::Player | Faction::Ally),
                _ => other == Faction::Enemy,
            },
            HostilityModel::OpenConflict => {
                mover != other && mover != Faction::Neutral && other != Faction::Neutral
            }
            HostilityModel::Matrix { pairs } => pairs
                .iter()
                .any(|&(a, b)| (a == mover && b == other) || (a == other && b == mover)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sided_enemy_mover() {
        let model = HostilityModel::TwoSided;
        assert!(model.is_hostile(Faction::Enemy, Faction::Player));
        assert!(model.is_hostile(Faction::Enemy, Faction::Ally));
        assert!(!model.is_hostile(Faction::Enemy, Faction::Enemy));
    }

    #[test]
    fn test_two_sided_friendly_mover() {
        let model = HostilityModel::TwoSided;
        assert!(model.is_hostile(Faction::Player, Faction::Enemy));
        assert!(model.is_hostile(Faction::Ally, Faction::Enemy));
        assert!(!model.is_hostile(Faction::Player, Faction::Ally));
        assert!(!model.is_hostile(Faction::Ally, Faction::Player));
    }

    #[test]
    fn test_two_sided_is_asymmetric_for_outsiders() {
        // A neutral mover still fears enemies, but enemies ignore neutrals
        let model = HostilityModel::TwoSided;
        assert!(model.is_hostile(Faction::Neutral, Faction::Enemy));
        assert!(!model.is_hostile(Faction::Enemy, Faction::Neutral));
    }

    #[test]
    fn test_open_conflict() {
        let model = HostilityModel::OpenConflict;
        assert!(model.is_hostile(Faction::Blue, Faction::Red));
        assert!(model.is_hostile(Faction::Green, Faction::Blue));
        assert!(!model.is_hostile(Faction::Red, Faction::Red));
        assert!(!model.is_hostile(Faction::Neutral, Faction::Red));
        assert!(!model.is_hostile(Faction::Red, Faction::Neutral));
    }

    #[test]
    fn test_matrix_symmetric() {
        let model = HostilityModel::matrix([(Faction::Blue, Faction::Red)]);
        assert!(model.is_hostile(Faction::Blue, Faction::Red));
        assert!(model.is_hostile(Faction::Red, Faction::Blue));
        assert!(!model.is_hostile(Faction::Blue, Faction::Green));
    }

    #[test]
    fn test_closure_policy() {
        let policy = |mover: Faction, other: Faction| mover == Faction::Player && other != mover;
        assert!(policy.is_hostile(Faction::Player, Faction::Ally));
        assert!(!policy.is_hostile(Faction::Ally, Faction::Player));
    }
}
