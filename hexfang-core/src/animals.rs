//! Animal types and the dominance cycle
//!
//! Tiger beats Rabbit, Rabbit beats Dragon, Dragon beats Tiger.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three animal species a piece can be
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animal {
    Tiger,
    Rabbit,
    Dragon,
}

/// All animals, in a fixed order used for random selection
pub const ANIMALS: [Animal; 3] = [Animal::Tiger, Animal::Rabbit, Animal::Dragon];

impl Animal {
    pub fn name(self) -> &'static str {
        match self {
            Animal::Tiger => "tiger",
            Animal::Rabbit => "rabbit",
            Animal::Dragon => "dragon",
        }
    }

    /// The one species this animal captures on contact
    pub fn prey(self) -> Animal {
        match self {
            Animal::Tiger => Animal::Rabbit,
            Animal::Rabbit => Animal::Dragon,
            Animal::Dragon => Animal::Tiger,
        }
    }

    /// True iff `self` captures `other` by adjacency
    pub fn dominates(self, other: Animal) -> bool {
        self.prey() == other
    }
}

/// Dominance relation; missing animals (empty cells) never dominate or get dominated.
pub fn dominates(attacker: Option<Animal>, defender: Option<Animal>) -> bool {
    match (attacker, defender) {
        (Some(a), Some(d)) => a.dominates(d),
        _ => false,
    }
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for unrecognised animal names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown animal: {0} (expected tiger, rabbit or dragon)")]
pub struct ParseAnimalError(pub String);

impl FromStr for Animal {
    type Err = ParseAnimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tiger" | "t" => Ok(Animal::Tiger),
            "rabbit" | "r" => Ok(Animal::Rabbit),
            "dragon" | "d" => Ok(Animal::Dragon),
            other => Err(ParseAnimalError(other.to_string())),
        }
    }
}
