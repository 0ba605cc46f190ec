use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pizza sizes offered by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PizzaSize::Small => write!(f, "small"),
            PizzaSize::Medium => write!(f, "medium"),
            PizzaSize::Large => write!(f, "large"),
        }
    }
}

impl FromStr for PizzaSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(PizzaSize::Small),
            "medium" => Ok(PizzaSize::Medium),
            "large" => Ok(PizzaSize::Large),
            _ => Err(format!("Invalid pizza size: {}", s)),
        }
    }
}
