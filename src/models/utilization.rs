//! Utilization rating.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light rating for a utilization percentage.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationColor {
    Green,
    Yellow,
    Red,
}

impl UtilizationColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            UtilizationColor::Green => "green",
            UtilizationColor::Yellow => "yellow",
            UtilizationColor::Red => "red",
        }
    }
}

impl fmt::Display for UtilizationColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
