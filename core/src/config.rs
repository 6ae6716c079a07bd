// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game configuration

use serde::{Deserialize, Serialize};

/// Tolerance for floating-point comparisons in traversal and validity checks
pub const DEFAULT_TOLERANCE: f64 = 1e-13;

/// How the midpoint and perpendicularity checks compare doubles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Equal within `GameConfig::tolerance`
    #[default]
    Tolerant,
    /// Bitwise floating-point equality
    Exact,
}

/// Configuration shared by the board and the validity rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Absolute tolerance for traversal tie-breaks and tolerant comparisons
    pub tolerance: f64,
    /// Comparison mode for validity checks
    pub comparison: Comparison,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            comparison: Comparison::Tolerant,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether two doubles count as equal under this configuration
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        match self.comparison {
            Comparison::Exact => a == b,
            Comparison::Tolerant => (a - b).abs() <= self.tolerance,
        }
    }
}
