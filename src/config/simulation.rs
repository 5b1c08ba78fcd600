//! Match simulation configuration

use serde::{Deserialize, Serialize};

/// Coefficients driving the goal model
///
/// A side's expected goals are `skill * venue coefficient * scoring_rate`,
/// never lower than `min_expected_goals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Venue multiplier for the side playing at its own ground
    pub home_coefficient: f64,
    /// Venue multiplier for the visiting side, and for both sides at a neutral venue
    pub away_coefficient: f64,
    /// Goals per skill point per match
    pub scoring_rate: f64,
    /// Lower bound on expected goals, keeps 0-0 from ever being certain
    pub min_expected_goals: f64,
    /// Seed for reproducible runs; a fresh seed is drawn when absent
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            home_coefficient: 1.25,
            away_coefficient: 1.0,
            scoring_rate: 0.02,
            min_expected_goals: 0.05,
            seed: None,
        }
    }
}
