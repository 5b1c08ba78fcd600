//! Player generation configuration

use crate::utils::decimal;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Ranges used when generating new players
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Lowest value any generated attribute can take
    pub min_stat: u32,
    /// Highest value any generated attribute can take
    pub max_stat: u32,
    /// Age of a newly generated player
    pub starting_age: u32,
    /// Market value per rating point
    pub value_per_rating_point: BigDecimal,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            min_stat: 40,
            max_stat: 80,
            starting_age: 17,
            value_per_rating_point: decimal(10_000, 0),
        }
    }
}
