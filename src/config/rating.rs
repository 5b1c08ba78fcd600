//! Rating system configuration

use crate::utils::decimal;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Weights applied when turning a stat block into a player rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Multiplier on the attribute cluster matching the player's positional group
    pub specialization_weight: BigDecimal,
    /// Fraction of the rating lost when fielded outside every trained position
    pub out_of_position_penalty: BigDecimal,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            specialization_weight: decimal(115, 2),
            out_of_position_penalty: decimal(1, 1),
        }
    }
}
