//! Player ratings and club skill levels
//!
//! This module provides the rating calculator interface, the positional
//! rating model, and aggregation of a starting eleven into a skill level.

pub mod calculator;
pub mod positional;
pub mod squad;

// Re-export commonly used types
pub use calculator::{FixedRatingCalculator, RatingCalculator};
pub use positional::PositionalRatingCalculator;
pub use squad::SquadAggregator;
