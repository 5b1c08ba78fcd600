//! Rating calculator trait and implementations
//!
//! This module defines the interface for turning a player into a single
//! performance rating and provides a fixed-value implementation for testing
//! or fallback.

use crate::player::Player;
use crate::types::Rating;

/// Trait for calculating a player's effective rating
pub trait RatingCalculator: Send + Sync {
    /// Rating before any out-of-position penalty
    fn base_rating(&self, player: &Player) -> Rating;

    /// Effective rating of the player in their currently assigned role
    fn rating(&self, player: &Player) -> Rating;
}

/// Rating calculator that gives every player the same rating
#[derive(Debug, Clone)]
pub struct FixedRatingCalculator {
    rating: Rating,
}

impl FixedRatingCalculator {
    pub fn new(rating: Rating) -> Self {
        Self { rating }
    }
}

impl RatingCalculator for FixedRatingCalculator {
    fn base_rating(&self, _player: &Player) -> Rating {
        self.rating.clone()
    }

    fn rating(&self, _player: &Player) -> Rating {
        self.rating.clone()
    }
}
