//! Club skill level aggregation
//!
//! A club's skill level is the mean rating of its starting eleven. An empty
//! eleven has no skill level at all: zero is a legitimate (if dreadful)
//! rating, so it cannot double as "no players".

use crate::club::Club;
use crate::error::{EngineError, Result};
use crate::player::Player;
use crate::rating::calculator::RatingCalculator;
use crate::types::Rating;
use crate::utils::mean;
use std::sync::Arc;

/// Reduces a starting eleven to a single club skill level
#[derive(Clone)]
pub struct SquadAggregator {
    calculator: Arc<dyn RatingCalculator>,
}

impl SquadAggregator {
    pub fn new(calculator: Arc<dyn RatingCalculator>) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &dyn RatingCalculator {
        self.calculator.as_ref()
    }

    /// Mean rating of the club's starting eleven
    pub fn skill_level(&self, club: &Club) -> Result<Rating> {
        let players = club.starting_players()?;
        self.mean_rating(players.into_iter(), &club.name)
    }

    /// Mean rating of an arbitrary group of players
    pub fn skill_level_of(&self, players: &[Player]) -> Result<Rating> {
        self.mean_rating(players.iter(), "<unnamed lineup>")
    }

    fn mean_rating<'a>(
        &self,
        players: impl Iterator<Item = &'a Player>,
        club_name: &str,
    ) -> Result<Rating> {
        let ratings: Vec<Rating> = players.map(|p| self.calculator.rating(p)).collect();

        mean(&ratings).ok_or_else(|| {
            EngineError::EmptyLineup {
                club: club_name.to_string(),
            }
            .into()
        })
    }
}

impl std::fmt::Debug for SquadAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SquadAggregator").finish_non_exhaustive()
    }
}
