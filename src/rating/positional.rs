//! Positional rating model
//!
//! A player's rating is the mean of their three attribute clusters, with the
//! cluster matching their natural positional group boosted by the
//! specialization weight. Fielding a player outside every trained position
//! costs a flat fraction of that rating.

use crate::config::RatingConfig;
use crate::error::Result;
use crate::player::{Player, PositionType};
use crate::rating::calculator::RatingCalculator;
use crate::types::Rating;
use bigdecimal::{BigDecimal, One, Zero};
use tracing::trace;

/// Rating calculator weighting attributes by natural position
#[derive(Debug, Clone, Default)]
pub struct PositionalRatingCalculator {
    config: RatingConfig,
}

impl PositionalRatingCalculator {
    /// Create a new positional rating calculator
    pub fn new(config: RatingConfig) -> Result<Self> {
        if config.specialization_weight <= BigDecimal::zero() {
            return Err(crate::error::EngineError::ConfigurationError {
                message: "Specialization weight must be positive".to_string(),
            }
            .into());
        }

        if config.out_of_position_penalty < BigDecimal::zero()
            || config.out_of_position_penalty >= BigDecimal::one()
        {
            return Err(crate::error::EngineError::ConfigurationError {
                message: "Out-of-position penalty must be in [0, 1)".to_string(),
            }
            .into());
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Fraction of the base rating lost for the player's current role
    pub fn penalty(&self, player: &Player) -> BigDecimal {
        if player.is_in_position() {
            BigDecimal::zero()
        } else {
            self.config.out_of_position_penalty.clone()
        }
    }
}

impl RatingCalculator for PositionalRatingCalculator {
    fn base_rating(&self, player: &Player) -> Rating {
        let stats = &player.stats;
        let weight = &self.config.specialization_weight;

        let (defense, attack, physical_mental) = match player.position.position_type() {
            PositionType::GK | PositionType::DF => {
                (stats.defense() * weight, stats.attack(), stats.physical_mental())
            }
            PositionType::MF => {
                (stats.defense(), stats.attack(), stats.physical_mental() * weight)
            }
            PositionType::FW => {
                (stats.defense(), stats.attack() * weight, stats.physical_mental())
            }
        };

        (defense + attack + physical_mental) / BigDecimal::from(3)
    }

    fn rating(&self, player: &Player) -> Rating {
        let penalty = self.penalty(player);
        let rating = self.base_rating(player) * (BigDecimal::one() - &penalty);

        trace!(
            "Rated {} ({} as {}): {} with penalty {}",
            player.name,
            player.position,
            player.role,
            rating,
            penalty
        );

        rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Position, StatBlock};
    use crate::utils::{decimal, round_to};

    fn player(position: Position, stats: StatBlock) -> Player {
        Player::new("Test Player", position, "ENG", stats, BigDecimal::from(0))
    }

    fn ints(values: [i64; 5]) -> [BigDecimal; 5] {
        values.map(BigDecimal::from)
    }

    #[test]
    fn test_in_position_striker() {
        let calculator = PositionalRatingCalculator::default();
        let striker = player(Position::ST, StatBlock::uniform(BigDecimal::from(70)));

        // mean(70, 70 * 1.15, 70) = 73.5
        assert_eq!(calculator.rating(&striker), decimal(735, 1));
        assert_eq!(calculator.rating(&striker), calculator.base_rating(&striker));
    }

    #[test]
    fn test_striker_fielded_in_goal() {
        let calculator = PositionalRatingCalculator::default();
        let mut striker = player(Position::ST, StatBlock::uniform(BigDecimal::from(70)));
        striker.set_role(Position::GK);

        // The branch follows the natural position; the role only adds the penalty
        assert_eq!(calculator.base_rating(&striker), decimal(735, 1));
        assert_eq!(calculator.rating(&striker), decimal(6615, 2));
    }

    #[test]
    fn test_goalkeeper_fielded_up_front() {
        let calculator = PositionalRatingCalculator::default();
        let stats = StatBlock::from_clusters(
            ints([80, 80, 80, 80, 80]),
            ints([50, 50, 50, 50, 50]),
            ints([60, 60, 60, 60, 60]),
        );
        let mut keeper = player(Position::GK, stats.clone());

        // mean(80 * 1.15, 50, 60) = 67.33
        assert_eq!(round_to(&calculator.base_rating(&keeper), 2), decimal(6733, 2));

        keeper.set_role(Position::ST);
        assert_eq!(round_to(&calculator.rating(&keeper), 1), decimal(606, 1));

        // A natural forward with the same attributes is weighted on attack instead
        let forward = player(Position::ST, stats);
        assert_eq!(round_to(&calculator.rating(&forward), 2), decimal(6583, 2));
    }

    #[test]
    fn test_midfielder_weights_physical_mental() {
        let calculator = PositionalRatingCalculator::default();
        let stats = StatBlock::from_clusters(
            ints([60, 60, 60, 60, 60]),
            ints([60, 60, 60, 60, 60]),
            ints([80, 80, 80, 80, 80]),
        );
        let midfielder = player(Position::CMF, stats);

        // mean(60, 60, 80 * 1.15) = 70.666...
        let expected = BigDecimal::from(212) / BigDecimal::from(3);
        assert_eq!(
            round_to(&calculator.rating(&midfielder), 10),
            round_to(&expected, 10)
        );
    }

    #[test]
    fn test_trained_position_avoids_penalty() {
        let calculator = PositionalRatingCalculator::default();
        let mut defender = player(Position::CB, StatBlock::uniform(BigDecimal::from(60)));
        defender.set_role(Position::RB);
        let penalised = calculator.rating(&defender);

        defender.learn_position(Position::RB);
        let trained = calculator.rating(&defender);

        assert!(trained > penalised);
        assert_eq!(trained, calculator.base_rating(&defender));
    }

    #[test]
    fn test_custom_weights() {
        let calculator = PositionalRatingCalculator::new(RatingConfig {
            specialization_weight: BigDecimal::from(1),
            out_of_position_penalty: decimal(5, 1),
        })
        .unwrap();

        let mut winger = player(Position::LW, StatBlock::uniform(BigDecimal::from(80)));
        assert_eq!(calculator.rating(&winger), BigDecimal::from(80));

        winger.set_role(Position::CB);
        assert_eq!(calculator.rating(&winger), BigDecimal::from(40));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(PositionalRatingCalculator::new(RatingConfig {
            specialization_weight: BigDecimal::from(0),
            ..RatingConfig::default()
        })
        .is_err());

        assert!(PositionalRatingCalculator::new(RatingConfig {
            out_of_position_penalty: BigDecimal::from(1),
            ..RatingConfig::default()
        })
        .is_err());
    }
}
