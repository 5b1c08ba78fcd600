//! Raw player attributes and the three attribute clusters derived from them

use crate::error::{EngineError, Result};
use crate::types::Rating;
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

/// The fifteen raw attributes of a football player
///
/// Values are non-negative, nominally on a 0-100 scale. The cluster averages
/// are recomputed on every call because training may change attributes
/// between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    pub tackling: BigDecimal,
    pub marking: BigDecimal,
    pub positioning: BigDecimal,
    pub heading: BigDecimal,
    pub bravery: BigDecimal,
    pub passing: BigDecimal,
    pub dribbling: BigDecimal,
    pub crossing: BigDecimal,
    pub shooting: BigDecimal,
    pub finishing: BigDecimal,
    pub fitness: BigDecimal,
    pub strength: BigDecimal,
    pub aggression: BigDecimal,
    pub speed: BigDecimal,
    pub creativity: BigDecimal,
}

impl StatBlock {
    /// A stat block with every attribute set to the same value
    pub fn uniform(value: BigDecimal) -> Self {
        Self {
            tackling: value.clone(),
            marking: value.clone(),
            positioning: value.clone(),
            heading: value.clone(),
            bravery: value.clone(),
            passing: value.clone(),
            dribbling: value.clone(),
            crossing: value.clone(),
            shooting: value.clone(),
            finishing: value.clone(),
            fitness: value.clone(),
            strength: value.clone(),
            aggression: value.clone(),
            speed: value.clone(),
            creativity: value,
        }
    }

    /// Build a stat block from the three clusters, five attributes each,
    /// in declaration order
    pub fn from_clusters(
        defense: [BigDecimal; 5],
        attack: [BigDecimal; 5],
        physical_mental: [BigDecimal; 5],
    ) -> Self {
        let [tackling, marking, positioning, heading, bravery] = defense;
        let [passing, dribbling, crossing, shooting, finishing] = attack;
        let [fitness, strength, aggression, speed, creativity] = physical_mental;

        Self {
            tackling,
            marking,
            positioning,
            heading,
            bravery,
            passing,
            dribbling,
            crossing,
            shooting,
            finishing,
            fitness,
            strength,
            aggression,
            speed,
            creativity,
        }
    }

    /// Mean of tackling, marking, positioning, heading and bravery
    pub fn defense(&self) -> Rating {
        cluster_mean([
            &self.tackling,
            &self.marking,
            &self.positioning,
            &self.heading,
            &self.bravery,
        ])
    }

    /// Mean of passing, dribbling, crossing, shooting and finishing
    pub fn attack(&self) -> Rating {
        cluster_mean([
            &self.passing,
            &self.dribbling,
            &self.crossing,
            &self.shooting,
            &self.finishing,
        ])
    }

    /// Mean of fitness, strength, aggression, speed and creativity
    pub fn physical_mental(&self) -> Rating {
        cluster_mean([
            &self.fitness,
            &self.strength,
            &self.aggression,
            &self.speed,
            &self.creativity,
        ])
    }

    /// All attributes paired with their names
    pub fn named(&self) -> [(&'static str, &BigDecimal); 15] {
        [
            ("tackling", &self.tackling),
            ("marking", &self.marking),
            ("positioning", &self.positioning),
            ("heading", &self.heading),
            ("bravery", &self.bravery),
            ("passing", &self.passing),
            ("dribbling", &self.dribbling),
            ("crossing", &self.crossing),
            ("shooting", &self.shooting),
            ("finishing", &self.finishing),
            ("fitness", &self.fitness),
            ("strength", &self.strength),
            ("aggression", &self.aggression),
            ("speed", &self.speed),
            ("creativity", &self.creativity),
        ]
    }

    /// Reject negative attributes
    pub fn validate(&self) -> Result<()> {
        let zero = BigDecimal::zero();
        if let Some((stat, value)) = self.named().into_iter().find(|(_, v)| **v < zero) {
            return Err(EngineError::InvalidStat {
                stat: stat.to_string(),
                value: value.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn cluster_mean(values: [&BigDecimal; 5]) -> Rating {
    let sum = values
        .iter()
        .fold(BigDecimal::zero(), |acc, value| acc + *value);
    sum / BigDecimal::from(values.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::decimal;

    fn ints(values: [i64; 5]) -> [BigDecimal; 5] {
        values.map(BigDecimal::from)
    }

    #[test]
    fn test_uniform_clusters() {
        let stats = StatBlock::uniform(BigDecimal::from(70));
        assert_eq!(stats.defense(), BigDecimal::from(70));
        assert_eq!(stats.attack(), BigDecimal::from(70));
        assert_eq!(stats.physical_mental(), BigDecimal::from(70));
    }

    #[test]
    fn test_cluster_means() {
        let stats = StatBlock::from_clusters(
            ints([80, 70, 60, 50, 40]),
            ints([10, 20, 30, 40, 50]),
            ints([99, 1, 0, 0, 0]),
        );

        assert_eq!(stats.defense(), BigDecimal::from(60));
        assert_eq!(stats.attack(), BigDecimal::from(30));
        assert_eq!(stats.physical_mental(), BigDecimal::from(20));
    }

    #[test]
    fn test_fractional_mean_is_exact() {
        let stats = StatBlock::from_clusters(
            ints([1, 0, 0, 0, 0]),
            ints([0, 0, 0, 0, 0]),
            ints([0, 0, 0, 0, 0]),
        );
        assert_eq!(stats.defense(), decimal(2, 1));
    }

    #[test]
    fn test_means_follow_attribute_changes() {
        let mut stats = StatBlock::uniform(BigDecimal::from(50));
        assert_eq!(stats.attack(), BigDecimal::from(50));

        stats.finishing = BigDecimal::from(100);
        assert_eq!(stats.attack(), BigDecimal::from(60));
    }

    #[test]
    fn test_validation() {
        let mut stats = StatBlock::uniform(BigDecimal::from(0));
        assert!(stats.validate().is_ok());

        stats.speed = BigDecimal::from(-5);
        let err = stats.validate().unwrap_err();
        assert_eq!(
            EngineError::from_anyhow(&err),
            Some(&EngineError::InvalidStat {
                stat: "speed".to_string(),
                value: "-5".to_string()
            })
        );
    }
}
