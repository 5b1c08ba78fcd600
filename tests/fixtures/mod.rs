//! Shared builders for integration testing

#![allow(dead_code)]

use bigdecimal::BigDecimal;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use top_eleven_engine::club::{Club, Stadium};
use top_eleven_engine::config::{GenerationSettings, SimulationConfig};
use top_eleven_engine::player::{Player, PlayerGenerator, Position, StatBlock};
use top_eleven_engine::rating::{PositionalRatingCalculator, SquadAggregator};
use top_eleven_engine::simulation::{MatchSimulator, MatchdayRunner};

/// Everything needed to rate clubs and play matches with default settings
pub struct TestEngine {
    pub calculator: Arc<PositionalRatingCalculator>,
    pub aggregator: SquadAggregator,
    pub simulator: Arc<MatchSimulator>,
    pub generator: PlayerGenerator,
}

impl TestEngine {
    pub fn new() -> Self {
        let calculator = Arc::new(PositionalRatingCalculator::default());
        let simulator = Arc::new(MatchSimulator::new(SimulationConfig::default()).unwrap());
        Self {
            aggregator: SquadAggregator::new(calculator.clone()),
            generator: PlayerGenerator::new(GenerationSettings::default(), calculator.clone())
                .unwrap(),
            calculator,
            simulator,
        }
    }

    pub fn runner(&self) -> MatchdayRunner {
        MatchdayRunner::new(self.simulator.clone(), self.aggregator.clone())
    }

    /// A club with a generated squad and an automatically picked eleven
    pub fn club(&self, name: &str, seed: u64) -> Club {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut club = empty_club(name);
        for player in self.generator.generate_squad(&mut rng, "England") {
            club.add_player(player).unwrap();
        }
        club.auto_select_starting_eleven(self.calculator.as_ref())
            .unwrap();
        club
    }
}

pub fn empty_club(name: &str) -> Club {
    Club::new(
        name,
        Stadium::new(format!("{} Ground", name), BigDecimal::from(5_000)),
    )
}

/// A player with every stat set to the same value
pub fn uniform_player(position: Position, value: i64) -> Player {
    Player::new(
        format!("{} {}", position, value),
        position,
        "England",
        StatBlock::uniform(BigDecimal::from(value)),
        BigDecimal::from(0),
    )
}

/// A 16-player club of identical players, with the first eleven selected
pub fn uniform_club(name: &str, value: i64) -> Club {
    let positions = [
        Position::GK,
        Position::LB,
        Position::CB,
        Position::CB,
        Position::RB,
        Position::LMF,
        Position::CMF,
        Position::CMF,
        Position::RMF,
        Position::ST,
        Position::ST,
        Position::GK,
        Position::CB,
        Position::CMF,
        Position::CMF,
        Position::ST,
    ];

    let mut club = empty_club(name);
    for (i, position) in positions.iter().enumerate() {
        let player = uniform_player(*position, value);
        let id = player.id;
        club.add_player(player).unwrap();
        if i < 11 {
            club.select_player(&id).unwrap();
        }
    }
    club
}
