//! New player generation

use crate::config::GenerationSettings;
use crate::error::{EngineError, Result};
use crate::player::person::Player;
use crate::player::position::Position;
use crate::player::stats::StatBlock;
use crate::rating::RatingCalculator;
use bigdecimal::{BigDecimal, Zero};
use rand::Rng;
use std::sync::Arc;

const FIRST_NAMES: [&str; 16] = [
    "Aleksander", "Bruno", "Carlos", "Dario", "Emil", "Felipe", "Goran", "Hugo", "Ivan",
    "Jonas", "Kwame", "Luca", "Mateo", "Nico", "Oscar", "Pavel",
];

const LAST_NAMES: [&str; 16] = [
    "Andersen", "Baptiste", "Costa", "Dimitrov", "Eriksen", "Fernandes", "Gashi", "Haddad",
    "Ivanovic", "Jansen", "Kovac", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov",
];

/// Natural positions of a generated 16-player squad: 2 GK, 5 DF, 6 MF, 3 FW
const SQUAD_TEMPLATE: [Position; 16] = [
    Position::GK,
    Position::GK,
    Position::CB,
    Position::CB,
    Position::CB,
    Position::RB,
    Position::LB,
    Position::DMF,
    Position::CMF,
    Position::CMF,
    Position::RMF,
    Position::LMF,
    Position::AMF,
    Position::ST,
    Position::ST,
    Position::RW,
];

/// Creates new players with attributes drawn from the configured range
#[derive(Clone)]
pub struct PlayerGenerator {
    settings: GenerationSettings,
    calculator: Arc<dyn RatingCalculator>,
}

impl PlayerGenerator {
    /// Create a new player generator
    pub fn new(
        settings: GenerationSettings,
        calculator: Arc<dyn RatingCalculator>,
    ) -> Result<Self> {
        if settings.min_stat > settings.max_stat {
            return Err(EngineError::ConfigurationError {
                message: format!(
                    "Min stat {} exceeds max stat {}",
                    settings.min_stat, settings.max_stat
                ),
            }
            .into());
        }

        if settings.value_per_rating_point < BigDecimal::zero() {
            return Err(EngineError::ConfigurationError {
                message: "Value per rating point cannot be negative".to_string(),
            }
            .into());
        }

        Ok(Self {
            settings,
            calculator,
        })
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Generate one player for the given natural position
    ///
    /// Market value is the player's rating times the configured value per
    /// rating point, rounded to cents.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        position: Position,
        country: &str,
    ) -> Player {
        let name = format!(
            "{} {}",
            FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
            LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
        );

        let stats = StatBlock {
            tackling: self.stat(rng),
            marking: self.stat(rng),
            positioning: self.stat(rng),
            heading: self.stat(rng),
            bravery: self.stat(rng),
            passing: self.stat(rng),
            dribbling: self.stat(rng),
            crossing: self.stat(rng),
            shooting: self.stat(rng),
            finishing: self.stat(rng),
            fitness: self.stat(rng),
            strength: self.stat(rng),
            aggression: self.stat(rng),
            speed: self.stat(rng),
            creativity: self.stat(rng),
        };

        let mut player = Player::new(name, position, country, stats, BigDecimal::from(0));
        player.age = self.settings.starting_age;
        player.market_value =
            (self.calculator.rating(&player) * &self.settings.value_per_rating_point).round(2);
        player
    }

    /// Generate a balanced 16-player squad
    pub fn generate_squad<R: Rng + ?Sized>(&self, rng: &mut R, country: &str) -> Vec<Player> {
        SQUAD_TEMPLATE
            .iter()
            .map(|position| self.generate(rng, *position, country))
            .collect()
    }

    fn stat<R: Rng + ?Sized>(&self, rng: &mut R) -> BigDecimal {
        BigDecimal::from(rng.gen_range(self.settings.min_stat..=self.settings.max_stat))
    }
}

impl std::fmt::Debug for PlayerGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerGenerator")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
