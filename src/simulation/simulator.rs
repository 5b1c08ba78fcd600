//! Match outcome generation
//!
//! Each side's expected goal count is its skill level scaled by the venue
//! coefficient and the league-wide scoring rate, floored at a small positive
//! value. The actual goal count is drawn from a Poisson distribution with that
//! mean using the caller's random source, so a seeded source reproduces the
//! same scoreline.

use crate::config::SimulationConfig;
use crate::error::{EngineError, Result};
use crate::types::{MatchScore, Rating, Venue};
use crate::utils::to_f64;
use bigdecimal::{BigDecimal, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Poisson};
use tracing::debug;

/// Largest expected goal count a side may be given
///
/// Keeps every Poisson sample far inside the range of a `u32` score.
pub const MAX_EXPECTED_GOALS: f64 = 1_000_000.0;

/// Turns two skill levels into a final score
#[derive(Debug, Clone)]
pub struct MatchSimulator {
    config: SimulationConfig,
}

impl MatchSimulator {
    /// Create a new match simulator
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let valid = |v: f64| v > 0.0 && v.is_finite();

        if !valid(config.home_coefficient) || !valid(config.away_coefficient) {
            return Err(EngineError::ConfigurationError {
                message: "Venue coefficients must be positive".to_string(),
            }
            .into());
        }

        if !valid(config.scoring_rate) {
            return Err(EngineError::ConfigurationError {
                message: "Scoring rate must be positive".to_string(),
            }
            .into());
        }

        if !valid(config.min_expected_goals) {
            return Err(EngineError::ConfigurationError {
                message: "Minimum expected goals must be positive".to_string(),
            }
            .into());
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Venue coefficients for the (home, away) sides
    pub fn coefficients(&self, venue: Venue) -> (f64, f64) {
        match venue {
            Venue::Home => (self.config.home_coefficient, self.config.away_coefficient),
            Venue::Neutral => (self.config.away_coefficient, self.config.away_coefficient),
        }
    }

    /// Expected goals for a side with the given skill and venue coefficient
    ///
    /// Negative skills, and skills so large the expected goals exceed
    /// [`MAX_EXPECTED_GOALS`], are rejected with `InvalidSkill`.
    pub fn expected_goals(&self, skill: &Rating, coefficient: f64) -> Result<f64> {
        let invalid = || EngineError::InvalidSkill {
            value: skill.to_string(),
        };

        if *skill < BigDecimal::zero() {
            return Err(invalid().into());
        }

        let expected = to_f64(skill).map_err(|_| invalid())?
            * coefficient
            * self.config.scoring_rate;
        if expected.is_nan() || expected > MAX_EXPECTED_GOALS {
            return Err(invalid().into());
        }

        Ok(expected.max(self.config.min_expected_goals))
    }

    /// Simulate a match at the home side's ground
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        home_skill: &Rating,
        away_skill: &Rating,
        rng: &mut R,
    ) -> Result<MatchScore> {
        self.simulate_at(home_skill, away_skill, Venue::Home, rng)
    }

    /// Simulate a match at the given venue
    pub fn simulate_at<R: Rng + ?Sized>(
        &self,
        home_skill: &Rating,
        away_skill: &Rating,
        venue: Venue,
        rng: &mut R,
    ) -> Result<MatchScore> {
        let (home_coefficient, away_coefficient) = self.coefficients(venue);
        let home_expected = self.expected_goals(home_skill, home_coefficient)?;
        let away_expected = self.expected_goals(away_skill, away_coefficient)?;

        let home = sample_goals(home_expected, rng)?;
        let away = sample_goals(away_expected, rng)?;

        debug!(
            "Simulated {} fixture: expected {:.2}-{:.2}, final {}-{}",
            venue, home_expected, away_expected, home, away
        );

        Ok(MatchScore::new(home, away))
    }

    /// Simulate a home fixture with a fresh random source built from `seed`
    pub fn simulate_seeded(
        &self,
        home_skill: &Rating,
        away_skill: &Rating,
        seed: u64,
    ) -> Result<MatchScore> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.simulate(home_skill, away_skill, &mut rng)
    }
}

fn sample_goals<R: Rng + ?Sized>(expected: f64, rng: &mut R) -> Result<u32> {
    let distribution = Poisson::new(expected).map_err(|e| EngineError::InternalError {
        message: format!("Invalid expected goals {}: {}", expected, e),
    })?;

    let goals: f64 = distribution.sample(rng);
    if !(0.0..=f64::from(u32::MAX)).contains(&goals) {
        return Err(EngineError::InternalError {
            message: format!("Goal sample {} is out of range", goals),
        }
        .into());
    }
    Ok(goals as u32)
}
