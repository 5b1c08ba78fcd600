//! Concurrent simulation of a whole matchday
//!
//! Skill levels are computed up front from the clubs as they stand, then
//! every fixture runs on the blocking pool with its own random source seeded
//! from the matchday seed and the fixture's index. The runner waits for every
//! fixture before returning, so no caller ever sees a partial matchday.

use crate::club::Club;
use crate::error::{EngineError, Result};
use crate::rating::SquadAggregator;
use crate::simulation::simulator::MatchSimulator;
use crate::types::{ClubId, Fixture, MatchResult, Rating, SkippedFixture};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Everything that happened on a matchday, in fixture order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchdayReport {
    pub results: Vec<MatchResult>,
    pub skipped: Vec<SkippedFixture>,
}

/// Runs all fixtures of a matchday concurrently
#[derive(Debug, Clone)]
pub struct MatchdayRunner {
    simulator: Arc<MatchSimulator>,
    aggregator: SquadAggregator,
}

impl MatchdayRunner {
    pub fn new(simulator: Arc<MatchSimulator>, aggregator: SquadAggregator) -> Self {
        Self {
            simulator,
            aggregator,
        }
    }

    /// Simulate every fixture and wait for all of them
    ///
    /// Fixtures whose clubs are unknown or cannot field a lineup are skipped
    /// and listed in the report.
    pub async fn run(&self, clubs: &[Club], fixtures: &[Fixture], seed: u64) -> Result<MatchdayReport> {
        let mut skipped: Vec<(usize, SkippedFixture)> = Vec::new();
        let mut tasks = JoinSet::new();

        for (index, fixture) in fixtures.iter().enumerate() {
            let (home_skill, away_skill) = match self.fixture_skills(clubs, fixture) {
                Ok(skills) => skills,
                Err(e) => {
                    warn!("Skipping fixture {}: {}", index, e);
                    skipped.push((
                        index,
                        SkippedFixture {
                            fixture: fixture.clone(),
                            reason: e.to_string(),
                        },
                    ));
                    continue;
                }
            };

            let simulator = self.simulator.clone();
            let fixture = fixture.clone();
            let fixture_seed = seed.wrapping_add(index as u64);
            tasks.spawn_blocking(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(fixture_seed);
                let outcome = simulator
                    .simulate_at(&home_skill, &away_skill, fixture.venue, &mut rng)
                    .map(|score| MatchResult {
                        fixture: fixture.clone(),
                        home_skill,
                        away_skill,
                        score,
                    });
                (index, fixture, outcome)
            });
        }

        let mut results: Vec<(usize, MatchResult)> = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let (index, fixture, outcome) = joined.map_err(|e| EngineError::InternalError {
                message: format!("Fixture task failed: {}", e),
            })?;

            match outcome {
                Ok(result) => results.push((index, result)),
                Err(e) => {
                    warn!("Fixture {} could not be simulated: {}", index, e);
                    skipped.push((
                        index,
                        SkippedFixture {
                            fixture,
                            reason: e.to_string(),
                        },
                    ));
                }
            }
        }

        results.sort_by_key(|(index, _)| *index);
        skipped.sort_by_key(|(index, _)| *index);

        info!(
            "Matchday complete: {} played, {} skipped",
            results.len(),
            skipped.len()
        );

        Ok(MatchdayReport {
            results: results.into_iter().map(|(_, r)| r).collect(),
            skipped: skipped.into_iter().map(|(_, s)| s).collect(),
        })
    }

    fn fixture_skills(&self, clubs: &[Club], fixture: &Fixture) -> Result<(Rating, Rating)> {
        let home = find_club(clubs, &fixture.home)?;
        let away = find_club(clubs, &fixture.away)?;
        Ok((
            self.aggregator.skill_level(home)?,
            self.aggregator.skill_level(away)?,
        ))
    }
}

fn find_club<'a>(clubs: &'a [Club], id: &ClubId) -> Result<&'a Club> {
    clubs.iter().find(|c| &c.id == id).ok_or_else(|| {
        EngineError::InternalError {
            message: format!("Club not found: {}", id),
        }
        .into()
    })
}
