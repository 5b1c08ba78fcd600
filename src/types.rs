//! Common types used throughout the engine

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for football players
pub type PlayerId = Uuid;

/// Unique identifier for clubs
pub type ClubId = Uuid;

/// Unique identifier for managers
pub type ManagerId = Uuid;

/// Unique identifier for competitions
pub type CompetitionId = Uuid;

/// Country a league or league cup belongs to
pub type CountryCode = String;

/// Exact decimal used for player ratings and club skill levels
pub type Rating = BigDecimal;

/// Exact decimal used for budgets, prices and market values
pub type Money = BigDecimal;

/// Where a fixture is played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Venue {
    /// The home side plays at its own ground and gets the home coefficient
    #[default]
    Home,
    /// Neither side has home advantage; both get the away coefficient
    Neutral,
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Venue::Home => write!(f, "Home"),
            Venue::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Final score of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchScore {
    pub home: u32,
    pub away: u32,
}

impl MatchScore {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }

    pub fn is_goalless(&self) -> bool {
        self.home == 0 && self.away == 0
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// A fixture between two clubs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: ClubId,
    pub away: ClubId,
    pub venue: Venue,
}

impl Fixture {
    pub fn new(home: ClubId, away: ClubId) -> Self {
        Self {
            home,
            away,
            venue: Venue::Home,
        }
    }

    pub fn neutral(home: ClubId, away: ClubId) -> Self {
        Self {
            home,
            away,
            venue: Venue::Neutral,
        }
    }
}

/// Outcome of a simulated fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture: Fixture,
    pub home_skill: Rating,
    pub away_skill: Rating,
    pub score: MatchScore,
}

/// A fixture that could not be played, with the reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFixture {
    pub fixture: Fixture,
    pub reason: String,
}
