//! Top Eleven - Football club management rating and match engine
//!
//! This crate provides player ratings, club skill levels, Poisson-based match
//! resolution and the surrounding game world of clubs, players and
//! competitions.

pub mod club;
pub mod competition;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod rating;
pub mod simulation;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{EngineError, Result};
pub use types::*;

// Re-export key components
pub use club::{Club, Manager};
pub use game::Game;
pub use player::{Player, PlayerGenerator, Position};
pub use rating::{PositionalRatingCalculator, RatingCalculator, SquadAggregator};
pub use simulation::{MatchSimulator, MatchdayRunner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
