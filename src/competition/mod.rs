//! Club competitions
//!
//! Leagues and league cups belong to a country; champions leagues are
//! continental. All of them cap their number of participants.

pub mod instance;

// Re-export commonly used types
pub use instance::{
    Competition, CompetitionKind, CONTINENTAL_PARTICIPANTS, DOMESTIC_PARTICIPANTS,
};
