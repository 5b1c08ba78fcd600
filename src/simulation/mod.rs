//! Match resolution
//!
//! This module turns club skill levels into scorelines, one fixture at a time
//! or a whole matchday at once.

pub mod matchday;
pub mod simulator;

// Re-export commonly used types
pub use matchday::{MatchdayReport, MatchdayRunner};
pub use simulator::{MatchSimulator, MAX_EXPECTED_GOALS};
