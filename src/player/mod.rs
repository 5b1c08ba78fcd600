//! Football players, their positions, attributes and generation

pub mod generator;
pub mod person;
pub mod position;
pub mod stats;

// Re-export commonly used types
pub use generator::PlayerGenerator;
pub use person::{Player, RETIREMENT_AGE, STARTING_AGE};
pub use position::{Position, PositionType};
pub use stats::StatBlock;
