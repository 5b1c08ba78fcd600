//! Clubs and the records they own
//!
//! A club owns its senior roster, youth academy, starting eleven and home
//! stadium outright, so cloning a club yields a fully independent copy.

pub mod academy;
pub mod instance;
pub mod lineup;
pub mod manager;
pub mod stadium;

// Re-export commonly used types
pub use academy::ClubAcademy;
pub use instance::{Club, MAX_ROSTER_SIZE, MIN_ROSTER_SIZE};
pub use lineup::{StartingEleven, STARTING_ELEVEN_SIZE};
pub use manager::Manager;
pub use stadium::Stadium;
