//! Configuration management for the engine
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values for rating, simulation and
//! player generation.

pub mod app;
pub mod generation;
pub mod rating;
pub mod simulation;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use generation::GenerationSettings;
pub use rating::RatingConfig;
pub use simulation::SimulationConfig;
