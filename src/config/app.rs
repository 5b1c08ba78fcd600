//! Main application configuration
//!
//! This module defines the primary configuration structures for the engine,
//! including environment variable loading, TOML file loading and validation.

use crate::config::{GenerationSettings, RatingConfig, SimulationConfig};
use anyhow::{anyhow, Context, Result};
use bigdecimal::{BigDecimal, One, Zero};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
    pub simulation: SimulationConfig,
    pub generation: GenerationSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "top-eleven".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Simulation settings
        if let Ok(home) = env::var("HOME_COEFFICIENT") {
            config.simulation.home_coefficient = home
                .parse()
                .map_err(|_| anyhow!("Invalid HOME_COEFFICIENT value: {}", home))?;
        }
        if let Ok(away) = env::var("AWAY_COEFFICIENT") {
            config.simulation.away_coefficient = away
                .parse()
                .map_err(|_| anyhow!("Invalid AWAY_COEFFICIENT value: {}", away))?;
        }
        if let Ok(rate) = env::var("SCORING_RATE") {
            config.simulation.scoring_rate = rate
                .parse()
                .map_err(|_| anyhow!("Invalid SCORING_RATE value: {}", rate))?;
        }
        if let Ok(floor) = env::var("MIN_EXPECTED_GOALS") {
            config.simulation.min_expected_goals = floor
                .parse()
                .map_err(|_| anyhow!("Invalid MIN_EXPECTED_GOALS value: {}", floor))?;
        }
        if let Ok(seed) = env::var("SIMULATION_SEED") {
            config.simulation.seed = Some(
                seed.parse()
                    .map_err(|_| anyhow!("Invalid SIMULATION_SEED value: {}", seed))?,
            );
        }

        // Generation settings
        if let Ok(min_stat) = env::var("MIN_STAT") {
            config.generation.min_stat = min_stat
                .parse()
                .map_err(|_| anyhow!("Invalid MIN_STAT value: {}", min_stat))?;
        }
        if let Ok(max_stat) = env::var("MAX_STAT") {
            config.generation.max_stat = max_stat
                .parse()
                .map_err(|_| anyhow!("Invalid MAX_STAT value: {}", max_stat))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing sections keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(contents).map_err(|e| anyhow!("Invalid configuration: {}", e))?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate rating weights
    if config.rating.specialization_weight <= BigDecimal::zero() {
        return Err(anyhow!("Specialization weight must be positive"));
    }
    if config.rating.out_of_position_penalty < BigDecimal::zero()
        || config.rating.out_of_position_penalty >= BigDecimal::one()
    {
        return Err(anyhow!("Out-of-position penalty must be in [0, 1)"));
    }

    // Validate simulation coefficients
    let simulation = &config.simulation;
    if !(simulation.home_coefficient > 0.0 && simulation.home_coefficient.is_finite()) {
        return Err(anyhow!("Home coefficient must be positive"));
    }
    if !(simulation.away_coefficient > 0.0 && simulation.away_coefficient.is_finite()) {
        return Err(anyhow!("Away coefficient must be positive"));
    }
    if simulation.home_coefficient < simulation.away_coefficient {
        return Err(anyhow!(
            "Home coefficient must not be lower than away coefficient"
        ));
    }
    if !(simulation.scoring_rate > 0.0 && simulation.scoring_rate.is_finite()) {
        return Err(anyhow!("Scoring rate must be positive"));
    }
    if !(simulation.min_expected_goals > 0.0 && simulation.min_expected_goals.is_finite()) {
        return Err(anyhow!("Minimum expected goals must be positive"));
    }

    // Validate generation ranges
    if config.generation.min_stat > config.generation.max_stat {
        return Err(anyhow!("Min stat cannot exceed max stat"));
    }
    if config.generation.value_per_rating_point < BigDecimal::zero() {
        return Err(anyhow!("Value per rating point cannot be negative"));
    }

    Ok(())
}
