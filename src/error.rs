//! Error types for the rating and match engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate. Callers that need to branch on a specific failure
//! recover it with `downcast_ref::<EngineError>()`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific engine scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("Starting eleven is empty for club: {club}")]
    EmptyLineup { club: String },

    #[error("Invalid position code: {code}")]
    InvalidPosition { code: String },

    #[error("Invalid skill level: {value}")]
    InvalidSkill { value: String },

    #[error("Invalid stat {stat}: {value}")]
    InvalidStat { stat: String, value: String },

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Club not found: {club_id}")]
    ClubNotFound { club_id: String },

    #[error("Club {club} already has a manager")]
    ClubAlreadyManaged { club: String },

    #[error("Roster is full for club: {club}")]
    RosterFull { club: String },

    #[error("Roster is at its minimum size for club: {club}")]
    RosterMinimum { club: String },

    #[error("Starting eleven is full for club: {club}")]
    LineupFull { club: String },

    #[error("Player already selected: {player_id}")]
    DuplicateSelection { player_id: String },

    #[error("Starting eleven already has a goalkeeper: {club}")]
    GoalkeeperTaken { club: String },

    #[error("Competition is full: {competition}")]
    CompetitionFull { competition: String },

    #[error("Club {club} already participates in {competition}")]
    AlreadyParticipating { club: String, competition: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal engine error: {message}")]
    InternalError { message: String },
}

impl EngineError {
    /// Extract an engine error from an anyhow error, if it is one
    pub fn from_anyhow(error: &anyhow::Error) -> Option<&EngineError> {
        error.downcast_ref::<EngineError>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::EmptyLineup {
            club: "Harbour Town".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Starting eleven is empty for club: Harbour Town"
        );

        let err = EngineError::InvalidPosition {
            code: "SW".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid position code: SW");

        let err = EngineError::ClubAlreadyManaged {
            club: "Harbour Town".to_string(),
        };
        assert_eq!(err.to_string(), "Club Harbour Town already has a manager");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = EngineError::InvalidSkill {
            value: "-1".to_string(),
        }
        .into();

        assert_eq!(
            EngineError::from_anyhow(&err),
            Some(&EngineError::InvalidSkill {
                value: "-1".to_string()
            })
        );
    }
}
