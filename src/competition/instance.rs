//! Club competitions: leagues, league cups and champions leagues

use crate::error::{EngineError, Result};
use crate::types::{ClubId, CompetitionId, CountryCode};
use crate::utils::generate_id;
use serde::{Deserialize, Serialize};

/// Participants in a newly created league or league cup
pub const DOMESTIC_PARTICIPANTS: usize = 20;

/// Participants in a newly created champions league
pub const CONTINENTAL_PARTICIPANTS: usize = 32;

/// Which kind of competition this is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionKind {
    League { country: CountryCode },
    LeagueCup { country: CountryCode },
    ChampionsLeague,
}

impl CompetitionKind {
    pub fn country(&self) -> Option<&str> {
        match self {
            CompetitionKind::League { country } | CompetitionKind::LeagueCup { country } => {
                Some(country)
            }
            CompetitionKind::ChampionsLeague => None,
        }
    }
}

impl std::fmt::Display for CompetitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionKind::League { .. } => write!(f, "League"),
            CompetitionKind::LeagueCup { .. } => write!(f, "LeagueCup"),
            CompetitionKind::ChampionsLeague => write!(f, "ChampionsLeague"),
        }
    }
}

/// A competition with a fixed participant cap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub name: String,
    pub level: u32,
    pub kind: CompetitionKind,
    capacity: usize,
    participants: Vec<ClubId>,
}

impl Competition {
    /// Create a competition; the name is upper-cased and suffixed with the level
    pub fn new(name: &str, level: u32, capacity: usize, kind: CompetitionKind) -> Self {
        Self {
            id: generate_id(),
            name: format!("{} LEVEL {}", name.to_uppercase(), level),
            level,
            kind,
            capacity,
            participants: Vec::new(),
        }
    }

    pub fn league(country: &str, level: u32) -> Self {
        Self::new(
            &format!("{} LEAGUE", country),
            level,
            DOMESTIC_PARTICIPANTS,
            CompetitionKind::League {
                country: country.to_string(),
            },
        )
    }

    pub fn league_cup(country: &str, level: u32) -> Self {
        Self::new(
            &format!("{} LEAGUE CUP", country),
            level,
            DOMESTIC_PARTICIPANTS,
            CompetitionKind::LeagueCup {
                country: country.to_string(),
            },
        )
    }

    pub fn champions_league(level: u32) -> Self {
        Self::new(
            "CHAMPIONS LEAGUE",
            level,
            CONTINENTAL_PARTICIPANTS,
            CompetitionKind::ChampionsLeague,
        )
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn participants(&self) -> &[ClubId] {
        &self.participants
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.capacity
    }

    pub fn add_participant(&mut self, club_id: ClubId) -> Result<()> {
        if self.participants.contains(&club_id) {
            return Err(EngineError::AlreadyParticipating {
                club: club_id.to_string(),
                competition: self.name.clone(),
            }
            .into());
        }

        if self.is_full() {
            return Err(EngineError::CompetitionFull {
                competition: self.name.clone(),
            }
            .into());
        }

        self.participants.push(club_id);
        Ok(())
    }

    /// Withdraw a club; returns false if it was not participating
    pub fn remove_participant(&mut self, club_id: &ClubId) -> bool {
        let before = self.participants.len();
        self.participants.retain(|id| id != club_id);
        self.participants.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_kinds() {
        let league = Competition::league("England", 1);
        assert_eq!(league.name, "ENGLAND LEAGUE LEVEL 1");
        assert_eq!(league.kind.country(), Some("England"));
        assert_eq!(league.capacity(), DOMESTIC_PARTICIPANTS);

        let cup = Competition::league_cup("England", 2);
        assert_eq!(cup.name, "ENGLAND LEAGUE CUP LEVEL 2");

        let continental = Competition::champions_league(3);
        assert_eq!(continental.name, "CHAMPIONS LEAGUE LEVEL 3");
        assert_eq!(continental.kind.country(), None);
        assert_eq!(continental.capacity(), CONTINENTAL_PARTICIPANTS);
    }

    #[test]
    fn test_participant_cap() {
        let mut competition = Competition::new("mini cup", 1, 2, CompetitionKind::ChampionsLeague);
        competition.add_participant(generate_id()).unwrap();
        competition.add_participant(generate_id()).unwrap();

        let err = competition.add_participant(generate_id()).unwrap_err();
        assert_eq!(
            EngineError::from_anyhow(&err),
            Some(&EngineError::CompetitionFull {
                competition: "MINI CUP LEVEL 1".to_string()
            })
        );
        assert_eq!(competition.participants().len(), 2);
    }

    #[test]
    fn test_no_double_entry() {
        let mut competition = Competition::league("Spain", 1);
        let club = generate_id();
        competition.add_participant(club).unwrap();
        assert!(competition.add_participant(club).is_err());

        assert!(competition.remove_participant(&club));
        assert!(!competition.remove_participant(&club));
        competition.add_participant(club).unwrap();
    }
}
