//! The person running a club

use crate::types::{ClubId, ManagerId};
use crate::utils::generate_id;
use serde::{Deserialize, Serialize};

/// A football manager in charge of one club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub id: ManagerId,
    pub name: String,
    pub club: ClubId,
}

impl Manager {
    pub fn new(name: impl Into<String>, club: ClubId) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            club,
        }
    }

    pub fn manages(&self, club_id: &ClubId) -> bool {
        &self.club == club_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_serde() {
        let club = generate_id();
        let manager = Manager::new("Alex Ferris", club);
        assert!(manager.manages(&club));
        assert!(!manager.manages(&generate_id()));

        let json = serde_json::to_string(&manager).unwrap();
        let restored: Manager = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, manager);
    }
}
