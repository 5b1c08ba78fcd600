//! Youth academy attached to a club

use crate::player::Player;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// Unbounded pool of youth players not yet on the senior roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubAcademy {
    players: Vec<Player>,
}

impl ClubAcademy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Take a player out of the academy
    pub fn remove_player(&mut self, player_id: &PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| &p.id == player_id)?;
        Some(self.players.remove(index))
    }

    pub(crate) fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Drop every player matching the predicate, returning them
    pub(crate) fn remove_where(&mut self, remove: impl Fn(&Player) -> bool) -> Vec<Player> {
        let (removed, kept): (Vec<Player>, Vec<Player>) = std::mem::take(&mut self.players)
            .into_iter()
            .partition(|p| remove(p));
        self.players = kept;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Position, StatBlock};
    use bigdecimal::BigDecimal;

    fn youth(name: &str, age: u32) -> Player {
        let mut player = Player::new(
            name,
            Position::CMF,
            "ESP",
            StatBlock::uniform(BigDecimal::from(45)),
            BigDecimal::from(1_000),
        );
        player.age = age;
        player
    }

    #[test]
    fn test_add_and_remove() {
        let mut academy = ClubAcademy::new();
        let player = youth("Iker Sanz", 16);
        let id = player.id;

        academy.add_player(player);
        assert_eq!(academy.len(), 1);

        let removed = academy.remove_player(&id).unwrap();
        assert_eq!(removed.name, "Iker Sanz");
        assert!(academy.is_empty());
        assert!(academy.remove_player(&id).is_none());
    }

    #[test]
    fn test_remove_where_handles_consecutive_matches() {
        let mut academy = ClubAcademy::new();
        academy.add_player(youth("A", 36));
        academy.add_player(youth("B", 37));
        academy.add_player(youth("C", 18));
        academy.add_player(youth("D", 40));

        let removed = academy.remove_where(|p| p.is_retired());
        assert_eq!(removed.len(), 3);
        assert_eq!(academy.len(), 1);
        assert_eq!(academy.players()[0].name, "C");
    }
}
