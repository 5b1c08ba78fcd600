//! The starting eleven of a club

use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// Number of players in a full starting eleven
pub const STARTING_ELEVEN_SIZE: usize = 11;

/// Ordered selection of roster players for the next match
///
/// Holds ids only; the players themselves stay owned by the club roster.
/// Capacity and goalkeeper rules are enforced by the owning club, which can
/// see the players' roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartingEleven {
    player_ids: Vec<PlayerId>,
}

impl StartingEleven {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_ids(&self) -> &[PlayerId] {
        &self.player_ids
    }

    pub fn len(&self) -> usize {
        self.player_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.player_ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.player_ids.len() >= STARTING_ELEVEN_SIZE
    }

    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.player_ids.contains(player_id)
    }

    pub(crate) fn push(&mut self, player_id: PlayerId) {
        self.player_ids.push(player_id);
    }

    /// Drop a player from the selection; returns false if they were not selected
    pub fn remove(&mut self, player_id: &PlayerId) -> bool {
        let before = self.player_ids.len();
        self.player_ids.retain(|id| id != player_id);
        self.player_ids.len() != before
    }

    /// Keep only the players accepted by the predicate
    pub(crate) fn retain_where(&mut self, keep: impl Fn(&PlayerId) -> bool) {
        self.player_ids = std::mem::take(&mut self.player_ids)
            .into_iter()
            .filter(|id| keep(id))
            .collect();
    }

    pub fn clear(&mut self) {
        self.player_ids.clear();
    }
}
