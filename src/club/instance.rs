//! Club instance: roster, academy, starting eleven and finances

use crate::club::academy::ClubAcademy;
use crate::club::lineup::{StartingEleven, STARTING_ELEVEN_SIZE};
use crate::club::stadium::Stadium;
use crate::error::{EngineError, Result};
use crate::player::{Player, Position, PositionType};
use crate::rating::RatingCalculator;
use crate::types::{ClubId, Money, PlayerId, Rating};
use crate::utils::{decimal, generate_id};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Smallest roster a club may shrink to by releasing players
pub const MIN_ROSTER_SIZE: usize = 16;

/// Largest roster a club may hold
pub const MAX_ROSTER_SIZE: usize = 32;

/// Players picked per positional group by automatic selection (4-4-2)
const FORMATION: [(PositionType, usize); 4] = [
    (PositionType::GK, 1),
    (PositionType::DF, 4),
    (PositionType::MF, 4),
    (PositionType::FW, 2),
];

/// A football club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClubRecord")]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub level: u32,
    roster: Vec<Player>,
    pub academy: ClubAcademy,
    starting_eleven: StartingEleven,
    pub stadium: Stadium,
    pub budget: Money,
    pub home_ticket_price: Money,
}

/// Serialized form of a club; roster and lineup are replayed through the
/// usual signing and selection rules
#[derive(Deserialize)]
struct ClubRecord {
    id: ClubId,
    name: String,
    level: u32,
    roster: Vec<Player>,
    academy: ClubAcademy,
    starting_eleven: StartingEleven,
    stadium: Stadium,
    budget: Money,
    home_ticket_price: Money,
}

impl TryFrom<ClubRecord> for Club {
    type Error = anyhow::Error;

    fn try_from(record: ClubRecord) -> Result<Self> {
        let mut club = Club {
            id: record.id,
            name: record.name,
            level: record.level,
            roster: Vec::with_capacity(record.roster.len()),
            academy: record.academy,
            starting_eleven: StartingEleven::new(),
            stadium: record.stadium,
            budget: record.budget,
            home_ticket_price: record.home_ticket_price,
        };

        for player in record.roster {
            club.add_player(player)?;
        }
        for player_id in record.starting_eleven.player_ids() {
            club.select_player(player_id)?;
        }
        Ok(club)
    }
}

impl Club {
    /// Create a new level 1 club with the default budget and ticket price
    pub fn new(name: impl Into<String>, stadium: Stadium) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            level: 1,
            roster: Vec::new(),
            academy: ClubAcademy::new(),
            starting_eleven: StartingEleven::new(),
            stadium,
            budget: decimal(1_000_000, 0),
            home_ticket_price: decimal(15, 1),
        }
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| &p.id == player_id)
    }

    pub(crate) fn player_mut(&mut self, player_id: &PlayerId) -> Option<&mut Player> {
        self.roster.iter_mut().find(|p| &p.id == player_id)
    }

    /// Sign a player onto the senior roster
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.roster.len() >= MAX_ROSTER_SIZE {
            return Err(EngineError::RosterFull {
                club: self.name.clone(),
            }
            .into());
        }

        self.roster.push(player);
        Ok(())
    }

    /// Release a player from the senior roster, dropping them from the
    /// starting eleven as well
    pub fn remove_player(&mut self, player_id: &PlayerId) -> Result<Player> {
        let index = self
            .roster
            .iter()
            .position(|p| &p.id == player_id)
            .ok_or_else(|| EngineError::PlayerNotFound {
                player_id: player_id.to_string(),
            })?;

        if self.roster.len() <= MIN_ROSTER_SIZE {
            return Err(EngineError::RosterMinimum {
                club: self.name.clone(),
            }
            .into());
        }

        self.starting_eleven.remove(player_id);
        Ok(self.roster.remove(index))
    }

    /// Move a youth player from the academy onto the senior roster
    pub fn promote_from_academy(&mut self, player_id: &PlayerId) -> Result<()> {
        if self.roster.len() >= MAX_ROSTER_SIZE {
            return Err(EngineError::RosterFull {
                club: self.name.clone(),
            }
            .into());
        }

        let player =
            self.academy
                .remove_player(player_id)
                .ok_or_else(|| EngineError::PlayerNotFound {
                    player_id: player_id.to_string(),
                })?;
        self.roster.push(player);
        Ok(())
    }

    pub fn starting_eleven(&self) -> &StartingEleven {
        &self.starting_eleven
    }

    /// Resolve the starting eleven against the roster
    pub fn starting_players(&self) -> Result<Vec<&Player>> {
        self.starting_eleven
            .player_ids()
            .iter()
            .map(|id| {
                self.player(id).ok_or_else(|| {
                    EngineError::PlayerNotFound {
                        player_id: id.to_string(),
                    }
                    .into()
                })
            })
            .collect()
    }

    /// Whether a player currently fielded as goalkeeper is selected
    pub fn goalkeeper_selected(&self) -> bool {
        self.starting_eleven
            .player_ids()
            .iter()
            .filter_map(|id| self.player(id))
            .any(|p| p.role == Position::GK)
    }

    /// Add a roster player to the starting eleven in their current role
    pub fn select_player(&mut self, player_id: &PlayerId) -> Result<()> {
        let player = self
            .player(player_id)
            .ok_or_else(|| EngineError::PlayerNotFound {
                player_id: player_id.to_string(),
            })?;

        if self.starting_eleven.is_full() {
            return Err(EngineError::LineupFull {
                club: self.name.clone(),
            }
            .into());
        }

        if self.starting_eleven.contains(player_id) {
            return Err(EngineError::DuplicateSelection {
                player_id: player_id.to_string(),
            }
            .into());
        }

        if player.role == Position::GK && self.goalkeeper_selected() {
            return Err(EngineError::GoalkeeperTaken {
                club: self.name.clone(),
            }
            .into());
        }

        self.starting_eleven.push(*player_id);
        Ok(())
    }

    /// Drop a player from the starting eleven; returns false if they were not selected
    pub fn deselect_player(&mut self, player_id: &PlayerId) -> bool {
        self.starting_eleven.remove(player_id)
    }

    /// Field a roster player in a new role
    ///
    /// A selected player can only move into goal while no other selected
    /// player holds the GK role.
    pub fn set_role(&mut self, player_id: &PlayerId, role: Position) -> Result<()> {
        if self.player(player_id).is_none() {
            return Err(EngineError::PlayerNotFound {
                player_id: player_id.to_string(),
            }
            .into());
        }

        if role == Position::GK && self.starting_eleven.contains(player_id) {
            let other_keeper = self
                .starting_eleven
                .player_ids()
                .iter()
                .filter(|id| *id != player_id)
                .filter_map(|id| self.player(id))
                .any(|p| p.role == Position::GK);
            if other_keeper {
                return Err(EngineError::GoalkeeperTaken {
                    club: self.name.clone(),
                }
                .into());
            }
        }

        if let Some(player) = self.player_mut(player_id) {
            player.set_role(role);
        }
        Ok(())
    }

    pub fn clear_starting_eleven(&mut self) {
        self.starting_eleven.clear();
    }

    /// Pick a 4-4-2 from the roster by rating in each player's natural position
    ///
    /// Groups without enough players are topped up with the best remaining
    /// outfield players. Every selected player's role is reset to their
    /// natural position.
    pub fn auto_select_starting_eleven(&mut self, calculator: &dyn RatingCalculator) -> Result<()> {
        if self.roster.is_empty() {
            return Err(EngineError::EmptyLineup {
                club: self.name.clone(),
            }
            .into());
        }

        let mut ranked: Vec<(Rating, usize)> = self
            .roster
            .iter()
            .enumerate()
            .map(|(index, player)| (calculator.base_rating(player), index))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        let mut chosen: Vec<usize> = Vec::with_capacity(STARTING_ELEVEN_SIZE);
        for (group, quota) in FORMATION {
            chosen.extend(
                ranked
                    .iter()
                    .filter(|(_, index)| self.roster[*index].position.position_type() == group)
                    .take(quota)
                    .map(|(_, index)| *index),
            );
        }

        let shortfall = STARTING_ELEVEN_SIZE.saturating_sub(chosen.len());
        let fillers: Vec<usize> = ranked
            .iter()
            .map(|(_, index)| *index)
            .filter(|index| !chosen.contains(index))
            .filter(|index| self.roster[*index].position.position_type() != PositionType::GK)
            .take(shortfall)
            .collect();
        chosen.extend(fillers);

        self.starting_eleven.clear();
        for index in chosen {
            let player = &mut self.roster[index];
            player.set_role(player.position);
            self.starting_eleven.push(player.id);
        }

        debug!(
            "Auto-selected {} players for {}",
            self.starting_eleven.len(),
            self.name
        );
        Ok(())
    }

    pub(crate) fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.roster.iter_mut().chain(self.academy.players_mut())
    }

    /// Drop every roster and academy player matching the predicate,
    /// returning how many left
    ///
    /// Bypasses the roster minimum; it is used for retirement, not releases.
    pub(crate) fn remove_players_where(&mut self, remove: impl Fn(&Player) -> bool) -> usize {
        let (removed, kept): (Vec<Player>, Vec<Player>) = std::mem::take(&mut self.roster)
            .into_iter()
            .partition(|p| remove(p));
        self.roster = kept;

        let roster = &self.roster;
        self.starting_eleven
            .retain_where(|id| roster.iter().any(|p| &p.id == id));

        removed.len() + self.academy.remove_where(&remove).len()
    }
}
