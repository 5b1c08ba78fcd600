//! Game world state: countries, clubs, managers, free players and competitions
//!
//! Competitions are keyed explicitly: leagues and league cups by country and
//! level, champions leagues by level. Advancing to a new level adds
//! competitions and never replaces existing ones.

use crate::club::{Club, Manager};
use crate::competition::Competition;
use crate::error::{EngineError, Result};
use crate::player::Player;
use crate::types::{ClubId, CountryCode, ManagerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Key of a country-scoped competition
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DomesticKey {
    pub country: CountryCode,
    pub level: u32,
}

impl DomesticKey {
    pub fn new(country: impl Into<CountryCode>, level: u32) -> Self {
        Self {
            country: country.into(),
            level,
        }
    }
}

/// The whole simulated football world
#[derive(Debug, Clone, Default)]
pub struct Game {
    countries: Vec<CountryCode>,
    clubs: Vec<Club>,
    managers: Vec<Manager>,
    players: Vec<Player>,
    leagues: BTreeMap<DomesticKey, Competition>,
    league_cups: BTreeMap<DomesticKey, Competition>,
    champions_leagues: BTreeMap<u32, Competition>,
    season: u32,
}

impl Game {
    pub fn new(countries: Vec<CountryCode>) -> Self {
        Self {
            countries,
            season: 1,
            ..Self::default()
        }
    }

    pub fn countries(&self) -> &[CountryCode] {
        &self.countries
    }

    pub fn season(&self) -> u32 {
        self.season
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn club(&self, club_id: &ClubId) -> Option<&Club> {
        self.clubs.iter().find(|c| &c.id == club_id)
    }

    pub fn club_mut(&mut self, club_id: &ClubId) -> Option<&mut Club> {
        self.clubs.iter_mut().find(|c| &c.id == club_id)
    }

    pub fn add_club(&mut self, club: Club) -> ClubId {
        let id = club.id;
        self.clubs.push(club);
        id
    }

    pub fn managers(&self) -> &[Manager] {
        &self.managers
    }

    pub fn manager(&self, manager_id: &ManagerId) -> Option<&Manager> {
        self.managers.iter().find(|m| &m.id == manager_id)
    }

    /// The manager in charge of a club, if it has one
    pub fn manager_of(&self, club_id: &ClubId) -> Option<&Manager> {
        self.managers.iter().find(|m| m.manages(club_id))
    }

    /// Register a manager for a club in this world
    ///
    /// Each club has at most one manager.
    pub fn add_manager(&mut self, manager: Manager) -> Result<ManagerId> {
        let club = self
            .club(&manager.club)
            .ok_or_else(|| EngineError::ClubNotFound {
                club_id: manager.club.to_string(),
            })?;

        if self.manager_of(&manager.club).is_some() {
            return Err(EngineError::ClubAlreadyManaged {
                club: club.name.clone(),
            }
            .into());
        }

        info!("Manager {} takes charge of {}", manager.name, club.name);
        let id = manager.id;
        self.managers.push(manager);
        Ok(id)
    }

    /// Players not attached to any club
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn leagues(&self) -> &BTreeMap<DomesticKey, Competition> {
        &self.leagues
    }

    pub fn league(&self, country: &str, level: u32) -> Option<&Competition> {
        self.leagues.get(&DomesticKey::new(country, level))
    }

    pub fn league_mut(&mut self, country: &str, level: u32) -> Option<&mut Competition> {
        self.leagues.get_mut(&DomesticKey::new(country, level))
    }

    pub fn league_cups(&self) -> &BTreeMap<DomesticKey, Competition> {
        &self.league_cups
    }

    pub fn league_cup(&self, country: &str, level: u32) -> Option<&Competition> {
        self.league_cups.get(&DomesticKey::new(country, level))
    }

    pub fn league_cup_mut(&mut self, country: &str, level: u32) -> Option<&mut Competition> {
        self.league_cups.get_mut(&DomesticKey::new(country, level))
    }

    pub fn champions_leagues(&self) -> &BTreeMap<u32, Competition> {
        &self.champions_leagues
    }

    pub fn champions_league(&self, level: u32) -> Option<&Competition> {
        self.champions_leagues.get(&level)
    }

    pub fn champions_league_mut(&mut self, level: u32) -> Option<&mut Competition> {
        self.champions_leagues.get_mut(&level)
    }

    /// Highest competition level created so far, 0 when there is none
    pub fn highest_level(&self) -> u32 {
        let domestic = self.leagues.keys().map(|k| k.level).max();
        let continental = self.champions_leagues.keys().next_back().copied();
        domestic.max(continental).unwrap_or(0)
    }

    /// Create the league, league cup and champions league of the next level
    pub fn add_new_level(&mut self) -> u32 {
        let level = self.highest_level() + 1;

        for country in &self.countries {
            self.leagues.insert(
                DomesticKey::new(country.clone(), level),
                Competition::league(country, level),
            );
            self.league_cups.insert(
                DomesticKey::new(country.clone(), level),
                Competition::league_cup(country, level),
            );
        }
        self.champions_leagues
            .insert(level, Competition::champions_league(level));

        info!(
            "Added competition level {} for {} countries",
            level,
            self.countries.len()
        );
        level
    }

    /// Drop retired players from the free player pool
    pub fn remove_retired_players(&mut self) -> usize {
        let (retired, active): (Vec<Player>, Vec<Player>) = std::mem::take(&mut self.players)
            .into_iter()
            .partition(Player::is_retired);
        self.players = active;
        retired.len()
    }

    /// Age every player by a year and retire everyone past the retirement age
    ///
    /// Returns how many players retired across the free pool, rosters and
    /// academies.
    pub fn end_season(&mut self) -> usize {
        for player in self.players.iter_mut() {
            player.age_one_year();
        }
        for club in self.clubs.iter_mut() {
            for player in club.players_mut() {
                player.age_one_year();
            }
        }

        let mut retired = self.remove_retired_players();
        for club in self.clubs.iter_mut() {
            retired += club.remove_players_where(Player::is_retired);
        }

        info!("Season {} ended: {} players retired", self.season, retired);
        self.season += 1;
        retired
    }
}
