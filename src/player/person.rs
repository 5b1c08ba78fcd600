//! The football player record

use crate::error::{EngineError, Result};
use crate::player::position::Position;
use crate::player::stats::StatBlock;
use crate::types::{CountryCode, Money, PlayerId};
use crate::utils::generate_id;
use serde::{Deserialize, Serialize};

/// Age at which a newly generated player joins the game
pub const STARTING_AGE: u32 = 17;

/// Players older than this retire at the end of a season
pub const RETIREMENT_AGE: u32 = 35;

/// A football player
///
/// `position` is the natural position and picks the rating branch. `role` is
/// the slot the manager currently fields the player in. `playable_positions`
/// always contains `position` and only grows through training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub country: CountryCode,
    pub position: Position,
    pub role: Position,
    playable_positions: Vec<Position>,
    pub age: u32,
    pub stats: StatBlock,
    pub market_value: Money,
}

/// Serialized form of a player, checked before it becomes a `Player`
#[derive(Deserialize)]
struct PlayerRecord {
    id: PlayerId,
    name: String,
    country: CountryCode,
    position: Position,
    role: Position,
    playable_positions: Vec<Position>,
    age: u32,
    stats: StatBlock,
    market_value: Money,
}

impl TryFrom<PlayerRecord> for Player {
    type Error = anyhow::Error;

    fn try_from(record: PlayerRecord) -> Result<Self> {
        if !record.playable_positions.contains(&record.position) {
            return Err(EngineError::InvalidPosition {
                code: format!(
                    "{} missing from playable positions of player {}",
                    record.position, record.id
                ),
            }
            .into());
        }
        record.stats.validate()?;

        let mut player = Player {
            id: record.id,
            name: record.name,
            country: record.country,
            position: record.position,
            role: record.role,
            playable_positions: vec![record.position],
            age: record.age,
            stats: record.stats,
            market_value: record.market_value,
        };
        for position in record.playable_positions {
            player.learn_position(position);
        }
        Ok(player)
    }
}

impl Player {
    /// Create a new player fielded in their natural position
    pub fn new(
        name: impl Into<String>,
        position: Position,
        country: impl Into<CountryCode>,
        stats: StatBlock,
        market_value: Money,
    ) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            country: country.into(),
            position,
            role: position,
            playable_positions: vec![position],
            age: STARTING_AGE,
            stats,
            market_value,
        }
    }

    pub fn playable_positions(&self) -> &[Position] {
        &self.playable_positions
    }

    pub fn can_play(&self, position: Position) -> bool {
        self.playable_positions.contains(&position)
    }

    /// Train a new position; returns false if it was already known
    pub fn learn_position(&mut self, position: Position) -> bool {
        if self.can_play(position) {
            return false;
        }
        self.playable_positions.push(position);
        true
    }

    pub fn set_role(&mut self, role: Position) {
        self.role = role;
    }

    /// Whether the current role is one the player is trained for
    pub fn is_in_position(&self) -> bool {
        self.can_play(self.role)
    }

    pub fn age_one_year(&mut self) {
        self.age += 1;
    }

    pub fn is_retired(&self) -> bool {
        self.age > RETIREMENT_AGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn striker() -> Player {
        Player::new(
            "Tomas Varga",
            Position::ST,
            "HUN",
            StatBlock::uniform(BigDecimal::from(70)),
            BigDecimal::from(250_000),
        )
    }

    #[test]
    fn test_new_player_defaults() {
        let player = striker();
        assert_eq!(player.role, Position::ST);
        assert_eq!(player.playable_positions(), &[Position::ST]);
        assert_eq!(player.age, STARTING_AGE);
        assert!(player.is_in_position());
    }

    #[test]
    fn test_learn_position() {
        let mut player = striker();
        assert!(player.learn_position(Position::CF));
        assert!(!player.learn_position(Position::CF));
        assert!(!player.learn_position(Position::ST));
        assert_eq!(player.playable_positions(), &[Position::ST, Position::CF]);
    }

    #[test]
    fn test_role_outside_trained_positions() {
        let mut player = striker();
        player.set_role(Position::GK);
        assert!(!player.is_in_position());

        player.learn_position(Position::GK);
        assert!(player.is_in_position());
    }

    #[test]
    fn test_retirement_age() {
        let mut player = striker();
        player.age = RETIREMENT_AGE;
        assert!(!player.is_retired());

        player.age_one_year();
        assert!(player.is_retired());
    }

    #[test]
    fn test_deserialize_checks_positions() {
        let mut player = striker();
        player.learn_position(Position::CF);
        let json = serde_json::to_value(&player).unwrap();
        let restored: Player = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(restored, player);

        let mut untrained = json.clone();
        untrained["playable_positions"] = serde_json::json!([]);
        assert!(serde_json::from_value::<Player>(untrained).is_err());

        let mut elsewhere = json.clone();
        elsewhere["playable_positions"] = serde_json::json!(["CF", "CF"]);
        assert!(serde_json::from_value::<Player>(elsewhere).is_err());

        // Duplicate entries collapse
        let mut repeated = json;
        repeated["playable_positions"] = serde_json::json!(["ST", "ST", "CF"]);
        let restored: Player = serde_json::from_value(repeated).unwrap();
        assert_eq!(restored.playable_positions(), &[Position::ST, Position::CF]);
    }

    #[test]
    fn test_deserialize_rejects_negative_stats() {
        let mut json = serde_json::to_value(striker()).unwrap();
        json["stats"]["speed"] = serde_json::json!("-1");
        assert!(serde_json::from_value::<Player>(json).is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = striker();
        let mut copy = original.clone();
        copy.learn_position(Position::LW);
        copy.stats.finishing = BigDecimal::from(99);

        assert_eq!(original.playable_positions(), &[Position::ST]);
        assert_eq!(original.stats.finishing, BigDecimal::from(70));
        assert_eq!(copy.id, original.id);
    }
}
