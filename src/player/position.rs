//! Player positions and their positional groups

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Positional group a position belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionType {
    GK,
    DF,
    MF,
    FW,
}

impl std::fmt::Display for PositionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionType::GK => write!(f, "GK"),
            PositionType::DF => write!(f, "DF"),
            PositionType::MF => write!(f, "MF"),
            PositionType::FW => write!(f, "FW"),
        }
    }
}

/// One of the fifteen position codes a player can be trained in or fielded at
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Position {
    #[default]
    GK,
    CB,
    RB,
    LB,
    DMF,
    RWB,
    LWB,
    CMF,
    RMF,
    LMF,
    AMF,
    RW,
    LW,
    ST,
    CF,
}

impl Position {
    /// Every position, in canonical order
    pub const ALL: [Position; 15] = [
        Position::GK,
        Position::CB,
        Position::RB,
        Position::LB,
        Position::DMF,
        Position::RWB,
        Position::LWB,
        Position::CMF,
        Position::RMF,
        Position::LMF,
        Position::AMF,
        Position::RW,
        Position::LW,
        Position::ST,
        Position::CF,
    ];

    /// The position code as written on a team sheet
    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::CB => "CB",
            Position::RB => "RB",
            Position::LB => "LB",
            Position::DMF => "DMF",
            Position::RWB => "RWB",
            Position::LWB => "LWB",
            Position::CMF => "CMF",
            Position::RMF => "RMF",
            Position::LMF => "LMF",
            Position::AMF => "AMF",
            Position::RW => "RW",
            Position::LW => "LW",
            Position::ST => "ST",
            Position::CF => "CF",
        }
    }

    pub fn position_type(&self) -> PositionType {
        match self {
            Position::GK => PositionType::GK,
            Position::CB | Position::RB | Position::LB => PositionType::DF,
            Position::DMF
            | Position::RWB
            | Position::LWB
            | Position::CMF
            | Position::RMF
            | Position::LMF
            | Position::AMF => PositionType::MF,
            Position::RW | Position::LW | Position::ST | Position::CF => PositionType::FW,
        }
    }

    /// Positions belonging to a positional group
    pub fn of_type(position_type: PositionType) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|p| p.position_type() == position_type)
            .collect()
    }

    /// Parse a position code, falling back to GK for anything unknown
    ///
    /// The fallback masks bad input, so it is always logged.
    pub fn from_code_or_default(code: &str) -> Position {
        match code.parse() {
            Ok(position) => position,
            Err(e) => {
                warn!("{}; falling back to {}", e, Position::GK);
                Position::GK
            }
        }
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.code() == code)
            .ok_or_else(|| EngineError::InvalidPosition {
                code: code.to_string(),
            })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_partition() {
        assert_eq!(Position::of_type(PositionType::GK), vec![Position::GK]);
        assert_eq!(Position::of_type(PositionType::DF).len(), 3);
        assert_eq!(Position::of_type(PositionType::MF).len(), 7);
        assert_eq!(Position::of_type(PositionType::FW).len(), 4);

        // Every code belongs to exactly one group
        let total: usize = [
            PositionType::GK,
            PositionType::DF,
            PositionType::MF,
            PositionType::FW,
        ]
        .iter()
        .map(|t| Position::of_type(*t).len())
        .sum();
        assert_eq!(total, Position::ALL.len());
    }

    #[test]
    fn test_position_types() {
        assert_eq!(Position::RWB.position_type(), PositionType::MF);
        assert_eq!(Position::LB.position_type(), PositionType::DF);
        assert_eq!(Position::CF.position_type(), PositionType::FW);
        assert_eq!(Position::AMF.position_type(), PositionType::MF);
    }

    #[test]
    fn test_parse_codes() {
        for position in Position::ALL {
            assert_eq!(position.code().parse::<Position>().unwrap(), position);
        }
        assert_eq!(" ST ".parse::<Position>().unwrap(), Position::ST);
    }

    #[test]
    fn test_invalid_code() {
        let err = "SW".parse::<Position>().unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidPosition {
                code: "SW".to_string()
            }
        );

        // Codes are case-sensitive
        assert!("st".parse::<Position>().is_err());
    }

    #[test]
    fn test_lenient_parse_falls_back_to_goalkeeper() {
        assert_eq!(Position::from_code_or_default("SW"), Position::GK);
        assert_eq!(Position::from_code_or_default(""), Position::GK);
        assert_eq!(Position::from_code_or_default("LW"), Position::LW);
    }
}
