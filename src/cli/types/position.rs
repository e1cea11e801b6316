//! Fantasy football position types and utilities.

use crate::error::RankError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy football positions that carry ranking lists.
///
/// Only the four skill positions are ranked; kickers and defenses in the
/// player directory are never emitted.
///
/// # Examples
///
/// ```rust
/// use ffl_avg_rank::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(qb.to_string(), "QB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    /// Order in which ranking lists are emitted.
    pub const EMIT_ORDER: [Position; 4] = [Position::RB, Position::WR, Position::QB, Position::TE];

    /// Directory/SQL code for this position.
    pub fn code(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }

    /// Whether a raw directory position code is one of the ranked positions.
    ///
    /// Case-sensitive: the directory always reports upper-case codes and
    /// anything else is treated as a non-fantasy position.
    pub fn is_fantasy_code(code: &str) -> bool {
        Self::EMIT_ORDER.iter().any(|p| p.code() == code)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Position {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            _ => Err(RankError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
