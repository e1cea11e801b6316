use serde::Serialize;
use std::fmt;

use crate::{cli::types::position::Position, PlayerId, Season};

/// Table holding the running average per (player, position, season, type, week).
pub const AVERAGE_RANK_TABLE: &str = "player_average_rankings";

/// Quote a value as a SQL string literal, doubling embedded single quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// One rank contribution for one player.
///
/// Applied externally as `average_rank = (average_rank + rank) / 2.0`, which
/// blends the previous value with the new observation rather than keeping a
/// true running mean. Existing tables depend on that blend, so it stays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AverageRankUpdate {
    pub player_id: PlayerId,
    pub position: Position,
    pub season: Season,
    pub ranking_type: String,
    /// 1-based index within the truncated ranking list
    pub rank: usize,
}

impl fmt::Display for AverageRankUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UPDATE {AVERAGE_RANK_TABLE} SET average_rank = (average_rank + {}) / 2.0, \
             total_rankings = total_rankings + 1, last_updated = NOW() \
             WHERE player_id = {} AND position = {} AND season = {} AND type = {} AND week IS NULL;",
            self.rank,
            quote_literal(self.player_id.as_str()),
            quote_literal(self.position.code()),
            self.season,
            quote_literal(&self.ranking_type),
        )
    }
}
