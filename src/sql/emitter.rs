use serde::Serialize;
use tracing::{debug, warn};

use super::statement::AverageRankUpdate;
use crate::{
    cli::types::position::Position, core::config::RankingsConfig, matching::PlayerResolver,
    Season,
};

#[cfg(test)]
mod tests;

/// Statements generated for one position, in rank order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSection {
    pub position: Position,
    pub statements: Vec<AverageRankUpdate>,
}

/// A ranked name that did not resolve to any directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unmatched {
    pub position: Position,
    pub name: String,
}

/// Everything produced by one pass over the ranking lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmitReport {
    pub season: Season,
    pub ranking_type: String,
    pub sections: Vec<PositionSection>,
    pub unmatched: Vec<Unmatched>,
}

impl EmitReport {
    pub fn header_comment(&self) -> String {
        format!(
            "-- SQL to add new rankings as contribution to existing average rankings for {} {}",
            self.season, self.ranking_type
        )
    }

    /// Render the report as one transaction.
    ///
    /// Starts with the header comment and `BEGIN;`, ends with `COMMIT;`
    /// whether or not any statement was generated. No trailing newline.
    pub fn to_sql(&self) -> String {
        let mut lines = vec![self.header_comment(), "BEGIN;".to_string(), String::new()];

        for section in &self.sections {
            lines.push(format!(
                "-- {} average rankings (adding new contribution)",
                section.position
            ));
            lines.extend(section.statements.iter().map(ToString::to_string));
            lines.push(String::new());
        }

        lines.push("COMMIT;".to_string());
        lines.join("\n")
    }

    pub fn statements(&self) -> impl Iterator<Item = &AverageRankUpdate> {
        self.sections.iter().flat_map(|s| s.statements.iter())
    }

    pub fn statement_count(&self) -> usize {
        self.sections.iter().map(|s| s.statements.len()).sum()
    }

    pub fn is_fully_matched(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Walk every position in [`Position::EMIT_ORDER`], truncate its list to the
/// configured limit, and resolve each remaining name.
///
/// Names past the limit are never handed to the resolver. Each resolved name
/// becomes one [`AverageRankUpdate`] whose rank is its 1-based index in the
/// truncated list; unresolved names are collected, never fatal.
pub fn emit_rankings<R>(config: &RankingsConfig, resolver: &R) -> EmitReport
where
    R: PlayerResolver + ?Sized,
{
    let mut sections = Vec::with_capacity(Position::EMIT_ORDER.len());
    let mut unmatched = Vec::new();

    for position in Position::EMIT_ORDER {
        let names = config.truncated_list(position);
        debug!(
            %position,
            limit = config.limit_for(position),
            listed = config.ranking_list(position).len(),
            kept = names.len(),
            "processing ranking list"
        );

        let mut statements = Vec::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            match resolver.resolve_player(name) {
                Some(record) => statements.push(AverageRankUpdate {
                    player_id: record.id.clone(),
                    position,
                    season: config.season,
                    ranking_type: config.ranking_type.clone(),
                    rank: idx + 1,
                }),
                None => {
                    warn!(%position, name = name.as_str(), "no directory match");
                    unmatched.push(Unmatched {
                        position,
                        name: name.clone(),
                    });
                }
            }
        }

        sections.push(PositionSection {
            position,
            statements,
        });
    }

    EmitReport {
        season: config.season,
        ranking_type: config.ranking_type.clone(),
        sections,
        unmatched,
    }
}
