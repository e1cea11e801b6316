use tracing::debug;

use super::{
    index::{normalize_name, NameIndex},
    similarity::best_close_match,
};
use crate::sleeper::types::PlayerRecord;


/// Minimum similarity ratio for a near match.
pub const DEFAULT_CUTOFF: f64 = 0.8;

/// Preference key for ambiguous candidates, compared field by field in
/// declaration order. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CandidateRank {
    pub active: bool,
    pub fantasy_position: bool,
    pub has_team: bool,
}

impl CandidateRank {
    pub fn of(record: &PlayerRecord) -> Self {
        Self {
            active: record.is_active(),
            fantasy_position: record.has_fantasy_position(),
            has_team: record.has_team(),
        }
    }
}

/// Pick the best-ranked candidate; the earliest wins among equals.
pub fn select_candidate<'a, I>(candidates: I) -> Option<&'a PlayerRecord>
where
    I: IntoIterator<Item = &'a PlayerRecord>,
{
    let mut best: Option<(CandidateRank, &'a PlayerRecord)> = None;
    for candidate in candidates {
        let rank = CandidateRank::of(candidate);
        if best.map_or(true, |(best_rank, _)| rank > best_rank) {
            best = Some((rank, candidate));
        }
    }
    best.map(|(_, record)| record)
}

/// How a name was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchKind {
    Exact,
    Fuzzy { key: String, score: f64 },
}

/// A resolved name.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    pub record: &'a PlayerRecord,
    pub kind: MatchKind,
}

/// Anything that can turn a free-text name into a directory record.
pub trait PlayerResolver {
    fn resolve_player(&self, name: &str) -> Option<&PlayerRecord>;
}

/// Exact-then-fuzzy name matcher over a [`NameIndex`].
#[derive(Debug)]
pub struct PlayerMatcher {
    index: NameIndex,
    cutoff: f64,
}

impl PlayerMatcher {
    pub fn new(index: NameIndex) -> Self {
        Self::with_cutoff(index, DEFAULT_CUTOFF)
    }

    pub fn with_cutoff(index: NameIndex, cutoff: f64) -> Self {
        Self { index, cutoff }
    }

    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Resolve a name to one record, or `None` when nothing is close enough.
    ///
    /// An exact key always wins; the similarity scan over every key only runs
    /// when the normalized name is not a key itself.
    pub fn resolve(&self, name: &str) -> Option<Resolved<'_>> {
        let key = normalize_name(name);

        if let Some(candidates) = self.index.get(&key) {
            return select_candidate(candidates).map(|record| Resolved {
                record,
                kind: MatchKind::Exact,
            });
        }

        let (close, score) = best_close_match(&key, self.index.keys(), self.cutoff)?;
        let record = select_candidate(self.index.get(close)?)?;
        debug!(
            query = name,
            matched = close,
            score,
            player_id = %record.id,
            "fuzzy name match"
        );

        Some(Resolved {
            record,
            kind: MatchKind::Fuzzy {
                key: close.to_string(),
                score,
            },
        })
    }
}

impl PlayerResolver for PlayerMatcher {
    fn resolve_player(&self, name: &str) -> Option<&PlayerRecord> {
        self.resolve(name).map(|resolved| resolved.record)
    }
}
