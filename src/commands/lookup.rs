//! `lookup`: check how individual names resolve before generating SQL.

use serde::Serialize;

use crate::{
    matching::{MatchKind, PlayerMatcher},
    sleeper::types::PlayerRecord,
    Result,
};

use super::{load_matcher, resolve_directory_url};

/// Result of resolving one name, shaped for both text and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub query: String,
    pub player: Option<PlayerRecord>,
    /// `"exact"` or `"fuzzy"`; absent when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl LookupResult {
    pub fn line(&self) -> String {
        let Some(player) = &self.player else {
            return format!("{} -> not found", self.query);
        };

        let how = match (&self.matched_key, self.score) {
            (Some(key), Some(score)) => format!("fuzzy \"{key}\" {score:.3}"),
            _ => "exact".to_string(),
        };

        format!(
            "{} -> {} {} ({}, {}, {}) [{}]",
            self.query,
            player.id,
            player.display_name(),
            player.team.as_deref().unwrap_or("FA"),
            player.position.as_deref().unwrap_or("-"),
            player.status.as_deref().unwrap_or("-"),
            how
        )
    }
}

/// Resolve every name with the same matcher `generate` uses.
pub fn lookup_names<S: AsRef<str>>(matcher: &PlayerMatcher, names: &[S]) -> Vec<LookupResult> {
    names
        .iter()
        .map(|name| {
            let query = name.as_ref().to_string();
            match matcher.resolve(&query) {
                None => LookupResult {
                    query,
                    player: None,
                    match_kind: None,
                    matched_key: None,
                    score: None,
                },
                Some(resolved) => {
                    let (match_kind, matched_key, score) = match resolved.kind {
                        MatchKind::Exact => ("exact", None, None),
                        MatchKind::Fuzzy { key, score } => ("fuzzy", Some(key), Some(score)),
                    };
                    LookupResult {
                        query,
                        player: Some(resolved.record.clone()),
                        match_kind: Some(match_kind),
                        matched_key,
                        score,
                    }
                }
            }
        })
        .collect()
}

/// Handle the lookup command
pub async fn handle_lookup(
    names: Vec<String>,
    directory_url: Option<String>,
    offline: bool,
    as_json: bool,
) -> Result<()> {
    let url = resolve_directory_url(directory_url);
    let matcher = load_matcher(&url, offline, !as_json).await?;
    let results = lookup_names(&matcher, &names);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{}", result.line());
        }
    }

    Ok(())
}
