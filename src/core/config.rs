//! Rankings file: the ordered name lists plus the parameters of one
//! contribution (season, ranking type, per-position limits).
//!
//! ```toml
//! season = 2025
//! ranking_type = "preseason"
//!
//! [limits]
//! QB = 30
//!
//! [rankings]
//! QB = ["Josh Allen", "Lamar Jackson"]
//! ```

use std::{collections::BTreeMap, path::Path};

use serde::Deserialize;

use crate::{cli::types::position::Position, error::RankError, Result, Season};

/// Cutoff applied to any position missing from `[limits]`.
pub const DEFAULT_POSITION_LIMIT: usize = 50;

/// Ranking type written when the file does not name one.
pub const DEFAULT_RANKING_TYPE: &str = "preseason";

/// Display limits used when the file has no `[limits]` table.
///
/// `OVR` and `FLX` have no ranking list of their own; they are kept so a
/// limits table copied from the ranking site round-trips unchanged.
pub fn default_limits() -> BTreeMap<String, usize> {
    [
        ("QB", 30),
        ("RB", 60),
        ("WR", 60),
        ("TE", 30),
        ("OVR", 150),
        ("FLX", 120),
    ]
    .into_iter()
    .map(|(code, limit)| (code.to_string(), limit))
    .collect()
}

fn default_ranking_type() -> String {
    DEFAULT_RANKING_TYPE.to_string()
}

/// Parsed rankings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawRankingsConfig")]
pub struct RankingsConfig {
    pub season: Season,
    pub ranking_type: String,
    pub limits: BTreeMap<String, usize>,
    pub rankings: BTreeMap<Position, Vec<String>>,
}

/// On-disk shape; ranking keys are validated into [`Position`]s afterwards.
#[derive(Debug, Deserialize)]
struct RawRankingsConfig {
    #[serde(default)]
    season: Season,
    #[serde(default = "default_ranking_type")]
    ranking_type: String,
    #[serde(default = "default_limits")]
    limits: BTreeMap<String, usize>,
    #[serde(default)]
    rankings: BTreeMap<String, Vec<String>>,
}

impl TryFrom<RawRankingsConfig> for RankingsConfig {
    type Error = RankError;

    fn try_from(raw: RawRankingsConfig) -> Result<Self> {
        let mut rankings = BTreeMap::new();
        for (code, names) in raw.rankings {
            let position = code.parse::<Position>()?;
            if rankings.insert(position, names).is_some() {
                return Err(RankError::DuplicatePosition {
                    position: position.to_string(),
                });
            }
        }

        let limits = raw
            .limits
            .into_iter()
            .map(|(code, limit)| (code.trim().to_uppercase(), limit))
            .collect();

        Ok(Self {
            season: raw.season,
            ranking_type: raw.ranking_type,
            limits,
            rankings,
        })
    }
}

impl Default for RankingsConfig {
    fn default() -> Self {
        Self {
            season: Season::default(),
            ranking_type: default_ranking_type(),
            limits: default_limits(),
            rankings: BTreeMap::new(),
        }
    }
}

impl RankingsConfig {
    /// Read and parse a rankings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| RankError::RankingsFile {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Display limit for a position, falling back to [`DEFAULT_POSITION_LIMIT`].
    pub fn limit_for(&self, position: Position) -> usize {
        self.limits
            .get(position.code())
            .copied()
            .unwrap_or(DEFAULT_POSITION_LIMIT)
    }

    /// Ordered names for a position; empty when the file has no list for it.
    pub fn ranking_list(&self, position: Position) -> &[String] {
        self.rankings
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ranking list already cut down to the position's limit.
    pub fn truncated_list(&self, position: Position) -> &[String] {
        let list = self.ranking_list(position);
        &list[..list.len().min(self.limit_for(position))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_only_rankings_given() {
        let config = RankingsConfig::from_toml_str(
            r#"
            [rankings]
            QB = ["Josh Allen", "Lamar Jackson"]
            "#,
        )
        .unwrap();

        assert_eq!(config.season, Season::new(2025));
        assert_eq!(config.ranking_type, "preseason");
        assert_eq!(config.limit_for(Position::QB), 30);
        assert_eq!(config.limit_for(Position::RB), 60);
        assert_eq!(config.limits.get("OVR"), Some(&150));
        assert_eq!(
            config.ranking_list(Position::QB),
            &["Josh Allen".to_string(), "Lamar Jackson".to_string()]
        );
        assert!(config.ranking_list(Position::TE).is_empty());
    }

    #[test]
    fn test_explicit_limits_replace_defaults_and_missing_fall_back_to_50() {
        let config = RankingsConfig::from_toml_str(
            r#"
            season = 2024
            ranking_type = "weekly"

            [limits]
            qb = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.season.as_u16(), 2024);
        assert_eq!(config.ranking_type, "weekly");
        assert_eq!(config.limit_for(Position::QB), 2);
        assert_eq!(config.limit_for(Position::WR), DEFAULT_POSITION_LIMIT);
    }

    #[test]
    fn test_truncated_list_respects_limit() {
        let config = RankingsConfig::from_toml_str(
            r#"
            [limits]
            RB = 2

            [rankings]
            RB = ["A", "B", "C", "D", "E"]
            WR = ["X"]
            "#,
        )
        .unwrap();

        assert_eq!(config.truncated_list(Position::RB), &["A", "B"]);
        assert_eq!(config.truncated_list(Position::WR), &["X"]);
        assert!(config.truncated_list(Position::TE).is_empty());
    }

    #[test]
    fn test_unknown_position_is_rejected() {
        let err = RankingsConfig::from_toml_str(
            r#"
            [rankings]
            K = ["Justin Tucker"]
            "#,
        )
        .unwrap_err();

        match err {
            RankError::Config(e) => assert!(e.to_string().contains("Invalid position")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[rankings]\nTE = [\"Brock Bowers\"]").unwrap();

        let config = RankingsConfig::load(file.path()).unwrap();
        assert_eq!(config.ranking_list(Position::TE), &["Brock Bowers"]);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        match RankingsConfig::load(&missing) {
            Err(RankError::RankingsFile { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected RankingsFile error, got {other:?}"),
        }
    }

    #[test]
    fn test_same_position_in_two_cases_is_rejected() {
        let err = RankingsConfig::from_toml_str(
            r#"
            [rankings]
            QB = ["Josh Allen"]
            qb = ["Lamar Jackson"]
            "#,
        )
        .unwrap_err();

        match err {
            RankError::Config(e) => {
                assert!(e.to_string().contains("Ranking list for QB given more than once"))
            }
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = RankingsConfig::default();
        assert_eq!(config.limits, default_limits());
        assert!(config.rankings.is_empty());
    }
}
