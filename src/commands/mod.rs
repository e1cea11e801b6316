//! Command implementations for the average-rank generator

pub mod generate;
pub mod lookup;


use std::path::PathBuf;

use crate::{
    matching::{NameIndex, PlayerMatcher},
    sleeper::{http::SLEEPER_PLAYERS_URL, load_player_directory},
    Result, DIRECTORY_URL_ENV_VAR, RANKINGS_FILE_ENV_VAR,
};

/// Rankings file used when neither the flag nor the env var is set.
pub const DEFAULT_RANKINGS_FILE: &str = "data/rankings_2025_preseason.toml";

/// SQL file written by `generate` unless `--output` says otherwise.
pub const DEFAULT_OUTPUT_FILE: &str = "average_rankings_upsert.sql";

/// Rankings file: explicit flag, then `FFL_RANKINGS_FILE`, then the shipped
/// [`DEFAULT_RANKINGS_FILE`].
pub fn resolve_rankings_path(rankings: Option<PathBuf>) -> PathBuf {
    rankings
        .or_else(|| std::env::var_os(RANKINGS_FILE_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RANKINGS_FILE))
}

/// Directory endpoint: explicit flag, then `SLEEPER_PLAYERS_URL`, then Sleeper.
pub fn resolve_directory_url(directory_url: Option<String>) -> String {
    directory_url
        .or_else(|| {
            std::env::var(DIRECTORY_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| SLEEPER_PLAYERS_URL.to_string())
}

/// Load the directory and build a matcher over it.
///
/// Progress goes to stdout when `progress` is set; `lookup --json` turns it
/// off to keep its output parseable.
pub async fn load_matcher(directory_url: &str, offline: bool, progress: bool) -> Result<PlayerMatcher> {
    if progress {
        if offline {
            println!("Loading cached Sleeper NFL player database...");
        } else {
            println!("Downloading Sleeper NFL player database...");
        }
    }

    let directory = load_player_directory(directory_url, offline).await?;
    if progress {
        println!("Loaded {} players from Sleeper.", directory.len());
    }

    Ok(PlayerMatcher::new(NameIndex::from_directory(directory)))
}
