//! Error types for the average-rank SQL generator

use std::path::PathBuf;

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RankError>;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse rankings file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Cannot read rankings file {}: {source}", .path.display())]
    RankingsFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Ranking list for {position} given more than once")]
    DuplicatePosition { position: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("No cached player directory at {}; run once without --offline", .path.display())]
    MissingSnapshot { path: PathBuf },
}
