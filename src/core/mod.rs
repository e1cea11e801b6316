//! Core utilities for the average-rank generator
//!
//! - `cache`: directory snapshot location and file helpers
//! - `config`: the TOML rankings file

pub mod cache;
pub mod config;

pub use cache::{directory_snapshot_path, try_read_to_string, write_string};
pub use config::{RankingsConfig, DEFAULT_POSITION_LIMIT};
