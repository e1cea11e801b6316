//! Fantasy Football Average-Rank SQL Generator
//!
//! Turns hand-curated, ordered ranking lists (one per position) into SQL
//! statements that fold each new rank into the running average kept in the
//! `player_average_rankings` table.
//!
//! ## Pipeline
//!
//! - **Directory**: one fetch of the Sleeper NFL player database
//! - **Name index**: full name, "first last" and last name to candidate players
//! - **Matcher**: exact lookup, then a similarity scan (cutoff 0.8), then a
//!   status/position/team tie-break
//! - **Emitter**: per-position truncation, one `UPDATE` per resolved name,
//!   and a list of names that need manual review
//!
//! ## Quick Start
//!
//! ```rust
//! use ffl_avg_rank::{
//!     core::RankingsConfig,
//!     matching::{NameIndex, PlayerMatcher},
//!     sleeper::PlayerDirectory,
//!     sql::emit_rankings,
//! };
//!
//! # fn example() -> ffl_avg_rank::Result<()> {
//! let directory = PlayerDirectory::from_json(
//!     r#"{"999": {"full_name": "Alice Example", "status": "Active", "team": "SEA", "position": "QB"}}"#,
//! )?;
//! let matcher = PlayerMatcher::new(NameIndex::from_directory(directory));
//! let config = RankingsConfig::from_toml_str("[rankings]\nQB = [\"Alice Example\"]")?;
//!
//! let report = emit_rankings(&config, &matcher);
//! assert_eq!(report.statement_count(), 1);
//! assert!(report.to_sql().ends_with("COMMIT;"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FFL_RANKINGS_FILE=data/rankings_2025_preseason.toml
//! export SLEEPER_PLAYERS_URL=https://api.sleeper.com/v1/players/nfl
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod matching;
pub mod sleeper;
pub mod sql;

// Re-export commonly used types
pub use cli::types::{ids::PlayerId, position::Position, time::Season};
pub use error::{RankError, Result};

pub const RANKINGS_FILE_ENV_VAR: &str = "FFL_RANKINGS_FILE";
pub const DIRECTORY_URL_ENV_VAR: &str = "SLEEPER_PLAYERS_URL";
