//! Sleeper player directory: HTTP fetch, record types and snapshot cache.

pub mod directory;
pub mod http;
pub mod types;

pub use directory::{load_player_directory, load_player_directory_at};
pub use types::{PlayerDirectory, PlayerRecord};
