//! File system helpers for the player directory snapshot.
//!
//! Every successful directory fetch is written to the user's cache directory
//! so that `--offline` runs can reuse the last snapshot.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Root cache folder: ~/.cache/ffl-avg-rank
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("ffl-avg-rank")
}

/// Path: ~/.cache/ffl-avg-rank/sleeper-players-nfl.json
pub fn directory_snapshot_path() -> PathBuf {
    cache_root().join("sleeper-players-nfl.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
