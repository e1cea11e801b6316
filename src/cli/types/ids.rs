//! Identifier types for the player directory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for player directory IDs.
///
/// Sleeper identifies players by opaque strings (`"4046"`, `"DET"` for team
/// defenses), so the wrapper keeps the original text untouched.
///
/// # Examples
///
/// ```rust
/// use ffl_avg_rank::PlayerId;
///
/// let id = PlayerId::new("4046");
/// assert_eq!(id.as_str(), "4046");
/// assert_eq!(id.to_string(), "4046");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
