//! Name resolution against the player directory.
//!
//! - `index`: normalized name variants to candidate records
//! - `similarity`: sequence-similarity ratio used for near matches
//! - `matcher`: exact-then-fuzzy lookup with the candidate tie-break

pub mod index;
pub mod matcher;
pub mod similarity;

pub use index::{normalize_name, NameIndex};
pub use matcher::{CandidateRank, MatchKind, PlayerMatcher, PlayerResolver, Resolved, DEFAULT_CUTOFF};
