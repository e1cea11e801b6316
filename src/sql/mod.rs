//! SQL generation for the external average-rank table.
//!
//! - `statement`: one `UPDATE` folding a rank into `player_average_rankings`
//! - `emitter`: walks the ranking lists and assembles the transaction text

pub mod emitter;
pub mod statement;

pub use emitter::{emit_rankings, EmitReport, PositionSection, Unmatched};
pub use statement::{quote_literal, AverageRankUpdate, AVERAGE_RANK_TABLE};
