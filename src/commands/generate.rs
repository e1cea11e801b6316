//! `generate`: ranking lists in, average-rank SQL out.

use std::path::{Path, PathBuf};

use crate::{
    core::{write_string, RankingsConfig},
    matching::PlayerResolver,
    sql::{emit_rankings, EmitReport},
    Result,
};

use super::{load_matcher, resolve_directory_url, resolve_rankings_path};

/// Parameters for the generate command
#[derive(Debug)]
pub struct GenerateParams {
    pub rankings: Option<PathBuf>,
    pub output: PathBuf,
    pub directory_url: Option<String>,
    pub offline: bool,
}

/// Handle the generate command
///
/// The rankings file is read before the directory fetch so a typo in it
/// fails fast, and nothing is written unless the fetch succeeded.
pub async fn handle_generate(params: GenerateParams) -> Result<()> {
    let rankings_path = resolve_rankings_path(params.rankings);
    let config = RankingsConfig::load(&rankings_path)?;

    let url = resolve_directory_url(params.directory_url);
    let matcher = load_matcher(&url, params.offline, true).await?;

    let report = write_rankings_sql(&config, &matcher, &params.output)?;

    println!("\nSQL written to {}", params.output.display());
    print!("{}", unmatched_summary(&report));

    Ok(())
}

/// Emit the statements for `config` and write the transaction to `output`.
pub fn write_rankings_sql<R>(config: &RankingsConfig, resolver: &R, output: &Path) -> Result<EmitReport>
where
    R: PlayerResolver + ?Sized,
{
    let report = emit_rankings(config, resolver);
    write_string(output, &report.to_sql())?;
    Ok(report)
}

/// Console text listing unmatched names for manual review.
pub fn unmatched_summary(report: &EmitReport) -> String {
    if report.is_fully_matched() {
        return "\nAll players matched successfully!\n".to_string();
    }

    let mut out = String::from("\nUnmatched players:\n");
    for entry in &report.unmatched {
        out.push_str(&format!("  [{}] {}\n", entry.position, entry.name));
    }
    out.push_str("\nPlease review these names and adjust as needed.\n");
    out
}
