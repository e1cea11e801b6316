//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::DEFAULT_OUTPUT_FILE;

/// Where the player directory comes from, shared by every command
#[derive(Debug, Args)]
pub struct DirectoryArgs {
    /// Player directory endpoint (or set `SLEEPER_PLAYERS_URL` env var).
    #[clap(long)]
    pub directory_url: Option<String>,

    /// Use the cached directory snapshot from the last online run instead of fetching.
    #[clap(long)]
    pub offline: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve ranking lists against the player directory and write the SQL update file.
    Generate {
        /// Rankings TOML file (or set `FFL_RANKINGS_FILE` env var; default `data/rankings_2025_preseason.toml`).
        #[clap(long, short)]
        rankings: Option<PathBuf>,

        /// Path of the SQL file to write.
        #[clap(long, short, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        #[clap(flatten)]
        directory: DirectoryArgs,
    },

    /// Show how names resolve against the player directory.
    Lookup {
        /// Player names to resolve.
        #[clap(required = true)]
        names: Vec<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        #[clap(flatten)]
        directory: DirectoryArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-avg-rank",
    about = "Fold fantasy football ranking lists into average-rank SQL updates"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Log matching decisions (fuzzy matches, skipped names) to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}
