//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ffl_avg_rank::{
    cli::{Cli, Commands},
    commands::{
        generate::{handle_generate, GenerateParams},
        lookup::handle_lookup,
    },
    logging::setup_logging,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Cli::parse();
    setup_logging(app.verbose);

    match app.command {
        Commands::Generate {
            rankings,
            output,
            directory,
        } => {
            handle_generate(GenerateParams {
                rankings,
                output,
                directory_url: directory.directory_url,
                offline: directory.offline,
            })
            .await?
        }

        Commands::Lookup {
            names,
            json,
            directory,
        } => handle_lookup(names, directory.directory_url, directory.offline, json).await?,
    }

    Ok(())
}
