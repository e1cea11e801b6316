use reqwest::{
    header::{HeaderValue, ACCEPT},
    Client,
};
use tracing::info;

use crate::Result;


/// Sleeper's full NFL player database.
pub const SLEEPER_PLAYERS_URL: &str = "https://api.sleeper.com/v1/players/nfl";

/// HTTP client used for the directory fetch.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(concat!("ffl-avg-rank/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// GET the player directory and return the raw JSON body.
///
/// Any transport error or non-success status is returned as an error; the
/// caller treats both as fatal.
pub async fn get_player_directory(client: &Client, url: &str) -> Result<String> {
    info!(url, "fetching player directory");

    let body = client
        .get(url)
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    info!(bytes = body.len(), "player directory downloaded");
    Ok(body)
}
