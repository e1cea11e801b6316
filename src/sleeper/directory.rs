use std::path::Path;

use tracing::{debug, info};

use crate::{
    core::{directory_snapshot_path, try_read_to_string, write_string},
    error::RankError,
    sleeper::{
        http::{build_client, get_player_directory},
        types::PlayerDirectory,
    },
    Result,
};

/// Load the player directory, fetching it from `url` unless `offline`.
///
/// Online runs always fetch and then refresh the snapshot in the user cache
/// directory. Offline runs read that snapshot and fail when it is missing.
pub async fn load_player_directory(url: &str, offline: bool) -> Result<PlayerDirectory> {
    load_player_directory_at(url, offline, &directory_snapshot_path()).await
}

/// [`load_player_directory`] with an explicit snapshot location.
pub async fn load_player_directory_at(
    url: &str,
    offline: bool,
    snapshot: &Path,
) -> Result<PlayerDirectory> {
    if offline {
        let body = try_read_to_string(snapshot).ok_or_else(|| RankError::MissingSnapshot {
            path: snapshot.to_path_buf(),
        })?;
        info!(path = %snapshot.display(), "using cached player directory");
        return PlayerDirectory::from_json(&body);
    }

    let client = build_client()?;
    let body = get_player_directory(&client, url).await?;
    // parse before caching so a bad body never replaces a good snapshot
    let directory = PlayerDirectory::from_json(&body)?;

    if let Err(e) = write_string(snapshot, &body) {
        debug!(path = %snapshot.display(), error = %e, "could not cache player directory");
    }

    Ok(directory)
}
