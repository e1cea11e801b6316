use crate::cli::types::{ids::PlayerId, position::Position};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt;


/// One player as listed in the Sleeper directory.
///
/// The directory is keyed by player id; the key is copied into `id` while
/// deserializing a [`PlayerDirectory`]. Every attribute may be missing or
/// `null` upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub id: PlayerId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl PlayerRecord {
    /// Name for display: full name, else "first last".
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref() {
            Some(full) if !full.is_empty() => full.to_string(),
            _ => format!(
                "{} {}",
                self.first_name.as_deref().unwrap_or_default(),
                self.last_name.as_deref().unwrap_or_default()
            )
            .trim()
            .to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("Active")
    }

    pub fn has_fantasy_position(&self) -> bool {
        self.position.as_deref().is_some_and(Position::is_fantasy_code)
    }

    pub fn has_team(&self) -> bool {
        self.team.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Full directory snapshot, in the order the source document lists players.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDirectory {
    players: Vec<PlayerRecord>,
}

impl PlayerDirectory {
    pub fn from_records(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn into_players(self) -> Vec<PlayerRecord> {
        self.players
    }
}

// A plain map type would either sort the ids or drop document order, and the
// candidate tie-break depends on that order.
impl<'de> Deserialize<'de> for PlayerDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = PlayerDirectory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of player id to player attributes")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut players = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, mut record)) = map.next_entry::<String, PlayerRecord>()? {
                    record.id = PlayerId(id);
                    players.push(record);
                }
                Ok(PlayerDirectory { players })
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}
