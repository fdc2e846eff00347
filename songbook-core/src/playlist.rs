use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named, ordered collection of song references.
///
/// `song_ids` preserves insertion order and permits duplicates; entries
/// reference songs by catalog id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub song_ids: Vec<u64>,
    pub date_created: NaiveDate,
}

/// User-supplied fields for a new playlist.
#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
}

impl Playlist {
    pub fn from_new(id: u64, new: NewPlaylist, date_created: NaiveDate) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            song_ids: Vec::new(),
            date_created,
        }
    }
}
