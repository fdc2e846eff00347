use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest score `rate` accepts.
pub const MIN_RATING: u8 = 1;
/// Highest score `rate` accepts.
pub const MAX_RATING: u8 = 5;

/// One catalog entry.
///
/// Serialized with camelCase keys so the durable form matches the store
/// layout (`durationSeconds`, `dateAdded`, ...). The id is assigned by
/// the catalog at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub duration_seconds: u32,
    pub release_year: i32,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub rating: u8,
    pub date_added: NaiveDate,
}

/// User-supplied fields for a new song. Id, favorite flag, rating and
/// the creation date are filled in by the catalog.
#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub duration_seconds: u32,
    pub release_year: i32,
}

impl Song {
    pub fn from_new(id: u64, new: NewSong, date_added: NaiveDate) -> Self {
        Self {
            id,
            title: new.title,
            artist: new.artist,
            album: new.album,
            genre: new.genre,
            duration_seconds: new.duration_seconds,
            release_year: new.release_year,
            favorite: false,
            rating: 0,
            date_added,
        }
    }

    /// Label used by selection prompts.
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.title, self.artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_new_applies_defaults() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let song = Song::from_new(
            1,
            NewSong {
                title: "A".to_owned(),
                artist: "X".to_owned(),
                album: "Z".to_owned(),
                genre: "rock".to_owned(),
                duration_seconds: 200,
                release_year: 2020,
            },
            date,
        );

        assert_eq!(song.id, 1);
        assert!(!song.favorite);
        assert_eq!(song.rating, 0);
        assert_eq!(song.date_added, date);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let song = Song::from_new(
            7,
            NewSong {
                title: "A".to_owned(),
                artist: "X".to_owned(),
                album: "Z".to_owned(),
                genre: "rock".to_owned(),
                duration_seconds: 200,
                release_year: 2020,
            },
            date,
        );

        let json = serde_json::to_string(&song).unwrap();
        assert!(json.contains("\"durationSeconds\":200"));
        assert!(json.contains("\"releaseYear\":2020"));
        assert!(json.contains("\"dateAdded\":\"2026-08-07\""));
    }

    #[test]
    fn deserializes_records_missing_optional_flags() {
        // Records written before the favorite/rating fields existed
        let json = r#"{
            "id": 1,
            "title": "A",
            "artist": "X",
            "album": "Z",
            "genre": "rock",
            "durationSeconds": 200,
            "releaseYear": 2020,
            "dateAdded": "2026-08-07"
        }"#;

        let song: Song = serde_json::from_str(json).unwrap();
        assert!(!song.favorite);
        assert_eq!(song.rating, 0);
    }
}
