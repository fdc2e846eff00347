//! Shared test utilities for the songbook workspace
//!
//! This module provides fixture constructors used across multiple test
//! suites in the workspace. Only available when the "test-utils" feature
//! is enabled.

use crate::playlist::Playlist;
use crate::song::Song;
use chrono::NaiveDate;

/// Date all fixtures default to unless a test overrides it.
pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

/// Create a test song with minimal distinguishing fields.
pub fn create_test_song(id: u64, title: &str) -> Song {
    Song {
        id,
        title: title.to_owned(),
        artist: "Test Artist".to_owned(),
        album: "Test Album".to_owned(),
        genre: "Rock".to_owned(),
        duration_seconds: 180,
        release_year: 2020,
        favorite: false,
        rating: 0,
        date_added: fixture_date(),
    }
}

/// Create a test song with a specific artist and genre, for the
/// frequency queries.
pub fn create_test_song_with_tags(id: u64, artist: &str, genre: &str) -> Song {
    Song {
        artist: artist.to_owned(),
        genre: genre.to_owned(),
        ..create_test_song(id, &format!("Song {}", id))
    }
}

/// Create a test song added on a specific day, for the recency window.
pub fn create_test_song_added_on(id: u64, date_added: NaiveDate) -> Song {
    Song {
        date_added,
        ..create_test_song(id, &format!("Song {}", id))
    }
}

/// Create an empty test playlist.
pub fn create_test_playlist(id: u64, name: &str) -> Playlist {
    Playlist {
        id,
        name: name.to_owned(),
        description: "a test playlist".to_owned(),
        song_ids: Vec::new(),
        date_created: fixture_date(),
    }
}
