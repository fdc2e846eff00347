use crate::playlists::PlaylistCatalog;
use crate::songs::SongCatalog;
use crate::stats;
use crate::store::JsonStore;
use chrono::Local;
use songbook_core::config::Config;
use songbook_core::error::{Result, SongbookError};
use songbook_core::playlist::{NewPlaylist, Playlist};
use songbook_core::song::{NewSong, Song};
use std::fs;
use tracing::info;

/// Application state: both catalogs, loaded once at startup and held in
/// memory for the whole session.
///
/// Each catalog persists to its own store. Mutations save eagerly; the
/// two files are written independently, so there is no cross-store
/// transaction.
#[derive(Debug)]
pub struct Library {
    songs: SongCatalog,
    playlists: PlaylistCatalog,
}

impl Library {
    /// Open both catalogs, creating the data directory and empty stores
    /// on first run.
    pub fn open(config: &Config) -> Result<Self> {
        let data_dir = &config.general.data_directory;
        if !data_dir.exists() {
            fs::create_dir_all(data_dir)?;
            info!("created data directory {}", data_dir);
        }

        let songs = SongCatalog::open(JsonStore::new(config.songs_path()))?;
        let playlists = PlaylistCatalog::open(JsonStore::new(config.playlists_path()))?;
        Ok(Self { songs, playlists })
    }

    pub fn add_song(&mut self, new: NewSong) -> Result<Song> {
        self.songs.add(new)
    }

    pub fn mark_favorite(&mut self, id: u64) -> Result<Song> {
        self.songs.mark_favorite(id)
    }

    pub fn rate_song(&mut self, id: u64, score: u8) -> Result<Song> {
        self.songs.rate(id, score)
    }

    pub fn add_playlist(&mut self, new: NewPlaylist) -> Result<Playlist> {
        self.playlists.add(new)
    }

    /// Both catalogs must be non-empty before a song can be attached;
    /// the shell calls this before prompting for a selection.
    pub fn check_attach_preconditions(&self) -> Result<()> {
        if self.playlists.is_empty() || self.songs.is_empty() {
            return Err(SongbookError::Precondition(
                "Register at least one song and one playlist first".to_owned(),
            ));
        }
        Ok(())
    }

    /// Append a song to a playlist.
    pub fn attach_song(&mut self, playlist_id: u64, song_id: u64) -> Result<Playlist> {
        self.check_attach_preconditions()?;
        self.playlists.attach_song(playlist_id, song_id)
    }

    pub fn most_frequent_genre(&self) -> Option<&str> {
        stats::most_frequent_genre(self.songs.songs())
    }

    pub fn most_frequent_artist(&self) -> Option<&str> {
        stats::most_frequent_artist(self.songs.songs())
    }

    pub fn recent_songs(&self, window_days: i64) -> Vec<&Song> {
        stats::recent_songs(self.songs.songs(), Local::now().date_naive(), window_days)
    }

    pub fn songs(&self) -> &SongCatalog {
        &self.songs
    }

    pub fn playlists(&self) -> &PlaylistCatalog {
        &self.playlists
    }

    /// Write both stores. Mutating operations already persist eagerly;
    /// this is the exit-time write.
    pub fn flush(&self) -> Result<()> {
        self.songs.flush()?;
        self.playlists.flush()
    }
}
