use crate::ids::next_id;
use crate::store::JsonStore;
use chrono::Local;
use songbook_core::error::{Result, SongbookError};
use songbook_core::playlist::{NewPlaylist, Playlist};
use tracing::info;

/// Owns the set of playlists and their backing store.
#[derive(Debug)]
pub struct PlaylistCatalog {
    playlists: Vec<Playlist>,
    store: JsonStore,
}

impl PlaylistCatalog {
    pub fn open(store: JsonStore) -> Result<Self> {
        let playlists = store.load()?;
        info!(
            "loaded {} playlists from {}",
            playlists.len(),
            store.path()
        );
        Ok(Self { playlists, store })
    }

    /// Create a new playlist with no songs, dated today.
    pub fn add(&mut self, new: NewPlaylist) -> Result<Playlist> {
        let id = next_id(self.playlists.iter().map(|p| p.id));
        let playlist = Playlist::from_new(id, new, Local::now().date_naive());
        self.playlists.push(playlist.clone());
        self.store.save(&self.playlists)?;
        info!("created playlist {} ({})", playlist.id, playlist.name);
        Ok(playlist)
    }

    /// Append a song reference to a playlist. Duplicates are permitted
    /// and the song id is not re-validated here; callers pick it from
    /// the current song catalog.
    pub fn attach_song(&mut self, playlist_id: u64, song_id: u64) -> Result<Playlist> {
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| SongbookError::NotFound(format!("playlist {}", playlist_id)))?;
        playlist.song_ids.push(song_id);
        let updated = playlist.clone();

        self.store.save(&self.playlists)?;
        Ok(updated)
    }

    pub fn get(&self, id: u64) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Persist the current collection unconditionally.
    pub fn flush(&self) -> Result<()> {
        self.store.save(&self.playlists)
    }
}
