use crate::ids::next_id;
use crate::store::JsonStore;
use chrono::Local;
use songbook_core::error::{Result, SongbookError};
use songbook_core::song::{MAX_RATING, MIN_RATING, NewSong, Song};
use tracing::info;

/// Owns the set of registered songs and their backing store.
///
/// The collection is loaded once when the catalog is opened and held in
/// memory; every mutating operation persists the full collection before
/// returning.
#[derive(Debug)]
pub struct SongCatalog {
    songs: Vec<Song>,
    store: JsonStore,
}

impl SongCatalog {
    pub fn open(store: JsonStore) -> Result<Self> {
        let songs = store.load()?;
        info!("loaded {} songs from {}", songs.len(), store.path());
        Ok(Self { songs, store })
    }

    /// Register a new song. The id is assigned here; the favorite flag
    /// and rating start at their defaults and the creation date is
    /// today.
    pub fn add(&mut self, new: NewSong) -> Result<Song> {
        let id = next_id(self.songs.iter().map(|s| s.id));
        let song = Song::from_new(id, new, Local::now().date_naive());
        self.songs.push(song.clone());
        self.store.save(&self.songs)?;
        info!("registered song {} ({})", song.id, song.title);
        Ok(song)
    }

    /// Mark an existing song as favorite. The flag is set-only.
    pub fn mark_favorite(&mut self, id: u64) -> Result<Song> {
        if self.songs.is_empty() {
            return Err(SongbookError::EmptyCatalog("songs"));
        }

        let song = self
            .songs
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SongbookError::NotFound(format!("song {}", id)))?;
        song.favorite = true;
        let updated = song.clone();

        self.store.save(&self.songs)?;
        Ok(updated)
    }

    /// Set a song's rating. Scores outside 1-5 are rejected before any
    /// lookup; nothing is mutated and nothing is saved.
    pub fn rate(&mut self, id: u64, score: u8) -> Result<Song> {
        if self.songs.is_empty() {
            return Err(SongbookError::EmptyCatalog("songs"));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&score) {
            return Err(SongbookError::Validation(format!(
                "rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, score
            )));
        }

        let song = self
            .songs
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SongbookError::NotFound(format!("song {}", id)))?;
        song.rating = score;
        let updated = song.clone();

        self.store.save(&self.songs)?;
        Ok(updated)
    }

    pub fn get(&self, id: u64) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Persist the current collection unconditionally.
    pub fn flush(&self) -> Result<()> {
        self.store.save(&self.songs)
    }
}
