//! Catalog ownership and persistence for songbook
//!
//! Everything that touches the JSON stores lives here: the persistence
//! adapter, identifier generation, the song and playlist catalogs, the
//! `Library` aggregate the shell drives, and the read-only statistics
//! queries.

#![allow(clippy::cargo_common_metadata)]

pub mod ids;
pub mod library;
pub mod playlists;
pub mod songs;
pub mod stats;
pub mod store;

pub use library::Library;
pub use playlists::PlaylistCatalog;
pub use songs::SongCatalog;
pub use store::JsonStore;
