//! Catalog and library behavior against temporary stores

use camino::Utf8PathBuf;
use songbook_core::config::Config;
use songbook_core::error::SongbookError;
use songbook_core::playlist::NewPlaylist;
use songbook_core::song::NewSong;
use songbook_library::Library;

fn test_config(dir: &tempfile::TempDir) -> Config {
    let mut config = Config::default();
    config.general.data_directory =
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    config
}

fn new_song(title: &str, artist: &str, genre: &str) -> NewSong {
    NewSong {
        title: title.to_owned(),
        artist: artist.to_owned(),
        album: "Album".to_owned(),
        genre: genre.to_owned(),
        duration_seconds: 200,
        release_year: 2020,
    }
}

fn new_playlist(name: &str) -> NewPlaylist {
    NewPlaylist {
        name: name.to_owned(),
        description: "d".to_owned(),
    }
}

#[test]
fn song_ids_increase_sequentially_from_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(&test_config(&dir)).unwrap();

    for expected in 1..=4u64 {
        let song = library.add_song(new_song("t", "a", "g")).unwrap();
        assert_eq!(song.id, expected);
    }
}

#[test]
fn new_songs_start_unfavorited_and_unrated() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(&test_config(&dir)).unwrap();

    let song = library.add_song(new_song("t", "a", "g")).unwrap();
    assert!(!song.favorite);
    assert_eq!(song.rating, 0);
}

#[test]
fn favoriting_an_empty_catalog_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(&test_config(&dir)).unwrap();

    let result = library.mark_favorite(1);
    assert!(matches!(result, Err(SongbookError::EmptyCatalog(_))));
}

#[test]
fn favoriting_an_unknown_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(&test_config(&dir)).unwrap();
    library.add_song(new_song("t", "a", "g")).unwrap();

    let result = library.mark_favorite(99);
    assert!(matches!(result, Err(SongbookError::NotFound(_))));
}

#[test]
fn favorite_flag_is_set_and_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    {
        let mut library = Library::open(&config).unwrap();
        library.add_song(new_song("t", "a", "g")).unwrap();
        let song = library.mark_favorite(1).unwrap();
        assert!(song.favorite);
    }

    let reopened = Library::open(&config).unwrap();
    assert!(reopened.songs().get(1).unwrap().favorite);
}

#[test]
fn every_valid_score_mutates() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(&test_config(&dir)).unwrap();
    library.add_song(new_song("t", "a", "g")).unwrap();

    for score in 1..=5u8 {
        let song = library.rate_song(1, score).unwrap();
        assert_eq!(song.rating, score);
    }
}

#[test]
fn out_of_range_scores_never_mutate() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let mut library = Library::open(&config).unwrap();
    library.add_song(new_song("t", "a", "g")).unwrap();

    for score in [0u8, 6, 100] {
        let result = library.rate_song(1, score);
        assert!(matches!(result, Err(SongbookError::Validation(_))));
    }
    assert_eq!(library.songs().get(1).unwrap().rating, 0);

    // the rejected scores never reached the store either
    let reopened = Library::open(&config).unwrap();
    assert_eq!(reopened.songs().get(1).unwrap().rating, 0);
}

#[test]
fn attaching_requires_both_catalogs_to_be_non_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(&test_config(&dir)).unwrap();

    let result = library.attach_song(1, 1);
    assert!(matches!(result, Err(SongbookError::Precondition(_))));

    // a playlist alone is not enough
    library.add_playlist(new_playlist("P")).unwrap();
    let result = library.attach_song(1, 1);
    assert!(matches!(result, Err(SongbookError::Precondition(_))));
}

#[test]
fn attaching_preserves_order_and_allows_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(&test_config(&dir)).unwrap();

    library.add_song(new_song("one", "a", "g")).unwrap();
    library.add_song(new_song("two", "a", "g")).unwrap();
    library.add_playlist(new_playlist("P")).unwrap();

    library.attach_song(1, 2).unwrap();
    library.attach_song(1, 1).unwrap();
    let playlist = library.attach_song(1, 2).unwrap();

    assert_eq!(playlist.song_ids, vec![2, 1, 2]);
}

#[test]
fn attaching_to_an_unknown_playlist_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(&test_config(&dir)).unwrap();

    library.add_song(new_song("one", "a", "g")).unwrap();
    library.add_playlist(new_playlist("P")).unwrap();

    let result = library.attach_song(42, 1);
    assert!(matches!(result, Err(SongbookError::NotFound(_))));
}

#[test]
fn reopening_sees_everything_that_was_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    {
        let mut library = Library::open(&config).unwrap();
        library.add_song(new_song("one", "a", "rock")).unwrap();
        library.add_playlist(new_playlist("P")).unwrap();
        library.attach_song(1, 1).unwrap();
        library.flush().unwrap();
    }

    let reopened = Library::open(&config).unwrap();
    assert_eq!(reopened.songs().len(), 1);
    assert_eq!(reopened.playlists().len(), 1);
    assert_eq!(reopened.playlists().get(1).unwrap().song_ids, vec![1]);
}

#[test]
fn songs_added_today_are_always_recent() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(&test_config(&dir)).unwrap();

    library.add_song(new_song("fresh", "a", "g")).unwrap();
    let recent = library.recent_songs(7);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].title, "fresh");
}

// The end-to-end walk from the original system: two songs by the same
// artist, a playlist, an attach, one rejected and one accepted rating.
#[test]
fn full_session_walkthrough() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(&test_config(&dir)).unwrap();

    let first = library.add_song(new_song("A", "X", "rock")).unwrap();
    assert_eq!(first.id, 1);
    assert!(!first.favorite);
    assert_eq!(first.rating, 0);

    let second = library.add_song(new_song("A", "X", "rock")).unwrap();
    assert_eq!(second.id, 2);

    assert_eq!(library.most_frequent_artist(), Some("X"));
    assert_eq!(library.most_frequent_genre(), Some("rock"));

    let playlist = library.add_playlist(new_playlist("P")).unwrap();
    assert_eq!(playlist.id, 1);
    assert!(playlist.song_ids.is_empty());

    let playlist = library.attach_song(1, 1).unwrap();
    assert_eq!(playlist.song_ids, vec![1]);

    assert!(library.rate_song(1, 6).is_err());
    assert_eq!(library.songs().get(1).unwrap().rating, 0);

    let rated = library.rate_song(1, 4).unwrap();
    assert_eq!(rated.rating, 4);
}
