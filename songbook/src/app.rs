use crate::{prompt, table};
use anyhow::Result;
use songbook_core::config::Config;
use songbook_core::error::{Result as CoreResult, SongbookError};
use songbook_core::playlist::NewPlaylist;
use songbook_core::song::{MAX_RATING, MIN_RATING, NewSong};
use songbook_library::Library;
use tracing::debug;

/// Drive the interactive session: load both catalogs, loop over the
/// menu until the user quits, then flush everything to disk.
pub fn run(config: Config) -> Result<()> {
    let mut library = Library::open(&config)?;
    let recent_window_days = config.stats.recent_window_days;

    println!("=== Songbook — song & playlist catalog ===");

    loop {
        println!();
        println!("1) Register a song");
        println!("2) Create a playlist");
        println!("3) Add a song to a playlist");
        println!("4) Mark a song as favorite");
        println!("5) Rate a song");
        println!("6) Show statistics");
        println!("7) Show tables");
        println!("8) Quit");

        let Some(choice) = prompt::read_line("Choose an option:")? else {
            break; // closed stdin quits like option 8
        };

        let outcome = match choice.as_str() {
            "1" => register_song(&mut library),
            "2" => create_playlist(&mut library),
            "3" => attach_song(&mut library),
            "4" => mark_favorite(&mut library),
            "5" => rate_song(&mut library),
            "6" => {
                show_statistics(&library, recent_window_days);
                Ok(())
            }
            "7" => {
                show_tables(&library);
                Ok(())
            }
            "8" => break,
            other => {
                println!("Unknown option: {}", other);
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(err) if err.is_user_error() => {
                debug!("action aborted: {}", err);
                println!("{}", err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("Saving catalogs...");
    library.flush()?;
    println!("Goodbye!");
    Ok(())
}

fn register_song(library: &mut Library) -> CoreResult<()> {
    if !prompt::proceed("Register a new song?")? {
        return Ok(());
    }

    let Some(title) = prompt::text("Title:")? else {
        return Ok(());
    };
    let Some(artist) = prompt::text("Artist:")? else {
        return Ok(());
    };
    let Some(album) = prompt::text("Album:")? else {
        return Ok(());
    };
    let Some(genre) = prompt::text("Genre:")? else {
        return Ok(());
    };
    let Some(duration_seconds) = prompt::number::<u32>("Duration in seconds:")? else {
        return Ok(());
    };
    let Some(release_year) = prompt::number::<i32>("Release year:")? else {
        return Ok(());
    };

    let song = library.add_song(NewSong {
        title,
        artist,
        album,
        genre,
        duration_seconds,
        release_year,
    })?;
    println!("Registered \"{}\" with id {}.", song.title, song.id);
    Ok(())
}

fn create_playlist(library: &mut Library) -> CoreResult<()> {
    if !prompt::proceed("Create a new playlist?")? {
        return Ok(());
    }

    let Some(name) = prompt::text("Playlist name:")? else {
        return Ok(());
    };
    let Some(description) = prompt::text("Description:")? else {
        return Ok(());
    };

    let playlist = library.add_playlist(NewPlaylist { name, description })?;
    println!("Created playlist \"{}\" with id {}.", playlist.name, playlist.id);
    Ok(())
}

fn attach_song(library: &mut Library) -> CoreResult<()> {
    // Rejected before any selection prompt when either catalog is empty
    library.check_attach_preconditions()?;

    if !prompt::proceed("Add a song to a playlist?")? {
        return Ok(());
    }

    let Some(playlist_id) = select_playlist(library)? else {
        return Ok(());
    };
    let Some(song_id) = select_song(library, "Select the song to add:")? else {
        return Ok(());
    };

    let playlist = library.attach_song(playlist_id, song_id)?;
    println!("Added song to \"{}\".", playlist.name);
    Ok(())
}

fn mark_favorite(library: &mut Library) -> CoreResult<()> {
    if library.songs().is_empty() {
        return Err(SongbookError::EmptyCatalog("songs"));
    }

    if !prompt::proceed("Mark a song as favorite?")? {
        return Ok(());
    }

    let Some(id) = select_song(library, "Select the song:")? else {
        return Ok(());
    };

    let song = library.mark_favorite(id)?;
    println!("Marked \"{}\" as favorite.", song.title);
    Ok(())
}

fn rate_song(library: &mut Library) -> CoreResult<()> {
    if library.songs().is_empty() {
        return Err(SongbookError::EmptyCatalog("songs"));
    }

    if !prompt::proceed("Rate a song?")? {
        return Ok(());
    }

    let Some(id) = select_song(library, "Select the song to rate:")? else {
        return Ok(());
    };
    let Some(score) =
        prompt::number::<u8>(&format!("Rating ({}-{}):", MIN_RATING, MAX_RATING))?
    else {
        return Ok(());
    };

    // An out-of-range score aborts here with a validation error and the
    // song keeps its previous rating
    let song = library.rate_song(id, score)?;
    println!("Rated \"{}\" {}/{}.", song.title, song.rating, MAX_RATING);
    Ok(())
}

fn select_song(library: &Library, message: &str) -> CoreResult<Option<u64>> {
    let songs = library.songs().songs();
    let labels: Vec<String> = songs.iter().map(|s| s.display_label()).collect();
    let Some(index) = prompt::select(message, &labels)? else {
        return Ok(None);
    };
    Ok(Some(songs[index].id))
}

fn select_playlist(library: &Library) -> CoreResult<Option<u64>> {
    let playlists = library.playlists().playlists();
    let labels: Vec<String> = playlists.iter().map(|p| p.name.clone()).collect();
    let Some(index) = prompt::select("Select the playlist:", &labels)? else {
        return Ok(None);
    };
    Ok(Some(playlists[index].id))
}

fn show_statistics(library: &Library, window_days: i64) {
    println!();
    println!("Statistics:");
    println!(
        "  Favorite genre:    {}",
        library.most_frequent_genre().unwrap_or("None")
    );
    println!(
        "  Most heard artist: {}",
        library.most_frequent_artist().unwrap_or("None")
    );

    let recent = library.recent_songs(window_days);
    let titles: Vec<&str> = recent.iter().map(|s| s.title.as_str()).collect();
    println!(
        "  Recent songs ({} days): {}",
        window_days,
        if titles.is_empty() {
            "None".to_owned()
        } else {
            titles.join(", ")
        }
    );
}

fn show_tables(library: &Library) {
    println!();
    println!("Songs:");
    if library.songs().is_empty() {
        println!("  (no songs registered)");
    } else {
        println!("{}", table::render_songs(library.songs().songs()));
    }

    println!("Playlists:");
    if library.playlists().is_empty() {
        println!("  (no playlists created)");
    } else {
        println!(
            "{}",
            table::render_playlists(library.playlists().playlists(), library.songs().songs())
        );
    }
}
