//! Fixed-width table rendering for the catalog listings

use songbook_core::playlist::Playlist;
use songbook_core::song::Song;

pub fn render_songs(songs: &[Song]) -> String {
    let headers = [
        "ID", "Title", "Artist", "Album", "Genre", "Duration", "Year", "Fav", "Rating",
    ];
    let rows: Vec<Vec<String>> = songs
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.title.clone(),
                s.artist.clone(),
                s.album.clone(),
                s.genre.clone(),
                s.duration_seconds.to_string(),
                s.release_year.to_string(),
                if s.favorite { "*".to_owned() } else { String::new() },
                s.rating.to_string(),
            ]
        })
        .collect();
    render(&headers, &rows)
}

pub fn render_playlists(playlists: &[Playlist], songs: &[Song]) -> String {
    let headers = ["ID", "Name", "Description", "Songs", "Created"];
    let rows: Vec<Vec<String>> = playlists
        .iter()
        .map(|p| {
            // Resolve ids to titles; ids with no matching song are skipped
            let titles: Vec<&str> = p
                .song_ids
                .iter()
                .filter_map(|id| songs.iter().find(|s| s.id == *id))
                .map(|s| s.title.as_str())
                .collect();
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.description.clone(),
                titles.join(", "),
                p.date_created.to_string(),
            ]
        })
        .collect();
    render(&headers, &rows)
}

fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        pad(&mut out, header, widths[i]);
    }
    out.push('\n');

    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            pad(&mut out, cell, widths[i]);
        }
        out.push('\n');
    }
    out
}

// Left-aligned, width counted in chars rather than bytes so accented
// titles stay lined up
fn pad(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    for _ in text.chars().count()..width {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use songbook_core::test_utils::{create_test_playlist, create_test_song};

    #[test]
    fn song_table_includes_header_and_row() {
        let songs = vec![create_test_song(1, "Some Title")];
        let table = render_songs(&songs);

        let mut lines = table.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("ID"));
        assert!(header.contains("Rating"));

        let separator = lines.next().unwrap();
        assert!(separator.chars().all(|c| c == '-'));

        let row = lines.next().unwrap();
        assert!(row.contains("Some Title"));
    }

    #[test]
    fn favorite_songs_are_starred() {
        let mut song = create_test_song(1, "t");
        song.favorite = true;
        let table = render_songs(&[song]);
        assert!(table.lines().nth(2).unwrap().contains('*'));
    }

    #[test]
    fn columns_widen_to_fit_cells() {
        let songs = vec![create_test_song(1, "A Rather Long Song Title")];
        let table = render_songs(&songs);
        let header = table.lines().next().unwrap();
        // the Title column must be at least as wide as its longest cell
        assert!(header.len() >= "A Rather Long Song Title".len());
    }

    #[test]
    fn playlist_table_resolves_song_titles() {
        let songs = vec![create_test_song(3, "Resolved")];
        let mut playlist = create_test_playlist(1, "P");
        playlist.song_ids = vec![3, 99];

        let table = render_playlists(&[playlist], &songs);
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains("Resolved"));
        assert!(!row.contains("99"));
    }
}
