//! Read-only queries over the song catalog
//!
//! Pure functions: no mutation, no persistence. The caller supplies
//! today's date so the recency window stays deterministic under test.

use chrono::NaiveDate;
use songbook_core::song::Song;

/// The genre with the most catalog entries, or `None` for an empty
/// catalog. Ties resolve toward the genre encountered first.
pub fn most_frequent_genre(songs: &[Song]) -> Option<&str> {
    most_frequent(songs.iter().map(|s| s.genre.as_str()))
}

/// The artist with the most catalog entries, same tie-break as
/// [`most_frequent_genre`].
pub fn most_frequent_artist(songs: &[Song]) -> Option<&str> {
    most_frequent(songs.iter().map(|s| s.artist.as_str()))
}

/// Songs added within the last `window_days` calendar days, boundary
/// inclusive. The comparison is whole-day based, never time-of-day.
pub fn recent_songs<'a>(
    songs: &'a [Song],
    today: NaiveDate,
    window_days: i64,
) -> Vec<&'a Song> {
    songs
        .iter()
        .filter(|s| today.signed_duration_since(s.date_added).num_days() <= window_days)
        .collect()
}

// Counts keys in encounter order; a later key needs a strictly greater
// count to displace an earlier one. The collections are small enough
// that a linear-scan counter beats pulling in a map.
fn most_frequent<'a>(keys: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (key, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((key, count)),
        }
    }
    best.map(|(key, _)| key)
}
