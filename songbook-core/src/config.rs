use crate::error::{Result, SongbookError};
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default = "default_data_directory")]
    pub data_directory: Utf8PathBuf,
    /// Song store, resolved against `data_directory` when relative.
    #[serde(default = "default_songs_file")]
    pub songs_file: Utf8PathBuf,
    /// Playlist store, resolved against `data_directory` when relative.
    #[serde(default = "default_playlists_file")]
    pub playlists_file: Utf8PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct StatsConfig {
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: i64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            recent_window_days: default_recent_window_days(),
        }
    }
}

// Default value functions
fn default_data_directory() -> Utf8PathBuf {
    dirs::data_dir()
        .map(|p| p.join("songbook"))
        .and_then(|p| Utf8PathBuf::try_from(p).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("~/.local/share/songbook"))
}

fn default_songs_file() -> Utf8PathBuf {
    Utf8PathBuf::from("songs.json")
}

fn default_playlists_file() -> Utf8PathBuf {
    Utf8PathBuf::from("playlists.json")
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_recent_window_days() -> i64 {
    7
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SongbookError::Config(format!("Failed to read config: {}", e)))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| SongbookError::Config(format!("Failed to parse config: {}", e)))?;

        config.expand_paths();
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }

    fn find_config_file() -> Result<PathBuf> {
        let candidates = [
            dirs::config_dir().map(|p| p.join("songbook/songbook.toml")),
            Some(PathBuf::from("/etc/songbook/songbook.toml")),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Ok(candidate);
            }
        }

        Err(SongbookError::Config("Config file not found".to_owned()))
    }

    /// Full path of the song store.
    pub fn songs_path(&self) -> Utf8PathBuf {
        self.resolve(&self.general.songs_file)
    }

    /// Full path of the playlist store.
    pub fn playlists_path(&self) -> Utf8PathBuf {
        self.resolve(&self.general.playlists_file)
    }

    fn resolve(&self, file: &Utf8PathBuf) -> Utf8PathBuf {
        if file.is_absolute() {
            file.clone()
        } else {
            self.general.data_directory.join(file)
        }
    }

    fn expand_paths(&mut self) {
        // Helper function to expand tilde
        fn expand_tilde(path: &Utf8PathBuf) -> Utf8PathBuf {
            let path_str = path.as_str();
            if path_str.starts_with("~/") {
                if let Some(home) = dirs::home_dir() {
                    if let Some(home_str) = home.to_str() {
                        return Utf8PathBuf::from(path_str.replacen("~", home_str, 1));
                    }
                }
            }
            path.clone()
        }

        self.general.data_directory = expand_tilde(&self.general.data_directory);
        self.general.songs_file = expand_tilde(&self.general.songs_file);
        self.general.playlists_file = expand_tilde(&self.general.playlists_file);
    }

    fn validate(&self) -> Result<()> {
        if self.stats.recent_window_days < 0 {
            return Err(SongbookError::Config(format!(
                "recent_window_days must not be negative: {}",
                self.stats.recent_window_days
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            songs_file: default_songs_file(),
            playlists_file: default_playlists_file(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.general.songs_file, "songs.json");
        assert_eq!(config.general.playlists_file, "playlists.json");
        assert_eq!(config.stats.recent_window_days, 7);
    }

    #[test]
    fn relative_store_files_resolve_against_data_directory() {
        let mut config = Config::default();
        config.general.data_directory = Utf8PathBuf::from("/var/lib/songbook");
        assert_eq!(config.songs_path(), "/var/lib/songbook/songs.json");
        assert_eq!(config.playlists_path(), "/var/lib/songbook/playlists.json");
    }

    #[test]
    fn absolute_store_files_win_over_data_directory() {
        let mut config = Config::default();
        config.general.data_directory = Utf8PathBuf::from("/var/lib/songbook");
        config.general.songs_file = Utf8PathBuf::from("/tmp/songs.json");
        assert_eq!(config.songs_path(), "/tmp/songs.json");
    }

    #[test]
    fn negative_recent_window_is_rejected() {
        let document = "[stats]\nrecent_window_days = -1\n";
        let config: Config = toml::from_str(document).unwrap();
        assert!(config.validate().is_err());
    }
}
