use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/album-dupes/config.toml` or
/// `~/.config/album-dupes/config.toml`
///
/// Precedence (highest wins):
/// 1) Command line flags
/// 2) Environment variables (prefix `ALBUM_DUPES__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub dedup: DedupSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as media (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks while walking album trees.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec![
                "mp3".into(),
                "flac".into(),
                "ogg".into(),
                "m4a".into(),
                "wav".into(),
            ],
            follow_links: true,
            include_hidden: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DedupSettings {
    /// Root under which relocated albums land as `<artist>/<album>`.
    pub backup_dir: PathBuf,
    /// Warnings log, truncated at the start of every run.
    pub log_path: PathBuf,
    /// Which tag supplies the artist half of an album identity.
    pub artist_source: ArtistSource,
}

impl Default for DedupSettings {
    fn default() -> Self {
        Self {
            backup_dir: PathBuf::from("dupes_backup"),
            log_path: PathBuf::from("warnings.log"),
            artist_source: ArtistSource::TrackArtist,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtistSource {
    #[serde(alias = "artist", alias = "track_artist")]
    TrackArtist,
    #[serde(alias = "albumartist", alias = "album_artist")]
    AlbumArtist,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Fixed report width. When unset the terminal width is used.
    pub width: Option<u16>,
    /// Width used when stdout is not a terminal.
    pub fallback_width: u16,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            width: None,
            fallback_width: 80,
        }
    }
}
