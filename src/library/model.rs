use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// One track as it appears in a comparison row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    /// Tag value, or a synthesized placeholder when the tag had none.
    pub track_number: u32,
    pub title: String,
    pub bitrate_label: String,
    pub duration_seconds: u64,
}

impl TrackRecord {
    pub fn minutes(&self) -> u64 {
        self.duration_seconds / 60
    }

    pub fn seconds(&self) -> u64 {
        self.duration_seconds % 60
    }
}

/// All tracks found under one album directory, keyed by track number.
#[derive(Debug, Clone)]
pub struct AlbumTrackTable {
    pub tracks: BTreeMap<u32, TrackRecord>,
    pub album_title: Option<String>,
    pub album_artist: Option<String>,
    pub source_path: PathBuf,
    /// Total track count from the tags, when any file carried one.
    pub track_count: Option<u32>,
    /// Media files whose tags could not be read.
    pub unreadable: usize,
}

impl AlbumTrackTable {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// True when the tags announce more tracks than were found on disk.
    pub fn is_incomplete(&self) -> bool {
        self.track_count
            .map(|total| (self.tracks.len() as u64) < u64::from(total))
            .unwrap_or(false)
    }
}

/// Normalized (album, artist) key used to pair directories across roots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlbumIdentity(String);

impl AlbumIdentity {
    /// Lowercase both parts, concatenate them and drop every whitespace char.
    pub fn new(album: &str, artist: &str) -> Self {
        let key = album
            .chars()
            .chain(artist.chars())
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        Self(key)
    }
}

impl fmt::Display for AlbumIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
