//! In-memory metadata for tests: tags are registered per path and files are
//! created empty on disk so the directory walkers see them.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::metadata::{MetadataError, MetadataProvider, TrackMetadata};

#[derive(Default)]
pub struct FakeProvider {
    tags: HashMap<PathBuf, TrackMetadata>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `path` on disk and register `meta` for it.
    pub fn add(&mut self, path: &Path, meta: TrackMetadata) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
        self.tags.insert(path.to_path_buf(), meta);
    }

    /// Create `path` on disk without tags; reading it fails.
    pub fn add_unreadable(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"garbage").unwrap();
    }

    /// Add one numbered track of `album` by `artist` under `dir`.
    pub fn add_track(
        &mut self,
        dir: &Path,
        album: &str,
        artist: &str,
        number: Option<u32>,
        title: &str,
    ) -> PathBuf {
        let file = dir.join(format!("{title}.mp3"));
        self.add(&file, track(album, artist, number, title));
        file
    }
}

impl MetadataProvider for FakeProvider {
    fn read(&self, path: &Path) -> Result<TrackMetadata, MetadataError> {
        self.tags
            .get(path)
            .cloned()
            .ok_or_else(|| MetadataError::NoTag(path.display().to_string()))
    }
}

pub fn track(album: &str, artist: &str, number: Option<u32>, title: &str) -> TrackMetadata {
    TrackMetadata {
        track_number: number,
        track_total: None,
        title: title.to_string(),
        bitrate_label: "192 kb/s".to_string(),
        duration_seconds: 185,
        album: Some(album.to_string()),
        album_artist: Some(artist.to_string()),
        artist: Some(artist.to_string()),
    }
}
