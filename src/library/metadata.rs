use std::path::Path;

use lofty::error::LoftyError;
use lofty::prelude::{AudioFile, ItemKey, TaggedFileExt};
use thiserror::Error;

/// Tag and stream properties for one media file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub track_number: Option<u32>,
    pub track_total: Option<u32>,
    pub title: String,
    pub bitrate_label: String,
    pub duration_seconds: u64,
    pub album: Option<String>,
    pub album_artist: Option<String>,
    pub artist: Option<String>,
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("unreadable tags in {path}: {source}")]
    Tag {
        path: String,
        #[source]
        source: LoftyError,
    },
    #[error("no tag found in {0}")]
    NoTag(String),
}

/// Source of per-file metadata. Scanners only see this trait.
pub trait MetadataProvider {
    fn read(&self, path: &Path) -> Result<TrackMetadata, MetadataError>;
}

/// Reads tags with `lofty`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyProvider;

impl MetadataProvider for LoftyProvider {
    fn read(&self, path: &Path) -> Result<TrackMetadata, MetadataError> {
        let tagged = lofty::read_from_path(path).map_err(|source| MetadataError::Tag {
            path: path.display().to_string(),
            source,
        })?;
        let properties = tagged.properties();

        let tag = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .ok_or_else(|| MetadataError::NoTag(path.display().to_string()))?;

        let title = non_empty(tag.get_string(&ItemKey::TrackTitle))
            .or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "UNKNOWN".to_string());

        let (track_number, tag_total) = tag
            .get_string(&ItemKey::TrackNumber)
            .map(parse_track_field)
            .unwrap_or((None, None));
        let track_total = tag
            .get_string(&ItemKey::TrackTotal)
            .and_then(|v| v.trim().parse().ok())
            .or(tag_total);

        Ok(TrackMetadata {
            track_number,
            track_total,
            title,
            bitrate_label: bitrate_label(
                properties
                    .audio_bitrate()
                    .or_else(|| properties.overall_bitrate()),
            ),
            duration_seconds: properties.duration().as_secs(),
            album: non_empty(tag.get_string(&ItemKey::AlbumTitle)),
            album_artist: non_empty(tag.get_string(&ItemKey::AlbumArtist)),
            artist: non_empty(tag.get_string(&ItemKey::TrackArtist)),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Split a `"3/12"` style track field into number and total.
pub fn parse_track_field(text: &str) -> (Option<u32>, Option<u32>) {
    let mut parts = text.splitn(2, '/');
    let number = parts.next().and_then(|n| n.trim().parse().ok());
    let total = parts.next().and_then(|t| t.trim().parse().ok());
    (number, total)
}

/// Fixed-width bitrate column, e.g. `192 kb/s`.
pub fn bitrate_label(kbps: Option<u32>) -> String {
    match kbps {
        Some(k) if k > 0 => format!("{k:>3} kb/s"),
        _ => "??? kb/s".to_string(),
    }
}
