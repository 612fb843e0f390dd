use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::LibrarySettings;

use super::index::ScanWarning;
use super::metadata::MetadataProvider;
use super::model::{AlbumTrackTable, TrackRecord};
use super::scan::media_files;

/// First number handed out to tracks without a track number tag.
pub const PLACEHOLDER_START: u32 = 9999;

/// Highest unused number at or below [`PLACEHOLDER_START`].
///
/// Probes downward one by one, so repeated unnumbered tracks receive
/// 9999, 9998, ... and never land on a key that is already taken.
pub fn next_placeholder(tracks: &BTreeMap<u32, TrackRecord>) -> u32 {
    let mut candidate = PLACEHOLDER_START;
    while tracks.contains_key(&candidate) && candidate > 0 {
        candidate -= 1;
    }
    candidate
}

/// Scan one album directory (recursively) into a track table.
///
/// Files the provider cannot read are skipped, counted and pushed onto
/// `warnings`. A real track number seen twice keeps the later file.
pub fn build_track_table<P: MetadataProvider>(
    dir: &Path,
    provider: &P,
    settings: &LibrarySettings,
    warnings: &mut Vec<ScanWarning>,
) -> AlbumTrackTable {
    let mut tracks: BTreeMap<u32, TrackRecord> = BTreeMap::new();
    let mut album_title = None;
    let mut album_artist = None;
    let mut track_count = None;
    let mut unreadable = 0;

    for path in media_files(dir, settings) {
        let meta = match provider.read(&path) {
            Ok(meta) => meta,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                warnings.push(ScanWarning::UnreadableFile { file: path });
                unreadable += 1;
                continue;
            }
        };

        let track_number = match meta.track_number {
            Some(n) => n,
            None => {
                let n = next_placeholder(&tracks);
                debug!("{} has no track number, using {n}", path.display());
                n
            }
        };

        // TODO: two files sharing a real track number silently replace each
        // other; decide whether the report should surface both.
        if tracks.contains_key(&track_number) {
            debug!(
                "track {track_number} in {} replaced by {}",
                dir.display(),
                path.display()
            );
        }

        tracks.insert(
            track_number,
            TrackRecord {
                track_number,
                title: meta.title,
                bitrate_label: meta.bitrate_label,
                duration_seconds: meta.duration_seconds,
            },
        );

        // Untagged files do not erase album details seen earlier.
        album_title = meta.album.or(album_title);
        album_artist = meta.album_artist.or(meta.artist).or(album_artist);
        track_count = meta.track_total.or(track_count);
    }

    AlbumTrackTable {
        tracks,
        album_title,
        album_artist,
        source_path: dir.to_path_buf(),
        track_count,
        unreadable,
    }
}
