use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{error, warn};

use crate::config::{ArtistSource, LibrarySettings};

use super::metadata::MetadataProvider;
use super::model::AlbumIdentity;
use super::scan::{direct_media_files, directories};

/// Album identities of one root, in the order their directories were found.
#[derive(Debug, Clone, Default)]
pub struct AlbumIndex {
    order: Vec<AlbumIdentity>,
    paths: HashMap<AlbumIdentity, PathBuf>,
}

impl AlbumIndex {
    /// Record `path` for `key` unless the key is taken. Returns the path that
    /// already owns the key when it is.
    pub fn try_insert(&mut self, key: AlbumIdentity, path: PathBuf) -> Result<(), &Path> {
        if self.paths.contains_key(&key) {
            return Err(self.paths[&key].as_path());
        }
        self.order.push(key.clone());
        self.paths.insert(key, path);
        Ok(())
    }

    pub fn get(&self, key: &AlbumIdentity) -> Option<&Path> {
        self.paths.get(key).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AlbumIdentity, &Path)> {
        self.order
            .iter()
            .map(|k| (k, self.paths[k].as_path()))
    }
}

/// A non-fatal problem met while indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// The representative file lacks an album or artist tag.
    MissingIdentityField { file: PathBuf, field: &'static str },
    /// A second directory produced an identity that is already indexed.
    Collision { kept: PathBuf, dropped: PathBuf },
    /// A media file whose tags could not be read.
    UnreadableFile { file: PathBuf },
    /// No media file in the directory had readable tags.
    Unreadable { dir: PathBuf, files: usize },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::MissingIdentityField { file, field } => {
                write!(f, "missing {field} tag: {}", file.display())
            }
            ScanWarning::Collision { kept, dropped } => write!(
                f,
                "album identity collision: {} already indexed, dropping {}",
                kept.display(),
                dropped.display()
            ),
            ScanWarning::UnreadableFile { file } => {
                write!(f, "unreadable tags: {}", file.display())
            }
            ScanWarning::Unreadable { dir, files } => {
                write!(f, "no readable tags in {} ({files} files)", dir.display())
            }
        }
    }
}

/// Result of indexing one root.
#[derive(Debug, Default)]
pub struct IndexOutcome {
    /// `None` when no album at all could be indexed.
    pub index: Option<AlbumIndex>,
    pub warnings: Vec<ScanWarning>,
}

/// Walk `root` and index one representative directory per album identity.
pub fn build_album_index<P: MetadataProvider>(
    root: &Path,
    provider: &P,
    artist_source: ArtistSource,
    settings: &LibrarySettings,
) -> IndexOutcome {
    let mut index = AlbumIndex::default();
    let mut warnings = Vec::new();

    for dir in directories(root, settings) {
        let files = direct_media_files(&dir, settings);
        if files.is_empty() {
            continue;
        }

        // The first file with readable tags decides the identity of the
        // whole directory; the rest are not opened.
        let mut representative = None;
        for file in &files {
            match provider.read(file) {
                Ok(meta) => {
                    representative = Some((file, meta));
                    break;
                }
                Err(e) => {
                    warn!("cannot read {}: {e}", file.display());
                    warnings.push(ScanWarning::UnreadableFile { file: file.clone() });
                }
            }
        }

        let Some((file, meta)) = representative else {
            let warning = ScanWarning::Unreadable {
                dir: dir.clone(),
                files: files.len(),
            };
            warn!("{warning}");
            warnings.push(warning);
            continue;
        };

        let artist = match artist_source {
            ArtistSource::AlbumArtist => meta.album_artist,
            ArtistSource::TrackArtist => meta.artist,
        };
        let (album, artist) = match (meta.album, artist) {
            (Some(album), Some(artist)) => (album, artist),
            (album, _) => {
                let field = if album.is_none() { "album" } else { "artist" };
                let warning = ScanWarning::MissingIdentityField {
                    file: file.clone(),
                    field,
                };
                warn!("{warning}");
                warnings.push(warning);
                continue;
            }
        };

        let key = AlbumIdentity::new(&album, &artist);
        if let Err(kept) = index.try_insert(key, dir.clone()) {
            let warning = ScanWarning::Collision {
                kept: kept.to_path_buf(),
                dropped: dir.clone(),
            };
            error!("{warning}");
            warnings.push(warning);
        }
    }

    IndexOutcome {
        index: (!index.is_empty()).then_some(index),
        warnings,
    }
}
