//! Library scanning: metadata access, per-album track tables and the album
//! identity index built for each root.

mod index;
mod metadata;
mod model;
mod scan;
mod tracks;

pub use index::{AlbumIndex, ScanWarning, build_album_index};
pub use metadata::{LoftyProvider, MetadataProvider};
pub use model::{AlbumIdentity, AlbumTrackTable, TrackRecord};
pub use tracks::build_track_table;

#[cfg(test)]
pub(crate) mod testing;
