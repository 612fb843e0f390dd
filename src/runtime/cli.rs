use std::path::PathBuf;

use clap::Parser;

use crate::config::{ArtistSource, Settings};

/// Find albums present in both trees and decide which copy to keep.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// First library root
    #[arg(required_unless_present = "dump_config")]
    pub left_dir: Option<PathBuf>,

    /// Second library root
    #[arg(required_unless_present = "dump_config")]
    pub right_dir: Option<PathBuf>,

    /// Use the album artist tag instead of the track artist to identify albums
    #[arg(short = 'a', long)]
    pub album_artist: bool,

    /// File receiving skipped-directory and collision warnings
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Root that removed albums are moved under
    #[arg(short = 'b', long, value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Report width in columns (defaults to the terminal width)
    #[arg(short = 'w', long)]
    pub width: Option<u16>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub dump_config: bool,
}

impl Args {
    /// Flags win over file and environment settings.
    pub fn apply(&self, settings: &mut Settings) {
        if self.album_artist {
            settings.dedup.artist_source = ArtistSource::AlbumArtist;
        }
        if let Some(log) = &self.log {
            settings.dedup.log_path = log.clone();
        }
        if let Some(dir) = &self.backup_dir {
            settings.dedup.backup_dir = dir.clone();
        }
        if let Some(w) = self.width {
            settings.report.width = Some(w);
        }
    }
}
