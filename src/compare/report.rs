use std::io::{self, Write};
use std::path::Path;

use crate::library::{AlbumTrackTable, TrackRecord};

use super::align::AlignedPair;

/// Printed in place of a track missing from one side.
pub const MISSING_TRACK: &str = "[  ----  ] - xx:xx (--) ---------------------";

/// `[192 kb/s] - 3:05 ( 1) Title`
pub fn format_track(track: &TrackRecord) -> String {
    format!(
        "[{}] - {}:{:02} ({:2}) {}",
        track.bitrate_label,
        track.minutes(),
        track.seconds(),
        track.track_number,
        track.title
    )
}

fn format_side(track: Option<&TrackRecord>) -> String {
    track.map(format_track).unwrap_or_else(|| MISSING_TRACK.to_string())
}

/// Report width rounded down to an even number of columns.
pub fn even_width(width: u16) -> usize {
    usize::from(width) & !1
}

/// Two-column renderer for one album pair.
pub struct ReportRenderer {
    width: usize,
}

impl ReportRenderer {
    pub fn new(width: u16) -> Self {
        Self {
            width: even_width(width),
        }
    }

    fn half(&self) -> usize {
        self.width / 2
    }

    /// Left text padded to half the width, a space, then the right text.
    pub fn row(&self, left: &str, right: &str) -> String {
        format!("{left:<half$} {right}", half = self.half())
    }

    fn centered_row(&self, left: &str, right: &str) -> String {
        format!("{left:^half$} {right:^half$}", half = self.half())
            .trim_end()
            .to_string()
    }

    /// Rule, progress counter and both album paths.
    pub fn write_header<W: Write>(
        &self,
        out: &mut W,
        position: usize,
        total: usize,
        left: &Path,
        right: &Path,
    ) -> io::Result<()> {
        writeln!(out, "{}", "=".repeat(self.width))?;
        writeln!(out, "{position}/{total}")?;
        writeln!(
            out,
            "{}",
            self.centered_row(&left.display().to_string(), &right.display().to_string())
        )
    }

    fn side_note(table: &AlbumTrackTable) -> String {
        let mut notes = Vec::new();
        if table.is_incomplete() {
            if let Some(total) = table.track_count {
                notes.push(format!("incomplete: {}/{total}", table.len()));
            }
        }
        if table.unreadable > 0 {
            notes.push(format!("{} unreadable", table.unreadable));
        }
        notes.join(", ")
    }

    /// Header, optional notes line and one row per aligned pair.
    pub fn write_album<W: Write>(
        &self,
        out: &mut W,
        position: usize,
        total: usize,
        left: &AlbumTrackTable,
        right: &AlbumTrackTable,
        pairs: &[AlignedPair<'_>],
    ) -> io::Result<()> {
        self.write_header(out, position, total, &left.source_path, &right.source_path)?;

        let (left_note, right_note) = (Self::side_note(left), Self::side_note(right));
        if !left_note.is_empty() || !right_note.is_empty() {
            writeln!(out, "{}", self.centered_row(&left_note, &right_note))?;
        }

        for pair in pairs {
            writeln!(
                out,
                "{}",
                self.row(&format_side(pair.left), &format_side(pair.right))
            )?;
        }
        writeln!(out)?;
        writeln!(out)
    }
}
