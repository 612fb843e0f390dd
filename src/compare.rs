//! Side-by-side comparison of two albums: track alignment and the text
//! report printed for each duplicate.

mod align;
mod report;

pub use align::align_tracks;
pub use report::ReportRenderer;

#[cfg(test)]
pub(crate) use report::{MISSING_TRACK, format_track};
