//! Interactive duplicate resolution: the per-album decision loop and the
//! confirmed move of a chosen album into the backup root.

mod controller;
mod prompt;
mod relocate;

pub use controller::{DedupError, DedupSession};
pub use prompt::Prompt;
