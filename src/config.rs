//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive scanning, matching and the
//! report layout, plus helpers to load them from disk and the environment.

mod load;
mod schema;

pub use load::MIN_REPORT_WIDTH;
pub use schema::*;
