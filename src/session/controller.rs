use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::compare::{ReportRenderer, align_tracks};
use crate::config::Settings;
use crate::library::{
    AlbumIdentity, AlbumIndex, MetadataProvider, ScanWarning, build_album_index,
    build_track_table,
};

use super::prompt::{Decision, Prompt};
use super::relocate::{Relocation, relocate};

#[derive(Debug, Error)]
pub enum DedupError {
    #[error("no albums found in {}", .root.display())]
    NoAlbums { root: PathBuf },
    #[error("operator console failed: {0}")]
    Console(#[from] io::Error),
}

/// What happened during one run.
#[derive(Debug, Default)]
pub struct SessionSummary {
    /// Album pairs shown to the operator.
    pub compared: usize,
    /// Destinations of albums moved to the backup root.
    pub relocated: Vec<PathBuf>,
    pub quit_early: bool,
    pub warnings: Vec<ScanWarning>,
}

impl SessionSummary {
    /// Keep each warning once, even when a file is read by both the index
    /// and a track table.
    fn record(&mut self, warnings: Vec<ScanWarning>) {
        for warning in warnings {
            if !self.warnings.contains(&warning) {
                self.warnings.push(warning);
            }
        }
    }
}

/// How the loop proceeds after an album pair is resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Step {
    Next,
    Quit,
}

/// Drives one comparison of two library roots.
pub struct DedupSession<'a, P> {
    provider: &'a P,
    settings: &'a Settings,
    renderer: ReportRenderer,
}

impl<'a, P: MetadataProvider> DedupSession<'a, P> {
    pub fn new(provider: &'a P, settings: &'a Settings, width: u16) -> Self {
        Self {
            provider,
            settings,
            renderer: ReportRenderer::new(width),
        }
    }

    fn index_root(
        &self,
        root: &Path,
        summary: &mut SessionSummary,
    ) -> Result<AlbumIndex, DedupError> {
        info!("indexing {}", root.display());
        let outcome = build_album_index(
            root,
            self.provider,
            self.settings.dedup.artist_source,
            &self.settings.library,
        );
        summary.record(outcome.warnings);
        outcome.index.ok_or_else(|| DedupError::NoAlbums {
            root: root.to_path_buf(),
        })
    }

    /// Index both roots, then walk every identity they share.
    ///
    /// Fails before any prompt when either root yields no albums.
    pub fn run<R: BufRead, W: Write>(
        &self,
        left_root: &Path,
        right_root: &Path,
        prompt: &mut Prompt<R, W>,
    ) -> Result<SessionSummary, DedupError> {
        let mut summary = SessionSummary::default();
        let left = self.index_root(left_root, &mut summary)?;
        let right = self.index_root(right_root, &mut summary)?;

        let total = left.len();
        for (i, (key, left_dir)) in left.iter().enumerate() {
            let Some(right_dir) = right.get(key) else {
                continue;
            };
            summary.compared += 1;
            if self.compare(i + 1, total, key, left_dir, right_dir, prompt, &mut summary)?
                == Step::Quit
            {
                summary.quit_early = true;
                break;
            }
        }

        self.write_epilogue(prompt.output(), &summary)?;
        Ok(summary)
    }

    #[allow(clippy::too_many_arguments)]
    fn compare<R: BufRead, W: Write>(
        &self,
        position: usize,
        total: usize,
        key: &AlbumIdentity,
        left_dir: &Path,
        right_dir: &Path,
        prompt: &mut Prompt<R, W>,
        summary: &mut SessionSummary,
    ) -> Result<Step, DedupError> {
        debug!("comparing {key}");
        let mut warnings = Vec::new();
        let library = &self.settings.library;
        let left = build_track_table(left_dir, self.provider, library, &mut warnings);
        let right = build_track_table(right_dir, self.provider, library, &mut warnings);
        summary.record(warnings);
        let pairs = align_tracks(&left, &right);

        self.renderer
            .write_album(prompt.output(), position, total, &left, &right, &pairs)?;

        loop {
            let table = match prompt.decision()? {
                Decision::Continue => return Ok(Step::Next),
                Decision::Quit => return Ok(Step::Quit),
                Decision::RemoveLeft => &left,
                Decision::RemoveRight => &right,
            };
            match relocate(table, &self.settings.dedup.backup_dir, prompt)? {
                Relocation::Moved(dest) => {
                    summary.relocated.push(dest);
                    return Ok(Step::Next);
                }
                Relocation::Declined | Relocation::Failed(_) => {}
            }
        }
    }

    fn write_epilogue<W: Write>(&self, out: &mut W, summary: &SessionSummary) -> io::Result<()> {
        if !summary.warnings.is_empty() {
            writeln!(
                out,
                "{} files or directories were skipped; see {} for details.",
                summary.warnings.len(),
                self.settings.dedup.log_path.display()
            )?;
        }
        writeln!(
            out,
            "{} duplicate albums compared, {} moved{}.",
            summary.compared,
            summary.relocated.len(),
            if summary.quit_early { ", stopped early" } else { "" }
        )
    }
}
