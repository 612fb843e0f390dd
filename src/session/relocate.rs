use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use walkdir::WalkDir;

use crate::library::AlbumTrackTable;

use super::prompt::Prompt;

#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
    #[error("source directory is gone: {}", .0.display())]
    SourceMissing(PathBuf),
    #[error("moving {} to {} failed: {source}", .from.display(), .to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of one relocation attempt.
#[derive(Debug)]
pub enum Relocation {
    Moved(PathBuf),
    Declined,
    Failed(RelocateError),
}

/// Replace characters that would split a tag value into several path parts.
fn path_component(value: Option<&str>, fallback: &str) -> String {
    let cleaned: String = value
        .unwrap_or_default()
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();
    match cleaned.as_str() {
        "" | "." | ".." => fallback.to_string(),
        _ => cleaned,
    }
}

/// `<backup_root>/<album_artist>/<album_title>` for `table`.
pub fn destination_for(table: &AlbumTrackTable, backup_root: &Path) -> PathBuf {
    backup_root
        .join(path_component(table.album_artist.as_deref(), "Unknown Artist"))
        .join(path_component(table.album_title.as_deref(), "Unknown Album"))
}

fn copy_tree(from: &Path, to: &Path) -> io::Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry.map_err(io::Error::other)?;
        let rel = entry
            .path()
            .strip_prefix(from)
            .map_err(io::Error::other)?;
        let target = to.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Move `from` to `to`, copying then deleting when they sit on different
/// filesystems.
pub fn move_dir(from: &Path, to: &Path) -> Result<(), RelocateError> {
    let io_err = |source: io::Error| RelocateError::Io {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    if !from.is_dir() {
        return Err(RelocateError::SourceMissing(from.to_path_buf()));
    }
    if to.exists() {
        return Err(RelocateError::DestinationExists(to.to_path_buf()));
    }
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            copy_tree(from, to).map_err(io_err)?;
            fs::remove_dir_all(from).map_err(io_err)
        }
        Err(e) => Err(io_err(e)),
    }
}

/// Ask for confirmation, then move the album directory of `table` under
/// `backup_root`.
pub fn relocate<R: BufRead, W: Write>(
    table: &AlbumTrackTable,
    backup_root: &Path,
    prompt: &mut Prompt<R, W>,
) -> io::Result<Relocation> {
    let dest = destination_for(table, backup_root);
    let question = format!(
        "Move {} to {}?",
        table.source_path.display(),
        dest.display()
    );
    if !prompt.confirm(&question)? {
        writeln!(prompt.output(), "Nothing moved.")?;
        return Ok(Relocation::Declined);
    }

    match move_dir(&table.source_path, &dest) {
        Ok(()) => {
            info!("moved {} to {}", table.source_path.display(), dest.display());
            writeln!(prompt.output(), "Moved to {}", dest.display())?;
            Ok(Relocation::Moved(dest))
        }
        Err(e) => {
            writeln!(prompt.output(), "Move failed: {e}")?;
            Ok(Relocation::Failed(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn table(source: &Path, artist: Option<&str>, album: Option<&str>) -> AlbumTrackTable {
        AlbumTrackTable {
            tracks: BTreeMap::new(),
            album_title: album.map(str::to_string),
            album_artist: artist.map(str::to_string),
            source_path: source.to_path_buf(),
            track_count: None,
            unreadable: 0,
        }
    }

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn destination_uses_artist_then_album() {
        let t = table(Path::new("/m/x"), Some("AC/DC"), Some("Back in Black"));
        assert_eq!(
            destination_for(&t, Path::new("/backup")),
            PathBuf::from("/backup/AC_DC/Back in Black")
        );

        let t = table(Path::new("/m/x"), None, Some(".."));
        assert_eq!(
            destination_for(&t, Path::new("/backup")),
            PathBuf::from("/backup/Unknown Artist/Unknown Album")
        );
    }

    #[test]
    fn confirmed_relocation_moves_the_whole_tree() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("music/Album");
        fs::create_dir_all(source.join("CD1")).unwrap();
        fs::write(source.join("CD1/01.mp3"), b"x").unwrap();
        let backup = dir.path().join("backup");

        let t = table(&source, Some("Artist"), Some("Album"));
        let outcome = relocate(&t, &backup, &mut prompt("y\n")).unwrap();

        let dest = backup.join("Artist/Album");
        assert!(matches!(outcome, Relocation::Moved(ref p) if p == &dest));
        assert!(!source.exists());
        assert!(dest.join("CD1/01.mp3").is_file());
    }

    #[test]
    fn declined_relocation_leaves_source_untouched() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("Album");
        fs::create_dir_all(&source).unwrap();
        let backup = dir.path().join("backup");

        let t = table(&source, Some("Artist"), Some("Album"));
        let mut p = prompt("what\nN\n");
        let outcome = relocate(&t, &backup, &mut p).unwrap();

        assert!(matches!(outcome, Relocation::Declined));
        assert!(source.is_dir());
        assert!(!backup.exists());
    }

    #[test]
    fn existing_destination_fails_without_moving() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("Album");
        fs::create_dir_all(&source).unwrap();
        let backup = dir.path().join("backup");
        fs::create_dir_all(backup.join("Artist/Album")).unwrap();

        let t = table(&source, Some("Artist"), Some("Album"));
        let mut p = prompt("y\n");
        let outcome = relocate(&t, &backup, &mut p).unwrap();

        assert!(matches!(
            outcome,
            Relocation::Failed(RelocateError::DestinationExists(_))
        ));
        assert!(source.is_dir());
        let out = String::from_utf8(p.output().clone()).unwrap();
        assert!(out.contains("Move failed"));
    }

    #[test]
    fn move_dir_reports_missing_source() {
        let dir = tempdir().unwrap();
        let err = move_dir(&dir.path().join("nope"), &dir.path().join("dest")).unwrap_err();
        assert!(matches!(err, RelocateError::SourceMissing(_)));
    }

    #[test]
    fn copy_tree_duplicates_nested_files() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("from");
        fs::create_dir_all(from.join("a/b")).unwrap();
        fs::write(from.join("a/b/c.flac"), b"data").unwrap();

        let to = dir.path().join("to");
        copy_tree(&from, &to).unwrap();
        assert_eq!(fs::read(to.join("a/b/c.flac")).unwrap(), b"data");
    }
}
