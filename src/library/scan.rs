use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;

pub(crate) fn is_media_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn walker(dir: &Path, settings: &LibrarySettings, max_depth: Option<usize>) -> WalkDir {
    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();
    if let Some(d) = max_depth {
        walker = walker.max_depth(d);
    }
    walker
}

fn walk(
    dir: &Path,
    settings: &LibrarySettings,
    max_depth: Option<usize>,
) -> impl Iterator<Item = walkdir::DirEntry> {
    let include_hidden = settings.include_hidden;
    walker(dir, settings, max_depth)
        .into_iter()
        .filter_entry(move |e| include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
}

/// Every media file below `dir`, recursively, in file-name order.
pub fn media_files(dir: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    walk(dir, settings, None)
        .filter(|e| e.path().is_file() && is_media_file(e.path(), settings))
        .map(|e| e.into_path())
        .collect()
}

/// Media files sitting directly inside `dir`, in file-name order.
pub fn direct_media_files(dir: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    walk(dir, settings, Some(1))
        .filter(|e| e.depth() == 1)
        .filter(|e| e.path().is_file() && is_media_file(e.path(), settings))
        .map(|e| e.into_path())
        .collect()
}

/// `root` and all directories below it, parents before children.
pub fn directories(root: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    walk(root, settings, None)
        .filter(|e| e.path().is_dir())
        .map(|e| e.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_media_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_media_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_media_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_media_file(Path::new("/tmp/a.Flac"), &settings));
        assert!(!is_media_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_media_file(Path::new("/tmp/a"), &settings));

        let settings = LibrarySettings {
            extensions: vec![".OPUS".into()],
            ..LibrarySettings::default()
        };
        assert!(is_media_file(Path::new("/tmp/a.opus"), &settings));
        assert!(!is_media_file(Path::new("/tmp/a.mp3"), &settings));
    }

    #[test]
    fn media_files_recurses_and_sorts_by_name() {
        let dir = tempdir().unwrap();
        let disc = dir.path().join("CD2");
        fs::create_dir_all(&disc).unwrap();
        fs::write(dir.path().join("b.mp3"), b"x").unwrap();
        fs::write(dir.path().join("a.MP3"), b"x").unwrap();
        fs::write(dir.path().join("cover.jpg"), b"x").unwrap();
        fs::write(disc.join("c.mp3"), b"x").unwrap();

        let files = media_files(dir.path(), &LibrarySettings::default());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["c.mp3", "a.MP3", "b.mp3"]);
    }

    #[test]
    fn direct_media_files_ignores_subdirectories() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.path().join("root.mp3"), b"x").unwrap();
        fs::write(sub.join("child.mp3"), b"x").unwrap();

        let files = direct_media_files(dir.path(), &LibrarySettings::default());
        assert_eq!(files, vec![dir.path().join("root.mp3")]);
    }

    #[test]
    fn hidden_entries_are_skipped_unless_enabled() {
        let dir = tempdir().unwrap();
        let hidden = dir.path().join(".stash");
        fs::create_dir_all(&hidden).unwrap();
        fs::write(hidden.join("a.mp3"), b"x").unwrap();
        fs::write(dir.path().join(".b.mp3"), b"x").unwrap();

        assert!(media_files(dir.path(), &LibrarySettings::default()).is_empty());
        assert!(!directories(dir.path(), &LibrarySettings::default()).contains(&hidden));

        let settings = LibrarySettings {
            include_hidden: true,
            ..LibrarySettings::default()
        };
        assert_eq!(media_files(dir.path(), &settings).len(), 2);
    }
}
