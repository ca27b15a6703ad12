use crate::config::{HIDDEN_FILE_PREFIX, MEDIA_EXTENSION};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory holding at least one media file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDirectory {
    /// Path as walked; relative or absolute depending on the root given
    pub path: PathBuf,
    /// Direct child file names, sorted
    pub files: Vec<String>,
}

#[must_use]
pub fn is_media_file_name(name: &str) -> bool {
    name.ends_with(MEDIA_EXTENSION) && !name.starts_with(HIDDEN_FILE_PREFIX)
}

/// Walks `root` depth-first (itself included), yielding directories with media files
///
/// Directories without media are skipped. Read failures come out as `Err` and
/// the caller decides whether to stop. Siblings are visited in name order.
pub fn scan_media_directories(
    root: &Path,
) -> impl Iterator<Item = Result<MediaDirectory>> + use<> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => {
                Some(list_media_files(entry.path()).map(|files| MediaDirectory {
                    path: entry.into_path(),
                    files,
                }))
            }
            Ok(_) => None,
            Err(e) => Some(Err(
                anyhow::Error::new(e).context("Failed to walk directory tree"),
            )),
        })
        .filter(|result| !matches!(result, Ok(directory) if directory.files.is_empty()))
}

/// Lists qualifying media file names directly inside a directory
pub fn list_media_files(directory: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to read directory {}", directory.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", directory.display()))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!(
                "Skipping non UTF-8 file name in {}: {}",
                directory.display(),
                file_name.to_string_lossy()
            );
            continue;
        };
        if !is_media_file_name(name) || entry.path().is_dir() {
            continue;
        }
        files.push(name.to_string());
    }

    files.sort();
    debug!("{}: {} media files", directory.display(), files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_is_media_file_name() {
        assert!(is_media_file_name("lesson 01.mp4"));
        assert!(!is_media_file_name("._hidden.mp4"));
        assert!(!is_media_file_name("clip.mkv"));
        assert!(!is_media_file_name("clip.MP4"));
        assert!(!is_media_file_name("clip.mp4.part"));
    }

    #[test]
    fn test_list_media_files_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("b.mp4"));
        touch(&root.join("a.mp4"));
        touch(&root.join("._a.mp4"));
        touch(&root.join("notes.txt"));
        fs::create_dir(root.join("folder.mp4")).unwrap();

        let files = list_media_files(root).unwrap();
        assert_eq!(files, vec!["a.mp4".to_string(), "b.mp4".to_string()]);
    }

    #[test]
    fn test_scan_skips_directories_without_media() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a/1.mp4"));
        touch(&root.join("a/2.mp4"));
        touch(&root.join("b/readme.txt"));
        touch(&root.join("c/._only.mp4"));
        touch(&root.join("a/nested/3.mp4"));

        let directories: Vec<MediaDirectory> = scan_media_directories(root)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            directories,
            vec![
                MediaDirectory {
                    path: root.join("a"),
                    files: vec!["1.mp4".to_string(), "2.mp4".to_string()],
                },
                MediaDirectory {
                    path: root.join("a/nested"),
                    files: vec!["3.mp4".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_scan_includes_root_itself() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("3.mp4"));

        let directories: Vec<MediaDirectory> = scan_media_directories(root)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(directories.len(), 1);
        assert_eq!(directories[0].path, root);
        assert_eq!(directories[0].files, vec!["3.mp4".to_string()]);
    }

    #[test]
    fn test_scan_missing_root_yields_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let mut scan = scan_media_directories(&missing);
        assert!(scan.next().unwrap().is_err());
    }

    #[test]
    fn test_directory_vanishing_mid_walk_yields_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a/1.mp4"));
        touch(&root.join("b/2.mp4"));
        touch(&root.join("c/3.mp4"));

        let mut scan = scan_media_directories(root);
        let first = scan.next().unwrap().unwrap();
        assert_eq!(first.path, root.join("a"));

        // `b` is already in the walker's listing of the root but not yet read
        fs::remove_dir_all(root.join("b")).unwrap();

        assert!(scan.next().unwrap().is_err());
    }
}
