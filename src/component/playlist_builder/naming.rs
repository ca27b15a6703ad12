use crate::config::{NamingMode, PLAYLIST_EXTENSION, ROOT_PLAYLIST_STEM};
use anyhow::{Context, Result};
use std::path::Path;

/// Picks the playlist file name for a directory under the given naming mode
///
/// A directory without a name (`/`, `.`, a drive root) gets `root.xspf`.
pub fn playlist_file_name(naming_mode: &NamingMode, directory: &Path) -> Result<String> {
    match naming_mode {
        NamingMode::PerDirectory => {
            let stem = match directory.file_name() {
                Some(name) => name.to_str().with_context(|| {
                    format!("Directory name is not valid UTF-8: {}", directory.display())
                })?,
                None => ROOT_PLAYLIST_STEM,
            };
            Ok(format!("{stem}.{PLAYLIST_EXTENSION}"))
        }
        NamingMode::Fixed(name) => Ok(name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_directory_uses_basename() {
        assert_eq!(
            playlist_file_name(&NamingMode::PerDirectory, Path::new("R/a")).unwrap(),
            "a.xspf"
        );
        assert_eq!(
            playlist_file_name(&NamingMode::PerDirectory, Path::new("/media/Season 1/")).unwrap(),
            "Season 1.xspf"
        );
    }

    #[test]
    fn test_per_directory_falls_back_to_root() {
        assert_eq!(
            playlist_file_name(&NamingMode::PerDirectory, Path::new("/")).unwrap(),
            "root.xspf"
        );
        assert_eq!(
            playlist_file_name(&NamingMode::PerDirectory, Path::new(".")).unwrap(),
            "root.xspf"
        );
        assert_eq!(
            playlist_file_name(&NamingMode::PerDirectory, Path::new("")).unwrap(),
            "root.xspf"
        );
    }

    #[test]
    fn test_fixed_name_is_reused() {
        let mode = NamingMode::fixed_default();
        assert_eq!(playlist_file_name(&mode, Path::new("R/a")).unwrap(), "playlist.xspf");
        assert_eq!(playlist_file_name(&mode, Path::new("R/b")).unwrap(), "playlist.xspf");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_directory_name_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let directory = Path::new(OsStr::from_bytes(b"R/bad\xFFdir"));
        assert!(playlist_file_name(&NamingMode::PerDirectory, directory).is_err());
        assert_eq!(
            playlist_file_name(&NamingMode::fixed_default(), directory).unwrap(),
            "playlist.xspf"
        );
    }
}
