use anyhow::Result;
use std::io::{Error, ErrorKind};
use std::path::Path;

/// Checks that the path exists and is a directory
///
/// Errors wrap a `std::io::Error` of kind `NotFound` or `NotADirectory`,
/// reachable through `downcast_ref`.
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::new(
            ErrorKind::NotFound,
            format!("Path does not exist: {}", path.display()),
        )
        .into());
    }
    if !path.is_dir() {
        return Err(Error::new(
            ErrorKind::NotADirectory,
            format!("Path is not a directory: {}", path.display()),
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn error_kind(result: Result<()>) -> ErrorKind {
        result
            .unwrap_err()
            .downcast_ref::<Error>()
            .map(Error::kind)
            .unwrap()
    }

    #[test]
    fn test_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory_exists(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        assert_eq!(
            error_kind(validate_directory_exists(&missing)),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_file_is_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("video.mp4");
        std::fs::write(&file, b"").unwrap();
        assert_eq!(
            error_kind(validate_directory_exists(&file)),
            ErrorKind::NotADirectory
        );
    }
}
