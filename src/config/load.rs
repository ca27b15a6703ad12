use crate::config::types::{DEFAULT_PLAYLIST_NAME, NamingKind, NamingMode, PLAYLIST_EXTENSION};
use anyhow::{Result, bail};
use std::ffi::OsStr;
use std::path::Path;

/// Builds the naming mode from command line options
///
/// `--playlist-name` without `--mode` implies the fixed mode.
pub fn resolve_naming_mode(
    kind: Option<NamingKind>,
    playlist_name: Option<&str>,
) -> Result<NamingMode> {
    let kind = kind.unwrap_or(if playlist_name.is_some() {
        NamingKind::Fixed
    } else {
        NamingKind::PerDirectory
    });

    match kind {
        NamingKind::PerDirectory => {
            if playlist_name.is_some() {
                bail!("--playlist-name only applies to the fixed naming mode");
            }
            Ok(NamingMode::PerDirectory)
        }
        NamingKind::Fixed => {
            let name = playlist_name.unwrap_or(DEFAULT_PLAYLIST_NAME).trim();
            validate_playlist_name(name)?;
            Ok(NamingMode::Fixed(name.to_string()))
        }
    }
}

pub fn validate_playlist_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Playlist name must not be empty");
    }
    if name.contains(['/', '\\']) || Path::new(name).file_name() != Some(OsStr::new(name)) {
        bail!("Playlist name must be a bare file name: {name}");
    }
    let has_extension = Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PLAYLIST_EXTENSION));
    if !has_extension {
        bail!("Playlist name must end with .{PLAYLIST_EXTENSION}: {name}");
    }
    Ok(())
}
