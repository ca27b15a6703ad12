//! Playlist builder
//!
//! Walks a directory tree and writes one playlist per directory holding media files

use super::naming::playlist_file_name;
use super::playlist::Playlist;
use crate::config::{Config, MEDIA_EXTENSION, NamingMode};
use crate::tools::{MediaDirectory, scan_media_directories, validate_directory_exists};
use anyhow::Result;
use console::style;
use log::{info, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A playlist written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPlaylist {
    pub name: String,
    pub directory: PathBuf,
    pub path: PathBuf,
    pub track_count: usize,
}

impl fmt::Display for WrittenPlaylist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Playlist '{}' created in '{}' with {} {} files.",
            self.name,
            self.directory.display(),
            self.track_count,
            MEDIA_EXTENSION
        )
    }
}

/// Playlist builder
pub struct PlaylistBuilder {
    naming_mode: NamingMode,
    shutdown_signal: Arc<AtomicBool>,
}

impl PlaylistBuilder {
    pub const fn new(naming_mode: NamingMode, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            naming_mode,
            shutdown_signal,
        }
    }

    pub fn from_config(config: &Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self::new(config.naming_mode.clone(), shutdown_signal)
    }

    /// Generates playlists and prints a summary
    pub fn run(&self, root: &Path) -> Result<Vec<WrittenPlaylist>> {
        println!("{}", style("=== VLC Playlist Generator ===").cyan().bold());
        println!(
            "{} {}",
            style("Naming mode:").dim(),
            style(&self.naming_mode).cyan()
        );

        let written = self.generate(root)?;
        self.print_summary(&written);
        Ok(written)
    }

    /// Walks `root` and writes playlists, printing one progress line per playlist
    ///
    /// Any read or write error aborts the remaining walk; playlists already
    /// written stay in place. On shutdown the walk stops before the next
    /// directory and returns what was written so far.
    pub fn generate(&self, root: &Path) -> Result<Vec<WrittenPlaylist>> {
        validate_directory_exists(root)?;

        let mut written = Vec::new();
        for directory in scan_media_directories(root) {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!(
                    "Interrupted after {} playlists, remaining directories skipped",
                    written.len()
                );
                break;
            }

            let report = self.write_playlist(&directory?)?;
            println!("{report}");
            written.push(report);
        }

        info!(
            "Wrote {} playlists under {}",
            written.len(),
            root.display()
        );
        Ok(written)
    }

    fn write_playlist(&self, directory: &MediaDirectory) -> Result<WrittenPlaylist> {
        let playlist = Playlist::from_media_directory(directory)?;
        let name = playlist_file_name(&self.naming_mode, &directory.path)?;
        let path = directory.path.join(&name);

        playlist.write_to(&path)?;
        info!("{} ({} tracks)", path.display(), playlist.len());

        Ok(WrittenPlaylist {
            name,
            directory: directory.path.clone(),
            path,
            track_count: playlist.len(),
        })
    }

    fn print_summary(&self, written: &[WrittenPlaylist]) {
        let track_total: usize = written.iter().map(|p| p.track_count).sum();

        println!();
        if written.is_empty() {
            println!(
                "{}",
                style(format!("No {MEDIA_EXTENSION} files found")).yellow()
            );
            return;
        }
        println!(
            "{}",
            style(format!(
                "Done: {} playlists, {} tracks",
                written.len(),
                track_total
            ))
            .green()
        );
        if self.shutdown_signal.load(Ordering::SeqCst) {
            println!("{}", style("Run was interrupted").yellow());
        }
    }
}

/// Generates playlists with the given naming mode, without shutdown handling
pub fn generate(root: &Path, naming_mode: NamingMode) -> Result<Vec<WrittenPlaylist>> {
    PlaylistBuilder::new(naming_mode, Arc::new(AtomicBool::new(false))).generate(root)
}
