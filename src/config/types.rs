use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Extension a media file must end with
pub const MEDIA_EXTENSION: &str = ".mp4";
/// Prefix of the metadata files macOS leaves on non-HFS volumes
pub const HIDDEN_FILE_PREFIX: &str = "._";
pub const PLAYLIST_EXTENSION: &str = "xspf";
pub const PLAYLIST_TITLE: &str = "VLC Playlist";
pub const DEFAULT_PLAYLIST_NAME: &str = "playlist.xspf";
/// Playlist stem used when the directory has no name (e.g. `/`)
pub const ROOT_PLAYLIST_STEM: &str = "root";
pub const ROOT_ENV_VAR: &str = "VLC_PLAYLIST_ROOT";

/// Naming choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamingKind {
    /// `<directory name>.xspf`
    PerDirectory,
    /// The same file name in every directory
    Fixed,
}

/// Playlist file naming policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NamingMode {
    #[default]
    PerDirectory,
    Fixed(String),
}

impl NamingMode {
    #[must_use]
    pub fn fixed_default() -> Self {
        Self::Fixed(DEFAULT_PLAYLIST_NAME.to_string())
    }
}

impl fmt::Display for NamingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerDirectory => write!(f, "per-directory (<directory>.{PLAYLIST_EXTENSION})"),
            Self::Fixed(name) => write!(f, "fixed ({name})"),
        }
    }
}

/// Settings for one run, from the command line, the environment or the menu
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub naming_mode: NamingMode,
}

impl Config {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, naming_mode: NamingMode) -> Self {
        Self {
            root: root.into(),
            naming_mode,
        }
    }
}
