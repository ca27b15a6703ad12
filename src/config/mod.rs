pub mod load;
pub mod types;

pub use load::resolve_naming_mode;
pub use types::{
    Config, DEFAULT_PLAYLIST_NAME, HIDDEN_FILE_PREFIX, MEDIA_EXTENSION, NamingKind, NamingMode,
    PLAYLIST_EXTENSION, PLAYLIST_TITLE, ROOT_ENV_VAR, ROOT_PLAYLIST_STEM,
};
