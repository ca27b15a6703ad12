//! VLC playlist component
//!
//! Writes an XSPF playlist into every folder that holds `.mp4` files

mod main;
mod naming;
mod playlist;

pub use main::{PlaylistBuilder, WrittenPlaylist, generate};
pub use naming::playlist_file_name;
pub use playlist::{Playlist, TrackEntry, XSPF_NAMESPACE, XSPF_VERSION};
