//! Feature components

pub mod playlist_builder;

pub use playlist_builder::PlaylistBuilder;
