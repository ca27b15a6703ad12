//! XSPF playlist document
//!
//! Only the minimal structure VLC needs: a title and a trackList.

use crate::config::PLAYLIST_TITLE;
use crate::tools::{MediaDirectory, encode_file_uri};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

pub const XSPF_NAMESPACE: &str = "http://xspf.org/ns/0/";
pub const XSPF_VERSION: &str = "1";

/// A single track in a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    /// Percent-encoded `file:///` URI
    pub location: String,
    /// Raw file name, not encoded
    pub title: String,
}

impl TrackEntry {
    pub fn from_media_file(directory: &Path, file_name: &str) -> Result<Self> {
        Ok(Self {
            location: encode_file_uri(&directory.join(file_name))?,
            title: file_name.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub title: String,
    pub tracks: Vec<TrackEntry>,
}

impl Playlist {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: PLAYLIST_TITLE.to_string(),
            tracks: Vec::new(),
        }
    }

    /// Builds one track per file, keeping the directory's file order
    pub fn from_media_directory(directory: &MediaDirectory) -> Result<Self> {
        let mut playlist = Self::new();
        for file_name in &directory.files {
            playlist.add_track(TrackEntry::from_media_file(&directory.path, file_name)?);
        }
        Ok(playlist)
    }

    pub fn add_track(&mut self, track: TrackEntry) {
        self.tracks.push(track);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Serializes to XSPF (UTF-8 with an XML declaration)
    #[must_use]
    pub fn to_xspf(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        xml.push_str(&format!(
            "<playlist xmlns=\"{XSPF_NAMESPACE}\" version=\"{XSPF_VERSION}\">\n"
        ));
        xml.push_str(&format!("  <title>{}</title>\n", escape_xml(&self.title)));
        xml.push_str("  <trackList>\n");
        for track in &self.tracks {
            xml.push_str("    <track>\n");
            xml.push_str(&format!(
                "      <location>{}</location>\n",
                escape_xml(&track.location)
            ));
            xml.push_str(&format!(
                "      <title>{}</title>\n",
                escape_xml(&track.title)
            ));
            xml.push_str("    </track>\n");
        }
        xml.push_str("  </trackList>\n");
        xml.push_str("</playlist>\n");
        xml
    }

    /// Writes the playlist, replacing any existing file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_xspf())
            .with_context(|| format!("Failed to write playlist {}", path.display()))
    }
}

/// Escapes `&`, `<` and `>` in element text
fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
