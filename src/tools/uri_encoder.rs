use anyhow::{Context, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::path::{Path, PathBuf};

pub const FILE_URI_PREFIX: &str = "file:///";

/// Everything except unreserved characters and `/` is escaped.
const PATH_ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Turns a walked path into a `file:///` URI.
///
/// Backslashes become `/` before percent-encoding. The path is kept as given
/// (relative or absolute), so an absolute Unix path yields `file:////...`.
/// Fails on paths that are not valid UTF-8.
pub fn encode_file_uri(path: &Path) -> Result<String> {
    let path_str = path
        .to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))?;
    let normalized = path_str.replace('\\', "/");
    Ok(format!(
        "{FILE_URI_PREFIX}{}",
        utf8_percent_encode(&normalized, PATH_ESCAPE_SET)
    ))
}

/// Inverse of `encode_file_uri`. `None` on a foreign prefix or non UTF-8 payload.
#[must_use]
pub fn decode_file_uri(uri: &str) -> Option<PathBuf> {
    let encoded = uri.strip_prefix(FILE_URI_PREFIX)?;
    let decoded = percent_decode_str(encoded).decode_utf8().ok()?;
    Some(PathBuf::from(decoded.into_owned()))
}
