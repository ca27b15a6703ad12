mod media_scanner;
mod path_validator;
mod uri_encoder;

pub use media_scanner::{
    MediaDirectory, is_media_file_name, list_media_files, scan_media_directories,
};
pub use path_validator::validate_directory_exists;
pub use uri_encoder::{FILE_URI_PREFIX, decode_file_uri, encode_file_uri};
