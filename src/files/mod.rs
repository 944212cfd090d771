//! Filesystem access layer
//!
//! Resolves client sub-paths against the root directory and performs the two
//! read operations the server exposes: listing a directory and opening a file
//! for download. Nothing here knows about HTTP.

mod download;
mod listing;
mod root;

pub use download::open_download;
pub use listing::list_directory;
pub use root::RootDir;

use thiserror::Error;

/// Lookup failures, all of which the handlers answer with 404
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Directory operation not allowed on file: {0}")]
    NotADirectory(String),

    #[error("File operation not allowed on directory: {0}")]
    NotAFile(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
