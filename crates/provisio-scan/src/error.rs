use std::path::PathBuf;

use provisio_core::DocumentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read base directory {path}: {source}")]
    BaseDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path}: {source}")]
    Document {
        path: PathBuf,
        source: DocumentError,
    },
}
