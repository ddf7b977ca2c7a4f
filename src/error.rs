use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdvError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl EdvError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EdvError::Io {
            path: path.into(),
            source,
        }
    }
}
