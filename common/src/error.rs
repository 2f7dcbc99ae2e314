use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors. A missing measurement is not one of these, it is an
/// absent [`Option`] flowing through the derived views.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("results unavailable at {}: {source}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: DataError,
    },
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
    #[error("thread count key {0:?} is not a positive integer")]
    ThreadKey(String),
}
