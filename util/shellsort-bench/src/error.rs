use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = BenchError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum BenchError {
    /// The external sort executable could not be started or exited unsuccessfully.
    #[error("external executable `{}` failed: {message}", program.display())]
    ExternalProcess { program: PathBuf, message: String },
    #[error(transparent)]
    Sort(#[from] shellsort::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("failed to draw chart: {0}")]
    Plot(String),
}
