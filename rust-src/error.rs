//! Domain errors for dataset loading and input parsing.

use std::path::PathBuf;

use thiserror::Error;


#[derive(Debug, Error)]
pub enum DashError {
    #[error("dataset not found at {0}")]
    DatasetNotFound(PathBuf),

    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {path} is missing required column \"{column}\"")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("invalid payload range \"{0}\" (expected LOW-HIGH, e.g. 0-10000)")]
    InvalidRange(String),
}
