//! CLI command implementations.

pub mod export;
pub mod serve;
pub mod show;
pub mod sites;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{resolve_dataset_path, DATASET_FILE_NAME};
use crate::data::{load_csv, Dataset};


/// Resolve and load the dataset shared by every command.
pub fn load_dataset(explicit: Option<&Path>) -> Result<Dataset> {
    let path = resolve_dataset_path(explicit).with_context(|| {
        format!("Pass --data <PATH> or place {DATASET_FILE_NAME} in the working directory")
    })?;

    let dataset = load_csv(&path)?;
    info!(path = %path.display(), records = dataset.len(), "dataset loaded");

    Ok(dataset)
}
