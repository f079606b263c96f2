//! Application settings and path constants.

use std::path::{Path, PathBuf};

use crate::error::DashError;


/// Dropdown value that selects every launch site.
pub const ALL_SITES: &str = "All Sites";

/// Dashboard page heading.
pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Payload slider bounds and step (kg).
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10_000.0;
pub const SLIDER_STEP: f64 = 1_000.0;

/// Default bind address for `launchdash serve`.
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

/// File name of the launch dataset.
pub const DATASET_FILE_NAME: &str = "spacex_launch_dash.csv";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "launchdash=info,tower_http=info";


/// Get the application data directory.
pub fn get_app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("launch-dash")
}


/// Candidate dataset locations, in lookup order.
pub fn dataset_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from(DATASET_FILE_NAME),
        get_app_data_dir().join(DATASET_FILE_NAME),
    ]
}


/// Resolve the dataset path.
///
/// An explicit path is used as-is and must exist. Otherwise the working
/// directory is tried first, then the application data directory.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Result<PathBuf, DashError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(DashError::DatasetNotFound(path.to_path_buf()));
    }

    let candidates = dataset_candidates();
    candidates
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or_else(|| DashError::DatasetNotFound(candidates[0].clone()))
}
