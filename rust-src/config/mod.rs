//! Configuration and settings for the launch dashboard.

mod settings;

pub use settings::{
    resolve_dataset_path,
    ALL_SITES,
    DASHBOARD_TITLE,
    DATASET_FILE_NAME,
    DEFAULT_HOST,
    DEFAULT_LOG_FILTER,
    DEFAULT_PORT,
    SLIDER_MAX,
    SLIDER_MIN,
    SLIDER_STEP,
};
