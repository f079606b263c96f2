//! Data access layer for the launch records dataset.

mod csv_loader;

pub use csv_loader::{load_csv, Dataset};
