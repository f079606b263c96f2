//! CSV loader for the launch records dataset.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::{ALL_SITES, SLIDER_MAX, SLIDER_MIN};
use crate::error::DashError;
use crate::models::{LaunchRecord, PayloadRange};


/// Columns every dataset must carry.
const REQUIRED_COLUMNS: [&str; 6] = [
    "Flight Number",
    "Launch Site",
    "class",
    "Payload Mass (kg)",
    "Booster Version",
    "Booster Version Category",
];


/// The loaded launch dataset, read once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    pub loaded_at: DateTime<Utc>,
}


impl Dataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self {
            records,
            loaded_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in the order they first appear.
    pub fn sites(&self) -> Vec<String> {
        let mut sites: Vec<String> = Vec::new();
        for record in &self.records {
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }
        sites
    }

    /// Dropdown options: every site, then "All Sites".
    pub fn site_options(&self) -> Vec<String> {
        let mut options = self.sites();
        options.push(ALL_SITES.to_string());
        options
    }

    /// Smallest and largest payload in the dataset.
    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        let mut payloads = self.records.iter().map(|r| r.payload_mass_kg);
        let first = payloads.next()?;
        let (low, high) = payloads.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(PayloadRange::new(low, high))
    }

    /// Initial slider value: the payload bounds, or the full slider when empty.
    pub fn initial_payload_range(&self) -> PayloadRange {
        self.payload_bounds()
            .unwrap_or_else(|| PayloadRange::new(SLIDER_MIN, SLIDER_MAX))
    }
}


/// Load the dataset from a CSV file.
pub fn load_csv(path: &Path) -> Result<Dataset, DashError> {
    if !path.is_file() {
        return Err(DashError::DatasetNotFound(path.to_path_buf()));
    }

    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| DashError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let records = read_records(reader, path)?;
    debug!(path = %path.display(), rows = records.len(), "loaded launch dataset");

    Ok(Dataset::from_records(records))
}


/// Deserialize rows, skipping the ones that cannot be parsed.
fn read_records<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Vec<LaunchRecord>, DashError> {
    let headers = reader.headers().map_err(|source| DashError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DashError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for (row_num, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                // Header is line 1, first data row is line 2
                warn!(
                    path = %path.display(),
                    line = row_num + 2,
                    error = %e,
                    "skipping malformed launch record"
                );
            }
        }
    }

    Ok(records)
}
