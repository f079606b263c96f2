//! Launch record model for a single row of the launch dataset.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};


/// Outcome of a launch, stored as `class` (1 = success, 0 = failure) in the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}


impl Outcome {
    /// Numeric class as it appears in the dataset.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    /// Label shown on chart slices and legends.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}


impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}


impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Some exports write the class column as a float ("1.0")
        let raw = f64::deserialize(deserializer)?;
        if raw == 1.0 {
            Ok(Outcome::Success)
        } else if raw == 0.0 {
            Ok(Outcome::Failure)
        } else {
            Err(serde::de::Error::custom(format!(
                "class must be 0 or 1, got {raw}"
            )))
        }
    }
}


/// A single launch from the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number")]
    pub flight_number: u32,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    pub booster_version: String,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}


impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
