//! Dashboard input values: the selected site and the selected payload range.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ALL_SITES;
use crate::error::DashError;


/// Value of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}


impl SiteSelection {
    /// Interpret a raw dropdown value. `"All Sites"` selects every site.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Check whether a launch site passes this selection.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }

    /// The dropdown value for this selection.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }
}


impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}


/// Value of the payload range slider, inclusive on both ends (kg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}


impl PayloadRange {
    /// Build a range; bounds given in the wrong order are swapped.
    pub fn new(low: f64, high: f64) -> Self {
        if low > high {
            Self { low: high, high: low }
        } else {
            Self { low, high }
        }
    }

    pub fn contains(&self, payload: f64) -> bool {
        payload >= self.low && payload <= self.high
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}


impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} kg", self.low, self.high)
    }
}


fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*(?:-|\.\.|,)\s*(\d+(?:\.\d+)?)\s*(?:kg)?\s*$")
            .expect("payload range pattern is valid")
    })
}


impl FromStr for PayloadRange {
    type Err = DashError;

    /// Accepts `LOW-HIGH`, `LOW..HIGH` or `LOW,HIGH`, optionally suffixed with `kg`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = range_pattern()
            .captures(s)
            .ok_or_else(|| DashError::InvalidRange(s.to_string()))?;

        let low = caps[1]
            .parse::<f64>()
            .map_err(|_| DashError::InvalidRange(s.to_string()))?;
        let high = caps[2]
            .parse::<f64>()
            .map_err(|_| DashError::InvalidRange(s.to_string()))?;

        Ok(PayloadRange::new(low, high))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_selection_from_value() {
        assert_eq!(SiteSelection::from_value("All Sites"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_value("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
    }

    #[test]
    fn test_site_selection_matches() {
        let site = SiteSelection::Site("VAFB SLC-4E".to_string());
        assert!(site.matches("VAFB SLC-4E"));
        assert!(!site.matches("CCAFS LC-40"));
        assert!(SiteSelection::All.matches("anything"));
    }

    #[test]
    fn test_payload_range_swaps_reversed_bounds() {
        let range = PayloadRange::new(8000.0, 2000.0);
        assert_eq!(range.low, 2000.0);
        assert_eq!(range.high, 8000.0);
    }

    #[test]
    fn test_payload_range_contains_is_inclusive() {
        let range = PayloadRange::new(1000.0, 5000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(!range.contains(5000.5));
        assert!(!range.contains(999.0));
    }

    #[test]
    fn test_payload_range_parse_forms() {
        let dash: PayloadRange = "0-10000".parse().unwrap();
        let dots: PayloadRange = "2500..7500".parse().unwrap();
        let comma: PayloadRange = " 500.5 , 9600 kg".parse().unwrap();

        assert_eq!(dash.as_array(), [0.0, 10000.0]);
        assert_eq!(dots.as_array(), [2500.0, 7500.0]);
        assert_eq!(comma.as_array(), [500.5, 9600.0]);
    }

    #[test]
    fn test_payload_range_parse_rejects_garbage() {
        assert!("heavy".parse::<PayloadRange>().is_err());
        assert!("100".parse::<PayloadRange>().is_err());
    }
}
