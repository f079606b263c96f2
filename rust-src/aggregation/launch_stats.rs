//! Filtering and aggregation over launch records.

use crate::models::{LaunchRecord, Outcome, PayloadRange, SiteSelection};
use crate::visualization::{slices_from_counts, PieSlice, ScatterPoint, ScatterSeries};


/// Per-site summary shown by the terminal dashboard and `/api/summary`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SiteSummary {
    pub site: String,
    pub launches: u64,
    pub successes: u64,
    pub failures: u64,
    /// Successes over launches, 0-1.
    pub success_rate: f64,
    pub min_payload: f64,
    pub max_payload: f64,
}


/// Keep the records launched from the selected site.
pub fn filter_by_site<'a>(records: &'a [LaunchRecord], selection: &SiteSelection) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| selection.matches(&r.launch_site))
        .collect()
}


/// Keep the records whose payload lies inside the range.
pub fn filter_by_payload<'a>(records: &[&'a LaunchRecord], range: &PayloadRange) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .copied()
        .filter(|r| range.contains(r.payload_mass_kg))
        .collect()
}


/// Successful launches per site, in first-seen site order.
pub fn successes_by_site(records: &[&LaunchRecord]) -> Vec<PieSlice> {
    let mut counts: Vec<(String, u64)> = Vec::new();

    for record in records.iter().filter(|r| r.is_success()) {
        match counts.iter_mut().find(|(site, _)| site == &record.launch_site) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.launch_site.clone(), 1)),
        }
    }

    slices_from_counts(counts)
}


/// Success and failure counts, largest first (Success wins ties).
pub fn outcome_counts(records: &[&LaunchRecord]) -> Vec<PieSlice> {
    let successes = records.iter().filter(|r| r.is_success()).count() as u64;
    let failures = records.len() as u64 - successes;

    let mut counts = vec![
        (Outcome::Success.label().to_string(), successes),
        (Outcome::Failure.label().to_string(), failures),
    ];
    // Stable sort keeps Success ahead on equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    slices_from_counts(counts)
}


/// Group records into scatter series keyed by booster version category.
pub fn series_by_booster_category(records: &[&LaunchRecord]) -> Vec<ScatterSeries> {
    let mut series: Vec<ScatterSeries> = Vec::new();

    for record in records {
        let point = ScatterPoint {
            x: record.payload_mass_kg,
            y: record.outcome.class(),
            flight_number: record.flight_number,
            booster_version: record.booster_version.clone(),
        };

        match series.iter_mut().find(|s| s.name == record.booster_version_category) {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                name: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    series
}


/// Summarize launches per site, in first-seen site order.
pub fn site_summaries(records: &[&LaunchRecord]) -> Vec<SiteSummary> {
    let mut summaries: Vec<SiteSummary> = Vec::new();

    for record in records {
        let idx = match summaries.iter().position(|s| s.site == record.launch_site) {
            Some(idx) => idx,
            None => {
                summaries.push(SiteSummary {
                    site: record.launch_site.clone(),
                    launches: 0,
                    successes: 0,
                    failures: 0,
                    success_rate: 0.0,
                    min_payload: record.payload_mass_kg,
                    max_payload: record.payload_mass_kg,
                });
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[idx];
        summary.launches += 1;
        if record.is_success() {
            summary.successes += 1;
        } else {
            summary.failures += 1;
        }
        summary.min_payload = summary.min_payload.min(record.payload_mass_kg);
        summary.max_payload = summary.max_payload.max(record.payload_mass_kg);
    }

    for summary in &mut summaries {
        summary.success_rate = summary.successes as f64 / summary.launches as f64;
    }

    summaries
}


#[cfg(test)]
mod tests {
    use super::*;

    fn record(flight: u32, site: &str, success: bool, payload: f64, category: &str) -> LaunchRecord {
        LaunchRecord {
            flight_number: flight,
            launch_site: site.to_string(),
            outcome: if success { Outcome::Success } else { Outcome::Failure },
            payload_mass_kg: payload,
            booster_version: format!("F9 {category} B{flight:04}"),
            booster_version_category: category.to_string(),
        }
    }

    fn sample() -> Vec<LaunchRecord> {
        vec![
            record(1, "CCAFS LC-40", false, 0.0, "v1.0"),
            record(2, "CCAFS LC-40", true, 525.0, "v1.0"),
            record(3, "VAFB SLC-4E", false, 500.0, "v1.1"),
            record(4, "KSC LC-39A", true, 2490.0, "FT"),
            record(5, "KSC LC-39A", true, 5300.0, "FT"),
            record(6, "KSC LC-39A", false, 6070.0, "B4"),
            record(7, "CCAFS LC-40", true, 9600.0, "B5"),
        ]
    }

    #[test]
    fn test_filter_by_site_returns_only_that_site() {
        let records = sample();
        let selection = SiteSelection::Site("KSC LC-39A".to_string());
        let filtered = filter_by_site(&records, &selection);

        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.launch_site == "KSC LC-39A"));
    }

    #[test]
    fn test_filter_all_sites_returns_everything() {
        let records = sample();
        let filtered = filter_by_site(&records, &SiteSelection::All);
        assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn test_filter_unknown_site_is_empty() {
        let records = sample();
        let filtered = filter_by_site(&records, &SiteSelection::Site("Boca Chica".to_string()));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_by_payload_inclusive() {
        let records = sample();
        let all = filter_by_site(&records, &SiteSelection::All);
        let filtered = filter_by_payload(&all, &PayloadRange::new(525.0, 5300.0));

        let flights: Vec<u32> = filtered.iter().map(|r| r.flight_number).collect();
        assert_eq!(flights, vec![2, 4, 5]);
    }

    #[test]
    fn test_successes_by_site() {
        let records = sample();
        let all = filter_by_site(&records, &SiteSelection::All);
        let slices = successes_by_site(&all);

        // VAFB has no successes and drops out
        let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(slices[0].value, 2);
        assert_eq!(slices[1].value, 2);

        let total: u64 = slices.iter().map(|s| s.value).sum();
        assert_eq!(total, all.iter().filter(|r| r.is_success()).count() as u64);
    }

    #[test]
    fn test_outcome_counts_sum_to_rows() {
        let records = sample();
        let site = filter_by_site(&records, &SiteSelection::Site("KSC LC-39A".to_string()));
        let slices = outcome_counts(&site);

        assert_eq!(slices[0].label, "Success");
        assert_eq!(slices[0].value, 2);
        assert_eq!(slices[1].label, "Failure");
        assert_eq!(slices[1].value, 1);
        assert_eq!(slices.iter().map(|s| s.value).sum::<u64>(), site.len() as u64);
    }

    #[test]
    fn test_outcome_counts_failure_first_when_larger() {
        let records = vec![
            record(1, "A", false, 0.0, "v1.0"),
            record(2, "A", false, 0.0, "v1.0"),
            record(3, "A", true, 0.0, "v1.0"),
        ];
        let refs: Vec<&LaunchRecord> = records.iter().collect();
        let slices = outcome_counts(&refs);

        assert_eq!(slices[0].label, "Failure");
        assert_eq!(slices[0].value, 2);
    }

    #[test]
    fn test_outcome_counts_tie_keeps_success_first() {
        let records = vec![
            record(1, "A", false, 0.0, "v1.0"),
            record(2, "A", true, 0.0, "v1.0"),
        ];
        let refs: Vec<&LaunchRecord> = records.iter().collect();
        let slices = outcome_counts(&refs);

        assert_eq!(slices[0].label, "Success");
    }

    #[test]
    fn test_empty_aggregations() {
        let empty: Vec<&LaunchRecord> = Vec::new();
        assert!(successes_by_site(&empty).is_empty());
        assert!(outcome_counts(&empty).is_empty());
        assert!(series_by_booster_category(&empty).is_empty());
        assert!(site_summaries(&empty).is_empty());
    }

    #[test]
    fn test_series_by_booster_category() {
        let records = sample();
        let all = filter_by_site(&records, &SiteSelection::All);
        let series = series_by_booster_category(&all);

        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["v1.0", "v1.1", "FT", "B4", "B5"]);
        assert_eq!(series[2].points.len(), 2);
        assert_eq!(series[2].points[0].x, 2490.0);
        assert_eq!(series[2].points[0].y, 1);
    }

    #[test]
    fn test_site_summaries() {
        let records = sample();
        let all = filter_by_site(&records, &SiteSelection::All);
        let summaries = site_summaries(&all);

        assert_eq!(summaries.len(), 3);
        let ksc = &summaries[2];
        assert_eq!(ksc.site, "KSC LC-39A");
        assert_eq!(ksc.launches, 3);
        assert_eq!(ksc.successes, 2);
        assert_eq!(ksc.failures, 1);
        assert!((ksc.success_rate - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(ksc.min_payload, 2490.0);
        assert_eq!(ksc.max_payload, 6070.0);
    }
}
