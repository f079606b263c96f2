//! Aggregation layer for launch statistics.

mod launch_stats;

pub use launch_stats::{
    SiteSummary,
    filter_by_payload,
    filter_by_site,
    outcome_counts,
    series_by_booster_category,
    site_summaries,
    successes_by_site,
};
