//! Reactive update logic: dashboard inputs in, chart figures out.
//!
//! Each callback is a pure function of the dataset and the current input
//! values, so any front end (web page, terminal, exporter) can re-run it
//! whenever the site dropdown or the payload slider changes.

mod layout;

use tracing::debug;

use crate::aggregation::{
    filter_by_payload,
    filter_by_site,
    outcome_counts,
    series_by_booster_category,
    successes_by_site,
};
use crate::data::Dataset;
use crate::models::{PayloadRange, SiteSelection};
use crate::visualization::{PieFigure, ScatterFigure};

pub use layout::DashboardLayout;


/// Recompute the success pie for the selected site.
///
/// For all sites the pie splits the successful launches by site; for a
/// single site it splits that site's launches into successes and failures.
pub fn update_pie_chart(dataset: &Dataset, selection: &SiteSelection) -> PieFigure {
    let filtered = filter_by_site(dataset.records(), selection);

    let figure = match selection {
        SiteSelection::All => PieFigure::new(
            "Success Rates for all the Sites",
            successes_by_site(&filtered),
        ),
        SiteSelection::Site(site) => PieFigure::new(
            format!("Success Rates for {site}"),
            outcome_counts(&filtered),
        ),
    };

    debug!(site = %selection, slices = figure.slices.len(), total = figure.total, "pie chart updated");
    figure
}


/// Recompute the payload/outcome scatter for the selected site and payload range.
pub fn update_scatter_chart(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ScatterFigure {
    let by_site = filter_by_site(dataset.records(), selection);
    let in_range = filter_by_payload(&by_site, range);

    let title = match selection {
        SiteSelection::All => "Payload vs. Outcome for all Sites".to_string(),
        SiteSelection::Site(site) => format!("Payload vs. Outcome for {site}"),
    };

    let figure = ScatterFigure::new(title, *range, series_by_booster_category(&in_range));

    debug!(
        site = %selection,
        low = range.low,
        high = range.high,
        points = figure.point_count,
        "scatter chart updated"
    );
    figure
}
