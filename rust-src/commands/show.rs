//! Show command - terminal rendering of the dashboard.

use std::path::Path;

use anyhow::Result;

use crate::aggregation::{filter_by_site, site_summaries};
use crate::callbacks::{update_pie_chart, update_scatter_chart, DashboardLayout};
use crate::models::{PayloadRange, SiteSelection};
use crate::visualization::render_dashboard;

use super::load_dataset;


/// Run the show command.
pub fn run(data: Option<&Path>, site: Option<String>, payload: Option<PayloadRange>) -> Result<()> {
    let dataset = load_dataset(data)?;
    let layout = DashboardLayout::from_dataset(&dataset);

    let selection = site
        .as_deref()
        .map(SiteSelection::from_value)
        .unwrap_or_default();
    let range = payload.unwrap_or_else(|| layout.initial_range());

    let filtered = filter_by_site(dataset.records(), &selection);
    let summaries = site_summaries(&filtered);

    let pie = update_pie_chart(&dataset, &selection);
    let scatter = update_scatter_chart(&dataset, &selection, &range);

    render_dashboard(layout.title, &summaries, &pie, &scatter, dataset.loaded_at);

    Ok(())
}
