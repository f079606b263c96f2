//! Sites command - list dropdown options and per-site statistics.

use std::path::Path;

use anyhow::Result;

use crate::aggregation::{filter_by_site, site_summaries};
use crate::models::SiteSelection;
use crate::visualization::render_site_table;

use super::load_dataset;


/// Run the sites command.
pub fn run(data: Option<&Path>) -> Result<()> {
    let dataset = load_dataset(data)?;

    println!("Site options:");
    for option in dataset.site_options() {
        println!("  {option}");
    }
    println!();

    let all = filter_by_site(dataset.records(), &SiteSelection::All);
    println!("{}", render_site_table(&site_summaries(&all)));

    if let Some(bounds) = dataset.payload_bounds() {
        println!("\nPayload range: {bounds}");
    }

    Ok(())
}
