//! Export command for chart images.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::callbacks::{update_pie_chart, update_scatter_chart, DashboardLayout};
use crate::models::{PayloadRange, SiteSelection};
use crate::visualization::{export_png, export_svg, open_file, pie_svg, scatter_svg};

use super::load_dataset;


/// Options for the export command.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub site: Option<String>,
    pub payload: Option<PayloadRange>,
    pub svg: bool,
    pub output: Option<PathBuf>,
    pub open: bool,
}


/// Run the export command.
pub fn run(data: Option<&Path>, options: ExportOptions) -> Result<()> {
    let dataset = load_dataset(data)?;
    let layout = DashboardLayout::from_dataset(&dataset);

    let selection = options
        .site
        .as_deref()
        .map(SiteSelection::from_value)
        .unwrap_or_default();
    let range = options.payload.unwrap_or_else(|| layout.initial_range());

    // Determine format and output directory
    let format_type = if options.svg { "svg" } else { "png" };
    let output_dir = options.output.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let pie = update_pie_chart(&dataset, &selection);
    let scatter = update_scatter_chart(&dataset, &selection, &range);

    let charts = [
        (output_dir.join(format!("success-pie.{format_type}")), pie_svg(&pie)),
        (output_dir.join(format!("payload-scatter.{format_type}")), scatter_svg(&scatter)),
    ];

    println!("Exporting {} for {} ({})...", format_type.to_uppercase(), selection, range);

    for (path, svg) in &charts {
        if options.svg {
            export_svg(svg, path)?;
        } else {
            export_png(svg, path)?;
        }
        info!(path = %path.display(), "chart exported");
        println!("\x1b[32m+ Exported to: {}\x1b[0m", path.display());
    }

    // Open if requested
    if options.open {
        for (path, _) in &charts {
            open_file(path)?;
        }
    }

    Ok(())
}
