//! Visualization layer for dashboards and charts.

mod dashboard;
mod export;
mod figure;
mod page;

pub use dashboard::{render_dashboard, render_site_table};
pub use export::{export_png, export_svg, open_file, pie_svg, scatter_svg};
pub use figure::{
    slices_from_counts,
    PieFigure,
    PieSlice,
    ScatterFigure,
    ScatterPoint,
    ScatterSeries,
};
pub use page::render_page;
