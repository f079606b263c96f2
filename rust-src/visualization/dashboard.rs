//! Dashboard rendering using terminal output.

use chrono::{DateTime, Local, Utc};

use crate::aggregation::SiteSummary;
use super::figure::{PieFigure, ScatterFigure};


// Constants
const ORANGE: &str = "\x1b[38;5;208m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const BAR_WIDTH: usize = 20;
const PANEL_WIDTH: usize = 76;


/// Create a simple text bar for visualization.
fn create_bar(value: u64, max_value: u64, width: usize, color: &str) -> String {
    if max_value == 0 {
        return "░".repeat(width);
    }

    let filled = ((value as f64 / max_value as f64) * width as f64) as usize;
    let filled = filled.min(width);

    format!(
        "{}{}{}{}{}",
        color,
        "█".repeat(filled),
        RESET,
        DIM,
        "░".repeat(width - filled),
    ) + RESET
}


/// Truncate a label to a display width, by characters.
fn fit(label: &str, width: usize) -> String {
    label.chars().take(width).collect()
}


/// Render the complete terminal dashboard.
pub fn render_dashboard(
    title: &str,
    summaries: &[SiteSummary],
    pie: &PieFigure,
    scatter: &ScatterFigure,
    loaded_at: DateTime<Utc>,
) {
    println!("{}{}{:^width$}{}", BOLD, ORANGE, title, RESET, width = PANEL_WIDTH);
    println!();

    render_kpi_section(summaries);
    println!();

    println!("{}", render_pie(pie));
    println!("{}", render_scatter(scatter));

    render_footer(loaded_at);
}


/// Render the KPI cards section.
fn render_kpi_section(summaries: &[SiteSummary]) {
    let launches: u64 = summaries.iter().map(|s| s.launches).sum();
    let successes: u64 = summaries.iter().map(|s| s.successes).sum();
    let rate = if launches > 0 {
        successes as f64 / launches as f64 * 100.0
    } else {
        0.0
    };

    let width = 24;
    let border = "─".repeat(width - 2);

    println!("┌{}┐  ┌{}┐  ┌{}┐", border, border, border);
    println!("│{:^22}│  │{:^22}│  │{:^22}│", "Launches", "Success Rate", "Launch Sites");
    println!(
        "│{}{}{:^22}{}│  │{}{:^22}{}│  │{}{:^22}{}│",
        BOLD, ORANGE,
        launches,
        RESET,
        BOLD,
        format!("{rate:.1}%"),
        RESET,
        BOLD,
        summaries.len(),
        RESET,
    );
    println!("└{}┘  └{}┘  └{}┘", border, border, border);
}


/// Render a pie figure as a bar breakdown.
pub fn render_pie(pie: &PieFigure) -> String {
    let mut lines = vec![
        format!("┌{}┐", "─".repeat(PANEL_WIDTH)),
        format!("│ {}{:<w$}{} │", BOLD, fit(&pie.title, PANEL_WIDTH - 2), RESET, w = PANEL_WIDTH - 2),
        format!("├{}┤", "─".repeat(PANEL_WIDTH)),
    ];

    if pie.is_empty() {
        lines.push(format!("│ {}{:<w$}{} │", DIM, "No launches match the selection", RESET, w = PANEL_WIDTH - 2));
    }

    let max_value = pie.slices.iter().map(|s| s.value).max().unwrap_or(0);
    for slice in &pie.slices {
        let color = match slice.label.as_str() {
            "Success" => GREEN,
            "Failure" => RED,
            _ => ORANGE,
        };
        let bar = create_bar(slice.value, max_value, BAR_WIDTH, color);
        lines.push(format!(
            "│ {:30} {} {}{:>8}{} {}{:>6.1}%{}       │",
            fit(&slice.label, 30),
            bar,
            ORANGE, slice.value, RESET,
            CYAN, slice.percentage, RESET,
        ));
    }

    lines.push(format!("└{}┘", "─".repeat(PANEL_WIDTH)));
    lines.join("\n")
}


/// Render a scatter figure as a per-category table of points.
pub fn render_scatter(scatter: &ScatterFigure) -> String {
    let [low, high] = scatter.x_range;
    let mut lines = vec![
        format!("┌{}┐", "─".repeat(PANEL_WIDTH)),
        format!("│ {}{:<w$}{} │", BOLD, fit(&scatter.title, PANEL_WIDTH - 2), RESET, w = PANEL_WIDTH - 2),
        format!("│ {}{:<w$}{} │", DIM, format!("Payload range: {low} - {high} kg"), RESET, w = PANEL_WIDTH - 2),
        format!("├{}┤", "─".repeat(PANEL_WIDTH)),
    ];

    if scatter.is_empty() {
        lines.push(format!("│ {}{:<w$}{} │", DIM, "No launches match the selection", RESET, w = PANEL_WIDTH - 2));
    }

    for series in &scatter.series {
        let successes = series.points.iter().filter(|p| p.y == 1).count();
        let failures = series.points.len() - successes;
        let mean_payload = series.points.iter().map(|p| p.x).sum::<f64>() / series.points.len() as f64;

        lines.push(format!(
            "│ {:12} {}{:>4} ok{} {}{:>4} failed{}   mean payload {:>9.1} kg                │",
            fit(&series.name, 12),
            GREEN, successes, RESET,
            RED, failures, RESET,
            mean_payload,
        ));
    }

    lines.push(format!("└{}┘", "─".repeat(PANEL_WIDTH)));
    lines.join("\n")
}


/// Render per-site summaries as a table.
pub fn render_site_table(summaries: &[SiteSummary]) -> String {
    let mut lines = vec![format!(
        "{}{:<20} {:>8} {:>8} {:>8} {:>8} {:>10} {:>10}{}",
        BOLD, "Site", "Launches", "Success", "Failed", "Rate", "Min kg", "Max kg", RESET
    )];

    for s in summaries {
        lines.push(format!(
            "{:<20} {:>8} {:>8} {:>8} {:>7.1}% {:>10.1} {:>10.1}",
            fit(&s.site, 20), s.launches, s.successes, s.failures,
            s.success_rate * 100.0, s.min_payload, s.max_payload
        ));
    }

    lines.join("\n")
}


/// Render the footer with load time and tips.
fn render_footer(loaded_at: DateTime<Utc>) {
    let local: DateTime<Local> = loaded_at.into();
    println!("{}Dataset loaded: {}{}{}", DIM, RESET, CYAN, local.format("%Y-%m-%d %H:%M:%S"));
    println!("{}", RESET);
    println!(
        "{}Tip: open the interactive dashboard with {}{}launchdash serve --open{}",
        DIM, RESET, CYAN, RESET
    );
}
