//! SVG rendering of chart figures, with PNG export.

use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};

use super::figure::{PieFigure, ScatterFigure};


// Colour scheme
const BG: &str = "#FFFFFF";
const TEXT: &str = "#503D36";
const TEXT_SECONDARY: &str = "#7A6C66";
const GRID: &str = "#E5E1DE";
const PALETTE: [&str; 8] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA",
    "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
];

// Pie geometry
const PIE_WIDTH: i32 = 560;
const PIE_HEIGHT: i32 = 420;
const PIE_CX: f64 = 210.0;
const PIE_CY: f64 = 225.0;
const PIE_RADIUS: f64 = 150.0;

// Scatter geometry
const SCATTER_WIDTH: i32 = 760;
const SCATTER_HEIGHT: i32 = 420;
const PLOT_LEFT: f64 = 70.0;
const PLOT_TOP: f64 = 55.0;
const PLOT_WIDTH: f64 = 520.0;
const PLOT_HEIGHT: f64 = 300.0;
const X_TICKS: usize = 5;
// Class axis spans a little beyond 0 and 1 so points don't sit on the frame
const Y_MIN: f64 = -0.25;
const Y_MAX: f64 = 1.25;


/// Palette colour for the n-th series or slice.
pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}


/// Render a pie figure as a standalone SVG document.
pub fn pie_svg(figure: &PieFigure) -> String {
    let mut svg_parts = svg_header(PIE_WIDTH, PIE_HEIGHT, &figure.title);

    if figure.is_empty() {
        svg_parts.push(empty_notice(PIE_CX, PIE_CY));
        svg_parts.push("</svg>".to_string());
        return svg_parts.join("\n");
    }

    if figure.slices.len() == 1 {
        svg_parts.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" class="slice"><title>{}: {} (100.0%)</title></circle>"#,
            PIE_CX, PIE_CY, PIE_RADIUS, series_color(0),
            escape_xml(&figure.slices[0].label), figure.slices[0].value
        ));
    } else {
        let mut start = -PI / 2.0;
        for (idx, slice) in figure.slices.iter().enumerate() {
            let sweep = (slice.value as f64 / figure.total as f64) * 2.0 * PI;
            let end = start + sweep;

            let (x0, y0) = polar(start);
            let (x1, y1) = polar(end);
            let large_arc = if sweep > PI { 1 } else { 0 };

            svg_parts.push(format!(
                r#"<path d="M {:.2} {:.2} L {:.2} {:.2} A {} {} 0 {} 1 {:.2} {:.2} Z" fill="{}" class="slice"><title>{}: {} ({:.1}%)</title></path>"#,
                PIE_CX, PIE_CY, x0, y0, PIE_RADIUS, PIE_RADIUS, large_arc, x1, y1,
                series_color(idx), escape_xml(&slice.label), slice.value, slice.percentage
            ));

            // Percentage label at mid-angle, skipped for thin wedges
            if slice.percentage >= 4.0 {
                let mid = start + sweep / 2.0;
                let lx = PIE_CX + PIE_RADIUS * 0.65 * mid.cos();
                let ly = PIE_CY + PIE_RADIUS * 0.65 * mid.sin();
                svg_parts.push(format!(
                    r#"<text x="{:.2}" y="{:.2}" class="slice-label" text-anchor="middle">{:.1}%</text>"#,
                    lx, ly + 4.0, slice.percentage
                ));
            }

            start = end;
        }
    }

    // Legend
    let legend_x = (PIE_CX + PIE_RADIUS + 40.0) as i32;
    for (idx, slice) in figure.slices.iter().enumerate() {
        let y = 80 + idx as i32 * 24;
        svg_parts.push(format!(
            r#"<rect x="{}" y="{}" width="14" height="14" fill="{}"/>"#,
            legend_x, y, series_color(idx)
        ));
        svg_parts.push(format!(
            r#"<text x="{}" y="{}" class="legend-text">{} ({})</text>"#,
            legend_x + 22, y + 12, escape_xml(&slice.label), slice.value
        ));
    }

    svg_parts.push("</svg>".to_string());
    svg_parts.join("\n")
}


/// Render a scatter figure as a standalone SVG document.
pub fn scatter_svg(figure: &ScatterFigure) -> String {
    let mut svg_parts = svg_header(SCATTER_WIDTH, SCATTER_HEIGHT, &figure.title);

    let [x_min, x_max] = figure.x_range;
    let x_span = if x_max > x_min { x_max - x_min } else { 1.0 };
    let map_x = |x: f64| PLOT_LEFT + ((x - x_min) / x_span) * PLOT_WIDTH;
    let map_y = |y: f64| PLOT_TOP + PLOT_HEIGHT - ((y - Y_MIN) / (Y_MAX - Y_MIN)) * PLOT_HEIGHT;

    // Frame
    svg_parts.push(format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}"/>"#,
        PLOT_LEFT, PLOT_TOP, PLOT_WIDTH, PLOT_HEIGHT, GRID
    ));

    // X ticks
    for i in 0..=X_TICKS {
        let value = x_min + (x_span * i as f64 / X_TICKS as f64);
        let x = map_x(value);
        svg_parts.push(format!(
            r#"<line x1="{:.2}" y1="{}" x2="{:.2}" y2="{}" stroke="{}"/>"#,
            x, PLOT_TOP, x, PLOT_TOP + PLOT_HEIGHT, GRID
        ));
        svg_parts.push(format!(
            r#"<text x="{:.2}" y="{}" class="tick" text-anchor="middle">{}</text>"#,
            x, PLOT_TOP + PLOT_HEIGHT + 18.0, value.round()
        ));
    }

    // Y ticks (class 0 and 1)
    for class in [0.0, 1.0] {
        let y = map_y(class);
        svg_parts.push(format!(
            r#"<line x1="{}" y1="{:.2}" x2="{}" y2="{:.2}" stroke="{}"/>"#,
            PLOT_LEFT, y, PLOT_LEFT + PLOT_WIDTH, y, GRID
        ));
        svg_parts.push(format!(
            r#"<text x="{}" y="{:.2}" class="tick" text-anchor="end">{}</text>"#,
            PLOT_LEFT - 8.0, y + 4.0, class
        ));
    }

    // Axis labels
    svg_parts.push(format!(
        r#"<text x="{}" y="{}" class="axis-label" text-anchor="middle">{}</text>"#,
        PLOT_LEFT + PLOT_WIDTH / 2.0, PLOT_TOP + PLOT_HEIGHT + 42.0, escape_xml(&figure.x_label)
    ));
    svg_parts.push(format!(
        r#"<text x="20" y="{}" class="axis-label" text-anchor="middle" transform="rotate(-90 20 {})">{}</text>"#,
        PLOT_TOP + PLOT_HEIGHT / 2.0, PLOT_TOP + PLOT_HEIGHT / 2.0, escape_xml(&figure.y_label)
    ));

    if figure.is_empty() {
        svg_parts.push(empty_notice(PLOT_LEFT + PLOT_WIDTH / 2.0, PLOT_TOP + PLOT_HEIGHT / 2.0));
    }

    // Points
    for (idx, series) in figure.series.iter().enumerate() {
        let color = series_color(idx);
        for point in &series.points {
            svg_parts.push(format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="6" fill="{}" class="point"><title>Flight {}: {} kg, class {} ({})</title></circle>"#,
                map_x(point.x), map_y(point.y as f64), color,
                point.flight_number, point.x, point.y, escape_xml(&point.booster_version)
            ));
        }
    }

    // Legend
    let legend_x = (PLOT_LEFT + PLOT_WIDTH + 25.0) as i32;
    svg_parts.push(format!(
        r#"<text x="{}" y="{}" class="legend-title">Booster Version Category</text>"#,
        legend_x, PLOT_TOP as i32
    ));
    for (idx, series) in figure.series.iter().enumerate() {
        let y = PLOT_TOP as i32 + 16 + idx as i32 * 22;
        svg_parts.push(format!(
            r#"<circle cx="{}" cy="{}" r="6" fill="{}"/>"#,
            legend_x + 6, y + 6, series_color(idx)
        ));
        svg_parts.push(format!(
            r#"<text x="{}" y="{}" class="legend-text">{}</text>"#,
            legend_x + 20, y + 10, escape_xml(&series.name)
        ));
    }

    svg_parts.push("</svg>".to_string());
    svg_parts.join("\n")
}


/// Write SVG content to disk.
pub fn export_svg(svg_content: &str, output_path: &Path) -> Result<()> {
    std::fs::write(output_path, svg_content)
        .with_context(|| format!("Failed to write SVG to {}", output_path.display()))?;

    Ok(())
}


/// Rasterize SVG content and save it as PNG.
pub fn export_png(svg_content: &str, output_path: &Path) -> Result<()> {
    let mut options = resvg::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = resvg::usvg::Tree::from_str(svg_content, &options)
        .context("Failed to parse SVG")?;

    let size = tree.size();
    let width = size.width() as u32;
    let height = size.height() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .context("Failed to create pixmap")?;

    let bg = hex_to_rgb(BG);
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.0, bg.1, bg.2, 255));

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.save_png(output_path)
        .with_context(|| format!("Failed to save PNG to {}", output_path.display()))?;

    Ok(())
}


/// Common SVG prologue: root element, styles, background and title.
fn svg_header(width: i32, height: i32, title: &str) -> Vec<String> {
    vec![
        format!(r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#, width, height, width, height),
        "<style>".to_string(),
        format!("  .title {{ fill: {}; font: bold 18px sans-serif; }}", TEXT),
        format!("  .legend-title {{ fill: {}; font: bold 12px sans-serif; }}", TEXT),
        format!("  .legend-text {{ fill: {}; font: 12px sans-serif; }}", TEXT),
        format!("  .tick {{ fill: {}; font: 11px sans-serif; }}", TEXT_SECONDARY),
        format!("  .axis-label {{ fill: {}; font: 13px sans-serif; }}", TEXT),
        "  .slice-label { fill: #FFFFFF; font: bold 12px sans-serif; }".to_string(),
        format!("  .empty {{ fill: {}; font: italic 14px sans-serif; }}", TEXT_SECONDARY),
        format!("  .slice {{ stroke: {}; stroke-width: 2; }}", BG),
        "  .point { stroke: #FFFFFF; stroke-width: 1; opacity: 0.85; }".to_string(),
        "</style>".to_string(),
        format!(r#"<rect width="{}" height="{}" fill="{}"/>"#, width, height, BG),
        format!(r#"<text x="20" y="30" class="title">{}</text>"#, escape_xml(title)),
    ]
}


fn empty_notice(x: f64, y: f64) -> String {
    format!(r#"<text x="{:.2}" y="{:.2}" class="empty" text-anchor="middle">No launches match the selection</text>"#, x, y)
}


/// Point on the pie rim at the given angle.
fn polar(angle: f64) -> (f64, f64) {
    (PIE_CX + PIE_RADIUS * angle.cos(), PIE_CY + PIE_RADIUS * angle.sin())
}


pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}


/// Convert hex color to RGB tuple.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    (r, g, b)
}


/// Open file with default application.
pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayloadRange;
    use crate::visualization::figure::{slices_from_counts, ScatterPoint, ScatterSeries};

    fn pie(counts: &[(&str, u64)]) -> PieFigure {
        PieFigure::new(
            "Success Rates for all the Sites",
            slices_from_counts(counts.iter().map(|(l, v)| (l.to_string(), *v)).collect()),
        )
    }

    #[test]
    fn test_pie_svg_has_one_wedge_per_slice() {
        let svg = pie_svg(&pie(&[("CCAFS LC-40", 7), ("KSC LC-39A", 10), ("VAFB SLC-4E", 4)]));

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("class=\"slice\"").count(), 3);
        assert!(svg.contains("KSC LC-39A (10)"));
    }

    #[test]
    fn test_pie_svg_single_slice_is_full_circle() {
        let svg = pie_svg(&pie(&[("Success", 5)]));
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_pie_svg_empty() {
        let svg = pie_svg(&PieFigure::new("Success Rates for Nowhere", Vec::new()));
        assert!(svg.contains("No launches match the selection"));
        assert!(!svg.contains("class=\"slice\""));
    }

    #[test]
    fn test_scatter_svg_points_and_legend() {
        let figure = ScatterFigure::new(
            "Payload vs. Outcome for all Sites",
            PayloadRange::new(0.0, 10_000.0),
            vec![ScatterSeries {
                name: "FT".to_string(),
                points: vec![
                    ScatterPoint { x: 2490.0, y: 1, flight_number: 26, booster_version: "F9 FT B1031.1".to_string() },
                    ScatterPoint { x: 5300.0, y: 0, flight_number: 30, booster_version: "F9 FT B1030".to_string() },
                ],
            }],
        );

        let svg = scatter_svg(&figure);
        assert_eq!(svg.matches("class=\"point\"").count(), 2);
        assert!(svg.contains("Booster Version Category"));
        assert!(svg.contains(">10000<"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("A&B <x>"), "A&amp;B &lt;x&gt;");
    }

    #[test]
    fn test_export_svg_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pie.svg");
        let svg = pie_svg(&pie(&[("Success", 3), ("Failure", 1)]));

        export_svg(&svg, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), svg);
    }

    #[test]
    fn test_export_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pie.png");
        let svg = pie_svg(&pie(&[("Success", 3), ("Failure", 1)]));

        export_png(&svg, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
