//! HTML page for the interactive web dashboard.
//!
//! The page is rendered once from the layout. Widget changes call the
//! chart endpoints and swap the returned SVG into the chart containers.

use crate::callbacks::DashboardLayout;

use super::export::escape_xml;


const PAGE_SCRIPT: &str = r#"
const site = document.getElementById('site-dropdown');
const low = document.getElementById('payload-low');
const high = document.getElementById('payload-high');
const rangeLabel = document.getElementById('payload-value');

async function refresh(target, url) {
  const res = await fetch(url);
  document.getElementById(target).innerHTML = res.ok ? await res.text() : '';
}

function update() {
  let lo = Number(low.value), hi = Number(high.value);
  if (lo > hi) { [lo, hi] = [hi, lo]; }
  rangeLabel.textContent = `${lo} - ${hi} kg`;
  const s = encodeURIComponent(site.value);
  refresh('success-pie-chart', `/api/pie.svg?site=${s}`);
  refresh('success-payload-scatter-chart', `/api/scatter.svg?site=${s}&low=${lo}&high=${hi}`);
}

site.addEventListener('change', update);
low.addEventListener('input', update);
high.addEventListener('input', update);
update();
"#;


/// Render the dashboard page for a layout.
pub fn render_page(layout: &DashboardLayout) -> String {
    let dropdown = &layout.site_dropdown;
    let slider = &layout.payload_slider;

    let options: Vec<String> = dropdown
        .options
        .iter()
        .map(|option| {
            let selected = if *option == dropdown.value { " selected" } else { "" };
            let escaped = escape_xml(option);
            format!(r#"<option value="{escaped}"{selected}>{escaped}</option>"#)
        })
        .collect();

    let range_input = |id: &str, value: f64| {
        format!(
            r#"<input type="range" id="{}" min="{}" max="{}" step="{}" value="{}">"#,
            id, slider.min, slider.max, slider.step, value
        )
    };

    let title = escape_xml(layout.title);

    let page_parts = vec![
        "<!DOCTYPE html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        format!("<title>{title}</title>"),
        "<style>".to_string(),
        "  body { font-family: sans-serif; margin: 2em auto; max-width: 900px; }".to_string(),
        "  h1 { text-align: center; color: #503D36; font-size: 40px; }".to_string(),
        "  select { width: 100%; padding: 0.4em; font-size: 1em; }".to_string(),
        "  .slider input { width: 45%; }".to_string(),
        "</style>".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
        format!("<h1>{title}</h1>"),
        format!(
            r#"<select id="{}" title="{}">{}</select>"#,
            dropdown.id,
            escape_xml(dropdown.placeholder),
            options.join("")
        ),
        "<br>".to_string(),
        r#"<div id="success-pie-chart"></div>"#.to_string(),
        "<br>".to_string(),
        r#"<p>Payload range (Kg): <span id="payload-value"></span></p>"#.to_string(),
        format!(
            r#"<div class="slider" id="{}">{}{}</div>"#,
            slider.id,
            range_input("payload-low", slider.value.low),
            range_input("payload-high", slider.value.high)
        ),
        r#"<div id="success-payload-scatter-chart"></div>"#.to_string(),
        format!("<script>{PAGE_SCRIPT}</script>"),
        "</body>".to_string(),
        "</html>".to_string(),
    ];

    page_parts.join("\n")
}
