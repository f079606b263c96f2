//! Route handlers. Each one maps query parameters to dashboard inputs and
//! runs the matching callback.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::aggregation::{filter_by_site, site_summaries, SiteSummary};
use crate::callbacks::{update_pie_chart, update_scatter_chart, DashboardLayout};
use crate::config::ALL_SITES;
use crate::models::{PayloadRange, SiteSelection};
use crate::visualization::{pie_svg, render_page, scatter_svg, PieFigure, ScatterFigure};

use super::AppState;


/// Query parameters shared by the chart endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartQuery {
    /// Dropdown value; missing means "All Sites".
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
}


impl ChartQuery {
    fn selection(&self) -> SiteSelection {
        SiteSelection::from_value(self.site.as_deref().unwrap_or(ALL_SITES))
    }

    /// Selected range, with missing bounds taken from the initial slider value.
    fn range(&self, layout: &DashboardLayout) -> PayloadRange {
        let initial = layout.initial_range();
        PayloadRange::new(
            self.low.unwrap_or(initial.low),
            self.high.unwrap_or(initial.high),
        )
    }
}


pub async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.layout))
}


pub async fn layout_handler(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(state.layout.clone())
}


pub async fn pie_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> Json<PieFigure> {
    Json(update_pie_chart(&state.dataset, &query.selection()))
}


pub async fn pie_svg_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> impl IntoResponse {
    let figure = update_pie_chart(&state.dataset, &query.selection());
    ([(header::CONTENT_TYPE, "image/svg+xml")], pie_svg(&figure))
}


pub async fn scatter_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> Json<ScatterFigure> {
    let range = query.range(&state.layout);
    Json(update_scatter_chart(&state.dataset, &query.selection(), &range))
}


pub async fn scatter_svg_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> impl IntoResponse {
    let range = query.range(&state.layout);
    let figure = update_scatter_chart(&state.dataset, &query.selection(), &range);
    ([(header::CONTENT_TYPE, "image/svg+xml")], scatter_svg(&figure))
}


pub async fn summary_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> Json<Vec<SiteSummary>> {
    let filtered = filter_by_site(state.dataset.records(), &query.selection());
    Json(site_summaries(&filtered))
}


pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "records": state.dataset.len(),
        "loaded_at": state.dataset.loaded_at,
    }))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::models::{LaunchRecord, Outcome};

    fn state() -> Arc<AppState> {
        let records = [
            (1, "CCAFS LC-40", false, 0.0, "v1.0"),
            (2, "CCAFS LC-40", true, 2000.0, "v1.1"),
            (3, "KSC LC-39A", true, 4000.0, "FT"),
            (4, "KSC LC-39A", false, 6000.0, "FT"),
            (5, "KSC LC-39A", true, 8000.0, "B4"),
        ]
        .into_iter()
        .map(|(flight, site, success, payload, category)| LaunchRecord {
            flight_number: flight,
            launch_site: site.to_string(),
            outcome: if success { Outcome::Success } else { Outcome::Failure },
            payload_mass_kg: payload,
            booster_version: format!("F9 {category}"),
            booster_version_category: category.to_string(),
        })
        .collect();

        Arc::new(AppState::new(Dataset::from_records(records)))
    }

    fn query(site: Option<&str>, low: Option<f64>, high: Option<f64>) -> Query<ChartQuery> {
        Query(ChartQuery {
            site: site.map(String::from),
            low,
            high,
        })
    }

    #[tokio::test]
    async fn test_pie_handler_defaults_to_all_sites() {
        let Json(pie) = pie_handler(State(state()), query(None, None, None)).await;

        assert_eq!(pie.title, "Success Rates for all the Sites");
        assert_eq!(pie.total, 3);
    }

    #[tokio::test]
    async fn test_pie_handler_single_site() {
        let Json(pie) = pie_handler(State(state()), query(Some("KSC LC-39A"), None, None)).await;

        assert_eq!(pie.total, 3);
        assert_eq!(pie.slices[0].label, "Success");
        assert_eq!(pie.slices[0].value, 2);
    }

    #[tokio::test]
    async fn test_scatter_handler_uses_initial_range() {
        let Json(scatter) = scatter_handler(State(state()), query(None, None, None)).await;

        assert_eq!(scatter.x_range, [0.0, 8000.0]);
        assert_eq!(scatter.point_count, 5);
    }

    #[tokio::test]
    async fn test_scatter_handler_normalizes_reversed_range() {
        let Json(scatter) =
            scatter_handler(State(state()), query(Some("KSC LC-39A"), Some(7000.0), Some(3000.0))).await;

        assert_eq!(scatter.x_range, [3000.0, 7000.0]);
        assert_eq!(scatter.point_count, 2);
    }

    #[tokio::test]
    async fn test_scatter_handler_empty_selection() {
        let Json(scatter) = scatter_handler(State(state()), query(Some("Nowhere"), None, None)).await;

        assert!(scatter.is_empty());
        assert_eq!(scatter.x_range, [0.0, 8000.0]);
    }

    #[tokio::test]
    async fn test_summary_handler() {
        let Json(summaries) = summary_handler(State(state()), query(Some("CCAFS LC-40"), None, None)).await;

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].launches, 2);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let Json(body) = health_handler(State(state())).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["records"], 5);
    }

    #[tokio::test]
    async fn test_index_handler_renders_page() {
        let Html(page) = index_handler(State(state())).await;
        assert!(page.contains("site-dropdown"));
        assert!(page.contains("success-pie-chart"));
    }
}
