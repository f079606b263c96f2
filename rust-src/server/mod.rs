//! Web server for the interactive dashboard.
//!
//! ## Endpoints
//! - `GET /` — dashboard page
//! - `GET /api/layout` — dropdown and slider configuration
//! - `GET /api/pie?site=` — success pie figure (JSON)
//! - `GET /api/scatter?site=&low=&high=` — payload scatter figure (JSON)
//! - `GET /api/pie.svg`, `GET /api/scatter.svg` — the same figures as SVG
//! - `GET /api/summary?site=` — per-site launch summary
//! - `GET /health` — health check

mod handlers;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::callbacks::DashboardLayout;
use crate::config::{DEFAULT_HOST, DEFAULT_PORT};
use crate::data::Dataset;
use crate::visualization::open_file;


/// Bind address for the dashboard server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the dashboard in the default browser once bound.
    pub open_browser: bool,
}


impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: false,
        }
    }
}


impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr())
    }
}


/// Shared state: the dataset is loaded once and only read afterwards.
pub struct AppState {
    pub dataset: Dataset,
    pub layout: DashboardLayout,
}


impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let layout = DashboardLayout::from_dataset(&dataset);
        Self { dataset, layout }
    }
}


/// Build the router with every dashboard route.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/api/layout", get(handlers::layout_handler))
        .route("/api/pie", get(handlers::pie_handler))
        .route("/api/pie.svg", get(handlers::pie_svg_handler))
        .route("/api/scatter", get(handlers::scatter_handler))
        .route("/api/scatter.svg", get(handlers::scatter_svg_handler))
        .route("/api/summary", get(handlers::summary_handler))
        .route("/health", get(handlers::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}


/// Start the dashboard server. Blocks until the server shuts down.
pub async fn start_server(config: ServerConfig, dataset: Dataset) -> Result<()> {
    let addr = config.addr();
    let records = dataset.len();
    let app = router(Arc::new(AppState::new(dataset)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(records, "Dashboard ready on {}", config.url());

    if config.open_browser {
        if let Err(e) = open_file(Path::new(&config.url())) {
            warn!("Could not open browser: {e:#}");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Dashboard server failed")?;

    info!("Dashboard server stopped");
    Ok(())
}


async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler, run until the process is killed
        std::future::pending::<()>().await;
    }
}
