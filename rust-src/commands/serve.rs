//! Serve command - run the interactive web dashboard.

use std::path::Path;

use anyhow::{Context, Result};

use crate::server::{start_server, ServerConfig};

use super::load_dataset;


/// Run the serve command.
pub fn run(data: Option<&Path>, config: ServerConfig) -> Result<()> {
    let dataset = load_dataset(data)?;

    println!("Serving {} launch records on {}", dataset.len(), config.url());
    println!("Press Ctrl+C to stop.\n");

    let runtime = tokio::runtime::Runtime::new()
        .context("Failed to start async runtime")?;

    runtime.block_on(start_server(config, dataset))
}
