//! Launch Dash CLI
//!
//! Launch records dashboard: site selector, success-rate pie and
//! payload-vs-outcome scatter, served on the web or shown in the terminal.

mod aggregation;
mod callbacks;
mod cli;
mod commands;
mod config;
mod data;
mod error;
mod models;
mod server;
mod visualization;

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;


/// Install the stderr log subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "launchdash=debug,tower_http=debug"
    } else {
        DEFAULT_LOG_FILTER
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}


fn main() {
    let cli = cli::Cli::parse_args();
    init_tracing(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
