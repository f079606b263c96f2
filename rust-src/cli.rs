//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::commands::export::ExportOptions;
use crate::config::{DEFAULT_HOST, DEFAULT_PORT};
use crate::models::PayloadRange;
use crate::server::ServerConfig;


/// Launch Dash - launch records dashboard with success and payload charts
#[derive(Parser)]
#[command(name = "launchdash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the launch records CSV
    #[arg(long, global = true, env = "LAUNCH_DASH_DATA")]
    data: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Serve the interactive web dashboard
    Serve {
        /// Address to bind
        #[arg(long, env = "LAUNCH_DASH_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "LAUNCH_DASH_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Open the dashboard in the default browser
        #[arg(long)]
        open: bool,
    },

    /// Show the dashboard in the terminal
    Show {
        /// Launch site (default: All Sites)
        #[arg(short, long)]
        site: Option<String>,

        /// Payload range in kg, e.g. 2000-8000 (default: dataset bounds)
        #[arg(long)]
        payload: Option<PayloadRange>,
    },

    /// Export the pie and scatter charts as PNG or SVG
    Export {
        /// Launch site (default: All Sites)
        #[arg(short, long)]
        site: Option<String>,

        /// Payload range in kg, e.g. 2000-8000 (default: dataset bounds)
        #[arg(long)]
        payload: Option<PayloadRange>,

        /// Export as SVG instead of PNG
        #[arg(long)]
        svg: bool,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open files after export
        #[arg(long)]
        open: bool,
    },

    /// List launch sites and per-site statistics
    Sites,
}


impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}


/// Run the CLI
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let data = cli.data.as_deref();

    match cli.command {
        Some(Commands::Serve { host, port, open }) => {
            commands::serve::run(data, ServerConfig { host, port, open_browser: open })?;
        }
        Some(Commands::Show { site, payload }) => {
            commands::show::run(data, site, payload)?;
        }
        Some(Commands::Export { site, payload, svg, output, open }) => {
            commands::export::run(data, ExportOptions { site, payload, svg, output, open })?;
        }
        Some(Commands::Sites) => {
            commands::sites::run(data)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
