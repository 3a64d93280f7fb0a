//! Concierge Admin CLI
//!
//! Terminal dashboard for a concierge operator: sign in, triage client
//! requests, keep progress notes and chat with clients. `list` and `clients`
//! print plain-text listings without the TUI.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;

use concierge_cli::app::App;
use concierge_cli::{headless, tui};
use concierge_core::config::{ConciergeConfig, default_log_path, load_config};
use concierge_core::model::StatusFilter;
use concierge_core::tracing_init::{init_file_tracing, init_tracing};
use concierge_core::Dashboard;

#[derive(Parser, Debug)]
#[command(name = "concierge")]
#[command(version, about = "Concierge Admin dashboard", long_about = None)]
struct Cli {
    /// Config file (default: ~/.concierge/config.json)
    #[arg(long, env = "CONCIERGE_CONFIG")]
    config: Option<PathBuf>,

    /// Log file for the interactive dashboard (default: ~/.concierge/concierge.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit JSON log lines
    #[arg(long)]
    log_json: bool,

    /// Initial status filter: all, received, inProgress or completed
    #[arg(long)]
    filter: Option<StatusFilter>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive dashboard (default)
    Tui,
    /// Print the stats line and the request list
    List {
        /// Only requests in this status (overrides --filter)
        #[arg(long)]
        status: Option<StatusFilter>,
    },
    /// Print the client directory
    Clients,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.log_json {
        config.log.json = true;
    }
    if let Some(path) = cli.log_file {
        config.log.file = Some(path);
    }
    if let Some(filter) = cli.filter {
        config.ui.default_filter = filter;
    }

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(&config),
        Commands::List { status } => {
            init_tracing(&config.log.filter_directive(), config.log.json);
            let dashboard = open_dashboard();
            let filter = status.unwrap_or(config.ui.default_filter);
            let mut out = io::stdout().lock();
            headless::write_request_list(&mut out, &dashboard, filter)?;
            out.flush()?;
            Ok(())
        }
        Commands::Clients => {
            init_tracing(&config.log.filter_directive(), config.log.json);
            let dashboard = open_dashboard();
            let mut out = io::stdout().lock();
            headless::write_client_directory(&mut out, &dashboard)?;
            out.flush()?;
            Ok(())
        }
    }
}

/// Run the interactive dashboard, logging to a file so the terminal stays clean.
fn run_tui(config: &ConciergeConfig) -> anyhow::Result<()> {
    if let Some(path) = config.log.file.clone().or_else(default_log_path) {
        init_file_tracing(&config.log.filter_directive(), config.log.json, &path)?;
    }
    info!(version = env!("CARGO_PKG_VERSION"), "Starting concierge");

    let dashboard = open_dashboard();
    let mut app = App::new(dashboard, config.ui.default_filter);
    tui::run(&mut app, Duration::from_millis(config.ui.tick_ms.max(1)))
}

/// Load the demo records and report client counters that disagree with them.
fn open_dashboard() -> Dashboard {
    let dashboard = Dashboard::seeded();
    dashboard.report_counter_drift();
    info!(
        requests = dashboard.requests().len(),
        clients = dashboard.client_directory().len(),
        "Dashboard loaded"
    );
    dashboard
}
