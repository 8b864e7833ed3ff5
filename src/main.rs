//! Console route table CLI.
//!
//! # Overview
//!
//! ```text
//!   --config console-router.toml (optional)
//!          │
//!          ▼
//!   ┌─────────────┐    ┌──────────┐    ┌────────────┐
//!   │   config    │───▶│  router  │───▶│ navigator  │──▶ resolved routes (JSON)
//!   │ load+valid. │    │  table   │    │ + history  │
//!   └─────────────┘    └──────────┘    └────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use console_router::config::{load_config, RouterConfig};
use console_router::observability::logging::init_logging;
use console_router::routing::{RouteTarget, Router};
use console_router::{start, History, WebHistory};

#[derive(Parser)]
#[command(name = "console-router")]
#[command(about = "Inspect and exercise the console's client-side route table", long_about = None)]
struct Cli {
    /// Route table config (TOML). Uses the built-in table when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the configured log level.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Navigate to each location in turn and print the resolved routes
    Resolve {
        #[arg(required = true)]
        locations: Vec<String>,
    },
    /// Print the path of a named route
    Href { name: String },
    /// Validate the route table
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    init_logging(&config.observability);

    match cli.command {
        Commands::Routes => {
            let router = Router::from_config(&config)?;
            for entry in router.routes() {
                let target = match &entry.target {
                    RouteTarget::View(view) => view.to_string(),
                    RouteTarget::Redirect(to) => format!("-> {}", to),
                };
                println!(
                    "{:<16} {:<12} {}",
                    entry.path,
                    entry.name.as_deref().unwrap_or("-"),
                    target
                );
            }
        }
        Commands::Resolve { locations } => {
            let mut navigator = start(&config, WebHistory::new(&config.history.base))?;
            for location in locations {
                let outcome = navigator.push(location)?;
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
        }
        Commands::Href { name } => {
            let router = Router::from_config(&config)?;
            let history = WebHistory::new(&config.history.base);
            println!("{}", history.create_href(router.href(&name)?));
        }
        Commands::Check => {
            let router = Router::from_config(&config)?;
            println!("ok: {} routes ({})", router.routes().count(), router.route_names().join(", "));
        }
    }

    Ok(())
}
