use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use showroom_core::{AppConfig, BodyType, Catalog};

mod commands;

#[derive(Parser)]
#[command(name = "showroom")]
#[command(author, version, about = "A terminal showroom for the Recharge vehicle lineup")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog fixture to use instead of the configured/built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Start with a body type filter (suv, estate, sedan)
        #[arg(short, long)]
        filter: Option<BodyType>,
        /// Open directly on a vehicle's detail screen
        #[arg(short, long)]
        vehicle: Option<String>,
    },
    /// List catalog entries
    List {
        /// Only list one body type
        #[arg(short, long)]
        body_type: Option<BodyType>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one vehicle
    Show {
        /// Vehicle id, e.g. xc90-recharge
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Resolve a route path such as /car/xc90-recharge
    Route {
        path: String,
    },
    /// Print the config path, or write the defaults to it
    Config {
        /// Write the current configuration to the config path
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // The TUI owns the terminal, so its logs go to a file
    let tui = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, tui)?;

    let catalog_path = cli.catalog.or_else(|| config.catalog_path());
    let catalog = Arc::new(Catalog::load_or_builtin(catalog_path.as_deref())?);

    match cli.command {
        Some(Commands::Run { filter, vehicle }) => {
            commands::run::run(config, catalog, filter, vehicle).await
        }
        None => commands::run::run(config, catalog, None, None).await,
        Some(Commands::List { body_type, json }) => commands::list::run(&catalog, body_type, json),
        Some(Commands::Show { id, json }) => commands::show::run(&catalog, &id, json),
        Some(Commands::Route { path }) => commands::route::run(&catalog, &path),
        Some(Commands::Config { write }) => {
            if write {
                config.save()?;
                println!("Wrote {}", AppConfig::config_path().display());
            } else {
                println!("{}", AppConfig::config_path().display());
            }
            Ok(())
        }
    }
}

/// Initialize logging from RUST_LOG, falling back to the configured level
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
