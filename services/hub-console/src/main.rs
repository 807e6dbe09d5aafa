//! Hub Console CLI
//!
//! Serves the device console and lists or registers devices from the shell.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hub_console::{build_console, cli, load_config, run_server, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "hub-console")]
#[command(about = "IoT hub device console")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Device API base URL (overrides config file)
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info", global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the browser console
    Serve {
        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// List registered devices
    List,
    /// Register a new device
    Create {
        /// Identifier of the device to create
        device_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, api_base_url={:?}, log_level={:?}",
        args.config,
        args.api_base_url,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(api_base_url) = args.api_base_url {
        config.api.base_url = api_base_url;
    }
    config.validate()?;

    match args.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            tracing::info!("Starting hub console server");
            run_server(&config).await?;
        }
        Command::List => {
            let mut console = build_console(&config)?;
            print!("{}", cli::list(&mut console).await?);
        }
        Command::Create { device_id } => {
            let mut console = build_console(&config)?;
            print!("{}", cli::create(&mut console, &device_id).await?);
        }
    }

    Ok(())
}
