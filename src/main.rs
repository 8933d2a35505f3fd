use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

mod cli;

use cli::Commands;
use isocap::config::{self, validation::validate_volume_id, IsoConfig};
use isocap::{create_host, HostEnv, HostPlatform, IsoHostCap};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "isocap")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    /// JSON file with host, file_destination and volume_id defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host tool to drive instead of the detected one
    #[arg(long, value_enum)]
    host: Option<HostPlatform>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("isocap={},warn", log_level))
        .with_writer(std::io::stderr)
        .init();

    info!("isocap v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("✗ Operation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let file_config = match &cli.config {
        Some(path) => config::load_config(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => IsoConfig::default(),
    };

    let env = HostEnv::system();

    match cli.command {
        Commands::Available => {
            let config = file_config.merge_overrides(cli.host, None, None);
            let host = select_host(config.host)?;

            let available = host.isofs_available(&env);
            info!("ISO tool available on {}: {}", host.platform(), available);
            println!("{}", available);
        }
        Commands::Build {
            source,
            output,
            volume_id,
        } => {
            if let Some(volume_id) = &volume_id {
                validate_volume_id(volume_id)?;
            }

            let config = file_config.merge_overrides(cli.host, output, volume_id);
            let host = select_host(config.host)?;

            info!(
                "Building ISO from {} with {}",
                source.display(),
                host.platform()
            );
            let iso = host.create_iso(&env, &source, &config.options)?;
            info!("✓ ISO written to {}", iso.display());
            println!("{}", iso.display());
        }
    }

    Ok(())
}

fn select_host(configured: Option<HostPlatform>) -> Result<Box<dyn IsoHostCap>> {
    configured
        .or_else(HostPlatform::detect)
        .map(create_host)
        .ok_or_else(|| anyhow!("No ISO builder for this operating system, pass --host"))
}
