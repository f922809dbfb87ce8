mod commands;
mod config;
mod logging;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use rentals::Rentals;

use crate::commands::Commands;
use crate::config::AppConfig;

/// Rentals - profiles, properties and reviews for a rental marketplace
#[derive(Parser)]
#[command(name = "rentals-cli")]
#[command(about = "Rentals - profiles, properties and reviews for a rental marketplace")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database DSN override (overrides config)
    #[arg(long)]
    dsn: Option<String>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !Path::new(path).is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.to_string_lossy());
    }

    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dsn) = cli.dsn {
        config.rentals.database.dsn = dsn;
    }

    logging::init(&config.logging, cli.verbose);

    if cli.print_config {
        println!("{}", config.to_pretty_json()?);
        return Ok(());
    }

    let command = cli.command.unwrap_or(Commands::Check);
    if matches!(command, Commands::Migrate) {
        config.rentals.database.run_migrations = true;
    }

    tracing::info!("Rentals starting");
    let rentals = Rentals::init(&config.rentals).await?;
    commands::run(&rentals, command).await
}
