use tours::commands::{Cli, execute};
use tours::error::TourCliError;
use tours::logger::{DEFAULT_CONSOLE_LEVEL, initialize as LoggerInitialize};
use tours::navigator::{LoggingNavigator, spawn_expiry_forwarder};

use common::ErrorLocation;
use tour_client::{ApiClient, ClientConfig, FileSessionStore, default_config_dir};

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{LevelFilter, error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            if json {
                match serde_json::to_string_pretty(&e) {
                    Ok(encoded) => eprintln!("{encoded}"),
                    Err(_) => eprintln!("{}", e.user_message()),
                }
            } else {
                eprintln!("Error: {}", e.user_message());
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, TourCliError> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => default_config_dir()?,
    };
    let log_dir = config_dir.join("logs");

    create_dir_all(&log_dir).map_err(|e| TourCliError::Cli {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    let console_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        DEFAULT_CONSOLE_LEVEL
    };
    LoggerInitialize(&log_dir, console_level)?;

    info!("tours starting");
    info!("Config directory: {}", config_dir.display());

    let config = ClientConfig::load_with_env(&config_dir)?;
    let session = Arc::new(FileSessionStore::new(config.session_file(&config_dir)));
    let client = ApiClient::from_config(&config, session)?;

    let forwarder = spawn_expiry_forwarder(client.subscribe(), Arc::new(LoggingNavigator));

    let result = execute(cli.command, &client, &config, cli.json).await;

    // Dropping the last client closes the event channel; the forwarder drains and exits
    drop(client);
    if let Err(e) = forwarder.await {
        error!("Session event forwarder failed: {e}");
    }

    result
}
