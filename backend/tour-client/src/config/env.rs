//! Environment overrides for [`ClientConfig`](super::ClientConfig).
//!
//! Lookup order: process environment, then `.env` in the current directory,
//! then `.env` next to the executable. Existing process variables win over
//! `.env` values.

use super::ClientConfig;
use crate::error::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use log::{debug, info, warn};

pub const API_BASE_URL_VAR: &str = "TOURS_API_BASE_URL";
pub const ASSET_BASE_URL_VAR: &str = "TOURS_ASSET_BASE_URL";
pub const API_TIMEOUT_SECS_VAR: &str = "TOURS_API_TIMEOUT_SECS";

/// Attempts to load .env from known locations. Returns the file used, if any.
pub fn try_load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return Some(path);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(_) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return Some(env_path);
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    debug!("No .env file found - using existing environment variables");
    None
}

/// Apply overrides read through `lookup` (normally `std::env::var`).
///
/// Empty values are ignored.
///
/// # Errors
/// Returns [`ConfigError::EnvOverride`] if the timeout override is not an integer.
pub fn apply_overrides<F>(config: &mut ClientConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(base_url) = read(API_BASE_URL_VAR) {
        info!("{API_BASE_URL_VAR} overrides api.base_url");
        config.api.base_url = base_url;
    }

    if let Some(asset_base) = read(ASSET_BASE_URL_VAR) {
        info!("{ASSET_BASE_URL_VAR} overrides api.asset_base_url");
        config.api.asset_base_url = Some(asset_base);
    }

    if let Some(raw) = read(API_TIMEOUT_SECS_VAR) {
        let timeout_secs = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::EnvOverride {
                location: ErrorLocation::from(Location::caller()),
                variable: API_TIMEOUT_SECS_VAR,
                reason: format!("'{raw}' is not a whole number of seconds: {e}"),
            })?;
        config.api.timeout_secs = timeout_secs;
    }

    Ok(())
}
