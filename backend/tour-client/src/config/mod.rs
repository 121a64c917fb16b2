pub mod assets;
pub mod env;

pub use assets::resolve_asset_url;

use crate::error::ConfigError;

use common::ErrorLocation;

use std::ops::RangeInclusive;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use const_format::concatcp;
use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_DIR_NAME: &str = "tours";
const CONFIG_VERSION: u32 = 1;
const TIMEOUT_SECS_RANGE: RangeInclusive<u64> = 1..=300;

pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:3000";
pub const API_VERSION_PATH: &str = "/api/v1";
pub const DEFAULT_API_BASE_URL: &str = concatcp!(DEFAULT_BACKEND_ORIGIN, API_VERSION_PATH);

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Origin serving tour images. Derived from `base_url` when unset.
    #[serde(default)]
    pub asset_base_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            asset_base_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_session_file_name")]
    pub file_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            file_name: default_session_file_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: ApiConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_login_path() -> String {
    crate::api_client::DEFAULT_LOGIN_PATH.to_string()
}
fn default_session_file_name() -> String {
    "session.json".to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

/// Platform config directory for the client (e.g. `~/.config/tours` on Linux).
///
/// # Errors
/// Returns [`ConfigError::DirectoryNotFound`] if the platform exposes no config directory.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
            reason: String::from("platform has no config directory"),
        })
}

impl ClientConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(ClientConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: ClientConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Load from `config_dir`, then apply `.env` and process environment overrides.
    pub fn load_with_env(config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(config_dir)?;
        env::try_load_dotenv();
        env::apply_overrides(&mut config, |name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation, serialization,
    /// write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        // Atomic rename (POSIX guarantees atomicity)
        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        validate_http_url("api.base_url", &self.api.base_url)?;

        if let Some(ref asset_base) = self.api.asset_base_url {
            validate_http_url("api.asset_base_url", asset_base)?;
        }

        if !TIMEOUT_SECS_RANGE.contains(&self.api.timeout_secs) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {}s (must be {}-{})",
                    self.api.timeout_secs,
                    TIMEOUT_SECS_RANGE.start(),
                    TIMEOUT_SECS_RANGE.end()
                ),
            });
        }

        if !self.session.login_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid login path: {} (must start with '/')",
                    self.session.login_path
                ),
            });
        }

        if self.session.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "session.file_name cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn session_file(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.session.file_name)
    }

    /// Absolute URL for a tour image or user photo name.
    pub fn asset_url(&self, name: Option<&str>) -> String {
        resolve_asset_url(
            name,
            self.api.asset_base_url.as_deref(),
            Some(&self.api.base_url),
        )
    }
}

fn validate_http_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("{field} cannot be empty string"),
        });
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid URL format for {field}: {url}"),
        });
    }

    Ok(())
}
