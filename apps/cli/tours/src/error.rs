use common::ErrorLocation;
use models::ModelError;
use tour_client::{ApiError, ConfigError};

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the `tours` binary.
///
/// Printed as text by default, or as JSON with `--json`, keeping the
/// location for debugging either way.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum TourCliError {
    /// Error from this app (logger, directories, output)
    #[error("Tours Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    /// The backend or transport rejected a call
    #[error("Api Error: {message} {location}")]
    Api {
        message: String,
        status: Option<u16>,
        location: ErrorLocation,
    },

    /// Config could not be loaded
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Input rejected before anything was sent
    #[error("Invalid Input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },
}

impl TourCliError {
    /// Text shown to the user on stderr.
    pub fn user_message(&self) -> &str {
        match self {
            TourCliError::Cli { message, .. }
            | TourCliError::Api { message, .. }
            | TourCliError::Config { message, .. }
            | TourCliError::InvalidInput { message, .. } => message,
        }
    }
}

impl From<ApiError> for TourCliError {
    #[track_caller]
    fn from(error: ApiError) -> Self {
        TourCliError::Api {
            message: error.message().to_string(),
            status: error.status().map(|status| status.0),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for TourCliError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        TourCliError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for TourCliError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        TourCliError::InvalidInput {
            message: error.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
