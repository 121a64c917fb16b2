//! Errors surfaced by the API access layer.
//!
//! - Backend status codes are stored directly, never parsed from text
//! - The backend's `message` field is kept verbatim when present
//! - All errors include ErrorLocation for debugging
//! - `#[track_caller]` for automatic location capture

use crate::error::session::SessionError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiError {
    /// No response was received.
    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    /// The backend answered with a non-2xx status other than 401.
    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        backend_message: Option<String>,
        location: ErrorLocation,
    },

    /// The backend answered 401. The stored session has already been cleared.
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        backend_message: Option<String>,
        location: ErrorLocation,
    },

    /// The operation has no backend support yet; nothing was sent.
    #[error("Not Implemented: {operation}: {message} {location}")]
    NotImplemented {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session Error: {message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Build the error for a rejected response.
    #[track_caller]
    pub fn from_status(status: HttpStatusCode, backend_message: Option<String>) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = backend_message
            .clone()
            .unwrap_or_else(|| status.generic_failure_message());

        if status.is_unauthorized() {
            ApiError::Unauthenticated {
                message,
                backend_message,
                location,
            }
        } else {
            ApiError::Server {
                status,
                message,
                backend_message,
                location,
            }
        }
    }

    #[track_caller]
    pub fn not_implemented(operation: &'static str, message: impl Into<String>) -> Self {
        ApiError::NotImplemented {
            operation,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text a caller can show to the user.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network { message, .. }
            | ApiError::Server { message, .. }
            | ApiError::Unauthenticated { message, .. }
            | ApiError::NotImplemented { message, .. }
            | ApiError::Json { message, .. }
            | ApiError::UrlParse { message, .. }
            | ApiError::Session { message, .. } => message,
        }
    }

    /// The `message` field of the backend's error body, if it sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Server {
                backend_message, ..
            }
            | ApiError::Unauthenticated {
                backend_message, ..
            } => backend_message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Unauthenticated { .. } => Some(HttpStatusCode::UNAUTHORIZED),
            _ => None,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, ApiError::NotImplemented { .. })
    }
}

impl From<url::ParseError> for ApiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for ApiError {
    #[track_caller]
    fn from(error: SessionError) -> Self {
        ApiError::Session {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
