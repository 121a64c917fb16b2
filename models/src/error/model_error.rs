use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Input rejected before it is sent to the backend.
#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ModelError {
    /// Message suitable for showing next to the offending form field.
    pub fn message(&self) -> &str {
        match self {
            ModelError::Validation { message, .. } => message,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ModelError::Validation { field, .. } => field,
        }
    }
}
