use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret wrapper is handed to a serializer.
///
/// Secrets are persisted only by reading the raw value explicitly.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Implicit Serialization Error: {type_name} must be written via as_str() {location}")]
    ImplicitSerialization {
        type_name: &'static str,
        location: ErrorLocation,
    },
}
