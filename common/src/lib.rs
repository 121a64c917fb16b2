//! Shared primitives for the tour client workspace.
//!
//! Everything here is dependency-light and used by every other crate:
//!
//! - **ErrorLocation**: call-site capture attached to every error variant
//! - **HttpStatusCode**: status categorization for backend responses
//! - **RedactedToken**: session bearer token that never leaks into logs
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Pass-through DTOs returned by the backend
//! - **tour-client**: The API access layer operating on models
//! - **tours**: Host CLI wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;

#[cfg(test)]
mod tests;
