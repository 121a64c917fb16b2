pub mod api;
pub mod config;
pub mod session;

pub use api::ApiError;
pub use config::ConfigError;
pub use session::SessionError;
