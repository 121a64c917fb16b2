pub mod api_client;
pub mod config;
pub mod error;
pub mod query;
pub mod resources;
pub mod session;

#[cfg(test)]
mod tests;

pub use api_client::{ApiClient, ApiRequest, extract_backend_message};
pub use config::{ClientConfig, default_config_dir, resolve_asset_url};
pub use error::{ApiError, ConfigError, SessionError};
pub use query::{QuerySpec, QueryValue, TourFilter};
pub use session::{
    FileSessionStore, MemorySessionStore, Session, SessionEvent, SessionEvents, SessionStore,
};
