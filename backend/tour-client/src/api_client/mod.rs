//! HTTP access to the versioned tour backend.
//!
//! Every resource wrapper funnels through [`ApiClient::request`], which:
//! 1. Resolves the request path against the API root
//! 2. Attaches `Authorization: Bearer <token>` when a session is stored
//! 3. Maps non-2xx responses into [`ApiError`], keeping the backend message
//! 4. On 401, clears the stored session and publishes [`SessionEvent::Expired`]
//!    before the error reaches the caller
//!
//! No retries happen here; retry policy belongs to the caller.

pub mod request;

pub use request::ApiRequest;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::resources::{AuthApi, BookingsApi, ReviewsApi, ToursApi, UsersApi};
use crate::session::{Session, SessionEvent, SessionEvents, SessionStore};

use common::HttpStatusCode;
use models::AuthResponse;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::broadcast;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
pub const DEFAULT_LOGIN_PATH: &str = "/login";
const BACKEND_MESSAGE_FIELD: &str = "message";

#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
    session: Arc<dyn SessionStore>,
    events: SessionEvents,
    login_path: String,
}

impl ApiClient {
    /// Client for `base_url_str` (e.g. `http://localhost:3000/api/v1`) with default timeout.
    pub fn new(
        base_url_str: &str,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, ApiError> {
        Self::with_timeout(base_url_str, session, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(
        base_url_str: &str,
        session: Arc<dyn SessionStore>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let base_url = Self::normalize_base_url(base_url_str)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client,
            session,
            events: SessionEvents::new(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        })
    }

    pub fn from_config(
        config: &ClientConfig,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, ApiError> {
        let client = Self::with_timeout(&config.api.base_url, session, config.timeout())?;
        Ok(client.with_login_path(&config.session.login_path))
    }

    /// Path published in [`SessionEvent::Expired`].
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    // Url::join drops the last segment unless the base ends with '/'
    fn normalize_base_url(base_url_str: &str) -> Result<Url, ApiError> {
        let trimmed = base_url_str.trim_end_matches('/');
        Ok(Url::parse(&format!("{trimmed}/"))?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Receive login, logout and session-expiry notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn tours(&self) -> ToursApi<'_> {
        ToursApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn reviews(&self) -> ReviewsApi<'_> {
        ReviewsApi::new(self)
    }

    pub fn bookings(&self) -> BookingsApi<'_> {
        BookingsApi::new(self)
    }

    /// Absolute URL for a request, query included.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(request.path().trim_start_matches('/'))?;
        url.set_query(request.query().to_query_string().as_deref());
        Ok(url)
    }

    fn prepare_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, token.bearer_header()),
            None => request,
        }
    }

    /// Send `request` and return the raw response body of a 2xx response.
    ///
    /// # Errors
    /// - [`ApiError::Network`] when no response arrives
    /// - [`ApiError::Unauthenticated`] on 401, after the session was cleared
    /// - [`ApiError::Server`] for every other non-2xx status
    pub async fn request(&self, request: ApiRequest) -> Result<String, ApiError> {
        let url = self.url_for(&request)?;
        debug!("{} {}", request.method(), request.path_and_query());

        let mut builder = self.prepare_request(self.client.request(request.method().clone(), url));
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());

        if status.is_success() {
            return Ok(response.text().await?);
        }

        // A broken error body must not skip the 401 teardown.
        let text = response.text().await.unwrap_or_default();
        let backend_message = extract_backend_message(&text);

        if status.is_unauthorized() {
            self.expire_session();
        } else {
            debug!(
                "{} {} rejected with HTTP {status}",
                request.method(),
                request.path()
            );
        }

        Err(ApiError::from_status(status, backend_message))
    }

    /// Send `request` and decode the JSON response body.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let text = self.request(request).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Send `request` when no response body is expected (e.g. 204 on delete).
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.request(request).await.map(|_| ())
    }

    /// Persist the session carried by an auth response, if it carries one.
    ///
    /// Returns whether a session was stored.
    pub(crate) fn establish_session(&self, response: &AuthResponse) -> Result<bool, ApiError> {
        let (Some(token), Some(user)) = (response.token.as_ref(), response.user()) else {
            debug!("Auth response carried no session");
            return Ok(false);
        };

        let session = Session::new(token.clone(), user.clone());
        self.session.set(session)?;

        info!("Session established for user {}", user.id().unwrap_or("<unknown>"));
        self.events.publish(SessionEvent::LoggedIn {
            user_id: user.id().map(str::to_string),
        });

        Ok(true)
    }

    /// Drop the stored session on explicit logout.
    pub(crate) fn end_session(&self) -> Result<(), ApiError> {
        self.session.clear()?;
        info!("Session cleared on logout");
        self.events.publish(SessionEvent::LoggedOut);
        Ok(())
    }

    /// Replace the cached user of an existing session.
    pub(crate) fn refresh_session_user(&self, user: &models::User) -> Result<(), ApiError> {
        if let Some(session) = self.session.get() {
            self.session.set(Session::new(session.token, user.clone()))?;
            debug!("Cached session user refreshed");
        }
        Ok(())
    }

    fn expire_session(&self) {
        warn!("Backend rejected the session (HTTP 401), clearing stored credentials");

        if let Err(e) = self.session.clear() {
            warn!("Failed to clear session after 401: {e}");
        }

        self.events.publish(SessionEvent::Expired {
            login_path: self.login_path.clone(),
        });
    }
}

/// The `message` field of an error body, if the body is JSON and carries one.
pub fn extract_backend_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get(BACKEND_MESSAGE_FIELD)
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
