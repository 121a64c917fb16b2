//! HTTP status code helpers for classifying backend responses.

/// HTTP status code returned by the tour backend.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    pub const NO_CONTENT: HttpStatusCode = HttpStatusCode(204);
    pub const UNAUTHORIZED: HttpStatusCode = HttpStatusCode(401);

    /// 2xx responses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// The session is missing, invalid or expired.
    pub fn is_unauthorized(&self) -> bool {
        *self == Self::UNAUTHORIZED
    }

    /// Message used when the backend rejects a request without explaining why.
    pub fn generic_failure_message(&self) -> String {
        format!("Request failed with status code {}", self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
