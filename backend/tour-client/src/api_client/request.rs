use crate::error::ApiError;
use crate::query::QuerySpec;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// A fully described call against the API root, built before anything is sent.
///
/// `path` is relative to the versioned API root and always starts with `/`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: QuerySpec,
    body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        Self {
            method,
            path,
            query: QuerySpec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, query: QuerySpec) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    /// Returns [`ApiError::Json`] if the body cannot be represented as JSON.
    #[track_caller]
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QuerySpec {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Path plus encoded query, with no trailing `?` when the query is empty.
    pub fn path_and_query(&self) -> String {
        match self.query.to_query_string() {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }
}
