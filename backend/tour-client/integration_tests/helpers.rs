//! Test helpers for access-layer integration tests.
//!
//! - A wiremock backend mounted under `/api/v1`
//! - Clients wired to an in-memory session store
//! - JSON fixtures shaped like the backend's envelopes

use common::RedactedToken;
use models::{RecordId, Role, User};
use tour_client::{ApiClient, MemorySessionStore, Session, SessionStore};

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::MockServer;

pub const API_PREFIX: &str = "/api/v1";
pub const TEST_TOKEN: &str = "test-token-12345";

pub struct TestBackend {
    pub server: MockServer,
    pub store: Arc<MemorySessionStore>,
    pub client: ApiClient,
}

/// Test helper: Start a mock backend and a client with an empty session.
pub async fn start_backend() -> TestBackend {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::new());
    let client = ApiClient::new(&format!("{}{API_PREFIX}", server.uri()), store.clone())
        .expect("Failed to build client");

    TestBackend {
        server,
        store,
        client,
    }
}

/// Test helper: Start a mock backend with a stored session for `role`.
pub async fn start_signed_in_backend(role: Role) -> TestBackend {
    let backend = start_backend().await;
    seed_session(&backend.store, role);
    backend
}

/// Test helper: Store a fresh session for `role`, replacing any existing one.
pub fn seed_session(store: &MemorySessionStore, role: Role) {
    store
        .set(Session::new(RedactedToken::new(TEST_TOKEN), test_user("u1", role)))
        .expect("Failed to seed session");
}

pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

pub fn test_user(id: &str, role: Role) -> User {
    User {
        ident: RecordId::new(id),
        name: "Leo Gillespie".to_string(),
        email: "leo@example.com".to_string(),
        role,
        ..User::default()
    }
}

pub fn user_json(id: &str, role: &str) -> Value {
    json!({
        "_id": id,
        "name": "Leo Gillespie",
        "email": "leo@example.com",
        "role": role,
        "photo": "user-1.jpg"
    })
}

pub fn auth_json(token: &str, user: Value) -> Value {
    json!({
        "status": "success",
        "token": token,
        "data": {"user": user}
    })
}

pub fn tour_json(id: &str, name: &str, price: f64) -> Value {
    json!({
        "_id": id,
        "id": id,
        "name": name,
        "duration": 5,
        "maxGroupSize": 25,
        "difficulty": "easy",
        "ratingsAverage": 4.7,
        "ratingsQuantity": 37,
        "price": price,
        "summary": "Breathtaking hike through the Canadian Banff National Park",
        "imageCover": "tour-1-cover.jpg"
    })
}

pub fn list_json(items: Vec<Value>) -> Value {
    json!({
        "status": "success",
        "results": items.len(),
        "data": {"data": items}
    })
}

pub fn document_json(document: Value) -> Value {
    json!({
        "status": "success",
        "data": {"data": document}
    })
}

/// Test helper: `Authorization` header of every request the backend received.
pub async fn received_auth_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .expect("Request recording is enabled")
        .iter()
        .map(|request| {
            request
                .headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })
        .collect()
}
