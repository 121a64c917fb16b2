use tours::commands::{Command, execute};
use tours::error::TourCliError;

use tour_client::{ApiClient, ClientConfig, FileSessionStore, SessionStore};

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for command execution against a mock backend
// These exercise the full path: clap command -> access layer -> rendering
// ============================================================================

struct Harness {
    server: MockServer,
    _dir: TempDir,
    config: ClientConfig,
    store: Arc<FileSessionStore>,
    client: ApiClient,
}

async fn harness() -> Harness {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");
    let mut config = ClientConfig::default();
    config.api.base_url = format!("{}/api/v1", server.uri());
    let store = Arc::new(FileSessionStore::new(config.session_file(dir.path())));
    let client = ApiClient::from_config(&config, store.clone()).expect("client");

    Harness {
        server,
        _dir: dir,
        config,
        store,
        client,
    }
}

/// **VALUE**: Login persists the session to disk so the next invocation is signed in.
///
/// **WHY THIS MATTERS**: Every CLI call is a fresh process; without a persisted
/// session the user would have to log in for each command.
#[tokio::test]
async fn given_login_command_when_accepted_then_session_file_written() {
    // GIVEN
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "token": "cli-token",
            "data": {"user": {"_id": "u1", "name": "Leo", "email": "leo@example.com", "role": "user"}}
        })))
        .mount(&h.server)
        .await;

    // WHEN
    let output = execute(
        Command::Login {
            email: "leo@example.com".to_string(),
            password: "test1234".to_string(),
        },
        &h.client,
        &h.config,
        false,
    )
    .await
    .expect("login");

    // THEN
    assert_eq!(output, "Logged in as Leo.");
    assert!(h.store.path().exists());
    let reopened = FileSessionStore::new(h.store.path());
    assert_eq!(
        reopened.token().map(|t| t.as_str().to_string()),
        Some("cli-token".to_string())
    );
}

#[tokio::test]
async fn given_tours_command_with_filters_when_executed_then_list_rendered() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tours"))
        .and(query_param("price[lte]", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "results": 1,
            "data": {"data": [{
                "_id": "t1", "name": "The Forest Hiker", "duration": 5, "difficulty": "easy",
                "price": 397, "ratingsAverage": 4.7, "ratingsQuantity": 37
            }]}
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let output = execute(
        Command::Tours {
            difficulty: None,
            sort: None,
            page: None,
            limit: None,
            max_price: Some(500.0),
            min_duration: None,
        },
        &h.client,
        &h.config,
        false,
    )
    .await
    .expect("tours");

    assert_eq!(output, "t1  The Forest Hiker  5 days, easy  $397  ★ 4.7 (37)");
}

/// **BUG THIS CATCHES**: Would catch an invalid rating reaching the backend.
#[tokio::test]
async fn given_out_of_range_rating_when_reviewing_then_rejected_before_request() {
    let h = harness().await;

    let err = execute(
        Command::Review {
            tour_id: "t1".to_string(),
            rating: 0,
            text: "Meh".to_string(),
        },
        &h.client,
        &h.config,
        false,
    )
    .await
    .expect_err("invalid rating");

    assert!(matches!(err, TourCliError::InvalidInput { .. }));
    let received = h.server.received_requests().await.expect("recorded");
    assert!(received.is_empty());
}

#[tokio::test]
async fn given_signed_out_when_listing_my_reviews_then_asked_to_log_in() {
    let h = harness().await;

    let err = execute(Command::MyReviews, &h.client, &h.config, false)
        .await
        .expect_err("signed out");

    assert!(err.user_message().contains("not logged in"));
}

#[tokio::test]
async fn given_json_flag_when_checkout_executed_then_raw_session_printed() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/bookings/checkout-session/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {"checkout_url": "https://checkout.example.com/pay/abc", "tx_ref": "tx-1"}
        })))
        .mount(&h.server)
        .await;

    let output = execute(
        Command::Checkout {
            tour_id: "t1".to_string(),
        },
        &h.client,
        &h.config,
        true,
    )
    .await
    .expect("checkout");

    let value: serde_json::Value = serde_json::from_str(&output).expect("json output");
    assert_eq!(value["checkout_url"], "https://checkout.example.com/pay/abc");
    assert_eq!(value["tx_ref"], "tx-1");
}

#[tokio::test]
async fn given_backend_failure_when_executing_then_backend_message_surfaced() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tours/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "fail",
            "message": "No tour found with that ID"
        })))
        .mount(&h.server)
        .await;

    let err = execute(
        Command::Tour {
            id: "missing".to_string(),
        },
        &h.client,
        &h.config,
        false,
    )
    .await
    .expect_err("missing tour");

    assert_eq!(err.user_message(), "No tour found with that ID");
}
