use crate::helpers::{
    TEST_TOKEN, api_path, document_json, list_json, received_auth_headers, start_backend,
    start_signed_in_backend, tour_json,
};

use models::{Difficulty, Role};
use tour_client::{ApiClient, ApiError, MemorySessionStore, QuerySpec, TourFilter};

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Anonymous visitors can browse tours; no Authorization header is sent.
///
/// **BUG THIS CATCHES**: Would catch an empty `Bearer ` header being attached
/// when no session exists.
#[tokio::test]
async fn given_no_session_when_listing_tours_then_request_is_anonymous() {
    // GIVEN: A backend with two tours
    let backend = start_backend().await;
    Mock::given(method("GET"))
        .and(path(api_path("/tours")))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![
            tour_json("t1", "The Forest Hiker", 397.0),
            tour_json("t2", "The Sea Explorer", 497.0),
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;

    // WHEN
    let response = backend
        .client
        .tours()
        .get_all(&QuerySpec::new())
        .await
        .expect("tours");

    // THEN
    let names: Vec<&str> = response.items().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["The Forest Hiker", "The Sea Explorer"]);
    assert_eq!(received_auth_headers(&backend.server).await, vec![None]);
}

/// **VALUE**: A stored token rides on every request as a bearer header.
#[tokio::test]
async fn given_session_when_fetching_tour_then_bearer_header_attached() {
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("GET"))
        .and(path(api_path("/tours/t1")))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(document_json(tour_json("t1", "The Forest Hiker", 397.0))),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let tour = backend.client.tours().get_by_id("t1").await.expect("tour");

    assert_eq!(tour.id(), Some("t1"));
    assert_eq!(tour.difficulty, Some(Difficulty::Easy));
}

/// **BUG THIS CATCHES**: Would catch filter values being dropped or empty values
/// being sent as `key=`.
#[tokio::test]
async fn given_tour_filter_when_listing_then_only_set_parameters_sent() {
    let backend = start_backend().await;
    Mock::given(method("GET"))
        .and(path(api_path("/tours")))
        .and(query_param("difficulty", "easy"))
        .and(query_param("price[lte]", "500"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![tour_json(
            "t1",
            "The Forest Hiker",
            397.0,
        )])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let filter = TourFilter {
        difficulty: Some(Difficulty::Easy),
        price_lte: Some(500.0),
        sort: Some(String::new()),
        limit: Some(3),
        ..TourFilter::default()
    };
    backend
        .client
        .tours()
        .get_filtered(&filter)
        .await
        .expect("filtered tours");

    let requests = backend.server.received_requests().await.expect("recorded");
    assert_eq!(
        requests[0].url.query(),
        Some("difficulty=easy&price%5Blte%5D=500&limit=3")
    );
}

#[tokio::test]
async fn given_missing_tour_when_fetching_then_backend_message_in_server_error() {
    let backend = start_backend().await;
    Mock::given(method("GET"))
        .and(path(api_path("/tours/nope")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "fail",
            "message": "No tour found with that ID"
        })))
        .mount(&backend.server)
        .await;

    let err = backend
        .client
        .tours()
        .get_by_id("nope")
        .await
        .expect_err("missing tour");

    assert!(matches!(err, ApiError::Server { .. }));
    assert_eq!(err.message(), "No tour found with that ID");
}

/// **VALUE**: Non-JSON failures still yield a readable message.
#[tokio::test]
async fn given_html_error_page_when_fetching_then_generic_status_message() {
    let backend = start_backend().await;
    Mock::given(method("GET"))
        .and(path(api_path("/tours/top-5-cheap")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&backend.server)
        .await;

    let err = backend
        .client
        .tours()
        .get_top_cheap()
        .await
        .expect_err("gateway failure");

    assert_eq!(err.message(), "Request failed with status code 502");
    assert_eq!(err.backend_message(), None);
}

#[tokio::test]
async fn given_stats_and_plan_endpoints_when_called_then_payloads_unwrapped() {
    let backend = start_signed_in_backend(Role::Admin).await;
    Mock::given(method("GET"))
        .and(path(api_path("/tours/tour-stats")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {"stats": [
                {"_id": "EASY", "numTours": 4, "numRatings": 62, "avgRating": 4.7,
                 "avgPrice": 1272, "minPrice": 397, "maxPrice": 1997}
            ]}
        })))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/tours/monthly-plan/2021")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {"plan": [
                {"numTourStarts": 3, "tours": ["The Forest Hiker"], "month": 7}
            ]}
        })))
        .mount(&backend.server)
        .await;

    let stats = backend.client.tours().get_tour_stats().await.expect("stats");
    let plan = backend.client.tours().get_monthly_plan(2021).await.expect("plan");

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].num_tours, 4);
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].month, 7);
}

#[tokio::test]
async fn given_admin_when_deleting_tour_then_no_content_accepted() {
    let backend = start_signed_in_backend(Role::Admin).await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/tours/t1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    backend.client.tours().delete("t1").await.expect("deleted");
}

/// **VALUE**: Transport failures are distinguishable from backend rejections.
#[tokio::test]
async fn given_unreachable_backend_when_requesting_then_network_error() {
    // GIVEN: A port that was just released, so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    let client = ApiClient::new(
        &format!("http://127.0.0.1:{port}/api/v1"),
        Arc::new(MemorySessionStore::new()),
    )
    .expect("client");

    // WHEN
    let err = client
        .tours()
        .get_all(&QuerySpec::new())
        .await
        .expect_err("no backend");

    // THEN
    assert!(matches!(err, ApiError::Network { .. }));
    assert_eq!(err.status(), None);
}
