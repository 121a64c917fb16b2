use crate::helpers::{api_path, list_json, start_signed_in_backend};

use models::Role;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Checkout returns the hosted payment page the user is sent to.
#[tokio::test]
async fn given_tour_when_creating_booking_then_checkout_session_returned() {
    // GIVEN
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("GET"))
        .and(path(api_path("/bookings/checkout-session/t1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {
                "checkout_url": "https://checkout.example.com/pay/abc",
                "tx_ref": "tx-t1-u1-1700000000",
                "amount": 497
            }
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    // WHEN
    let session = backend.client.bookings().create("t1").await.expect("checkout");

    // THEN: Known fields surfaced, gateway extras kept
    assert_eq!(
        session.checkout_url.as_deref(),
        Some("https://checkout.example.com/pay/abc")
    );
    assert_eq!(session.tx_ref.as_deref(), Some("tx-t1-u1-1700000000"));
    assert_eq!(session.extra.get("amount"), Some(&json!(497)));
}

#[tokio::test]
async fn given_tx_ref_when_verifying_then_booking_returned() {
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("GET"))
        .and(path(api_path("/bookings/verify/tx-42")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Payment verified",
            "data": {"booking": {"_id": "b1", "tour": "t1", "user": "u1", "price": 497, "paid": true}}
        })))
        .mount(&backend.server)
        .await;

    let verification = backend
        .client
        .bookings()
        .verify("tx-42")
        .await
        .expect("verified");

    let booking = verification
        .data
        .and_then(|data| data.booking)
        .expect("booking present");
    assert_eq!(booking.id(), Some("b1"));
    assert!(booking.paid);
}

#[tokio::test]
async fn given_signed_in_when_listing_my_bookings_then_items_returned() {
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("GET"))
        .and(path(api_path("/bookings/me")))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![json!({
            "_id": "b1", "tour": {"_id": "t1", "name": "The Forest Hiker"}, "price": 397, "paid": true
        })])))
        .mount(&backend.server)
        .await;

    let bookings = backend
        .client
        .bookings()
        .get_my_bookings()
        .await
        .expect("bookings");

    assert_eq!(bookings.items().len(), 1);
}

/// **BUG THIS CATCHES**: Would catch the unsupported listing reaching the network.
#[tokio::test]
async fn given_unsupported_listing_when_called_then_backend_never_contacted() {
    let backend = start_signed_in_backend(Role::User).await;

    let err = backend.client.bookings().get_all().expect_err("unsupported");

    assert!(err.is_not_implemented());
    let received = backend.server.received_requests().await.expect("recorded");
    assert!(received.is_empty());
}
