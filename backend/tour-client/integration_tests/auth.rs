use crate::helpers::{
    TEST_TOKEN, api_path, auth_json, received_auth_headers, start_backend, user_json,
};

use tour_client::{SessionEvent, SessionStore};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: A successful login stores token and user and announces the session.
///
/// **WHY THIS MATTERS**: Every later request depends on the stored token; the
/// header bar depends on the cached user.
///
/// **BUG THIS CATCHES**: Would catch login responses being decoded but never
/// persisted, or persisted without the user record.
#[tokio::test]
async fn given_valid_credentials_when_login_then_session_stored_and_event_published() {
    // GIVEN: A backend that accepts the credentials
    let backend = start_backend().await;
    let mut events = backend.client.subscribe();
    Mock::given(method("POST"))
        .and(path(api_path("/users/login")))
        .and(body_json(json!({"email": "leo@example.com", "password": "test1234"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(auth_json(TEST_TOKEN, user_json("u1", "user"))),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    // WHEN: Logging in
    let response = backend
        .client
        .auth()
        .login("leo@example.com", "test1234")
        .await
        .expect("login succeeds");

    // THEN: Session stored and announced
    assert_eq!(response.user().and_then(|u| u.id()), Some("u1"));
    assert_eq!(
        backend.store.token().map(|t| t.as_str().to_string()),
        Some(TEST_TOKEN.to_string())
    );
    assert_eq!(backend.store.user().map(|u| u.email), Some("leo@example.com".to_string()));
    assert_eq!(
        events.try_recv().expect("event"),
        SessionEvent::LoggedIn {
            user_id: Some("u1".to_string())
        }
    );
}

/// **BUG THIS CATCHES**: Would catch a failed login leaving the user half signed in,
/// or losing the backend's explanation.
#[tokio::test]
async fn given_wrong_password_when_login_then_backend_message_surfaced_and_no_session() {
    let backend = start_backend().await;
    Mock::given(method("POST"))
        .and(path(api_path("/users/login")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "fail",
            "message": "Incorrect email or password"
        })))
        .mount(&backend.server)
        .await;

    let err = backend
        .client
        .auth()
        .login("leo@example.com", "nope")
        .await
        .expect_err("login fails");

    assert_eq!(err.message(), "Incorrect email or password");
    assert!(!backend.store.is_authenticated());
}

/// **VALUE**: Signup that requires email verification does not open a session.
#[tokio::test]
async fn given_signup_pending_verification_when_signup_then_message_returned_without_session() {
    let backend = start_backend().await;
    Mock::given(method("POST"))
        .and(path(api_path("/users/signup")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": "success",
            "message": "Verification email sent"
        })))
        .mount(&backend.server)
        .await;

    let response = backend
        .client
        .auth()
        .signup("Leo", "leo@example.com", "test1234", "test1234")
        .await
        .expect("signup succeeds");

    assert_eq!(response.message.as_deref(), Some("Verification email sent"));
    assert!(!backend.store.is_authenticated());
}

#[tokio::test]
async fn given_verification_token_when_verify_email_then_session_stored() {
    let backend = start_backend().await;
    Mock::given(method("GET"))
        .and(path(api_path("/users/verifyEmail/abc123")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(auth_json("fresh-token", user_json("u7", "user"))),
        )
        .mount(&backend.server)
        .await;

    backend
        .client
        .auth()
        .verify_email("abc123")
        .await
        .expect("verification succeeds");

    assert_eq!(
        backend.store.token().map(|t| t.as_str().to_string()),
        Some("fresh-token".to_string())
    );
}

/// **VALUE**: Logout is local and the next request goes out anonymously.
///
/// **BUG THIS CATCHES**: Would catch a cached header or client-level default
/// header surviving logout.
#[tokio::test]
async fn given_signed_in_when_logout_then_next_request_has_no_authorization() {
    // GIVEN: A signed-in client
    let backend = start_backend().await;
    Mock::given(method("POST"))
        .and(path(api_path("/users/login")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(auth_json(TEST_TOKEN, user_json("u1", "user"))),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/tours")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success", "results": 0, "data": {"data": []}
        })))
        .mount(&backend.server)
        .await;
    backend
        .client
        .auth()
        .login("leo@example.com", "test1234")
        .await
        .expect("login");
    let mut events = backend.client.subscribe();

    // WHEN: Logging out and then listing tours
    backend.client.auth().logout().expect("logout");
    backend
        .client
        .tours()
        .get_all(&Default::default())
        .await
        .expect("tours");

    // THEN: Store is empty and the tours request carried no credentials
    assert!(!backend.store.is_authenticated());
    assert_eq!(events.try_recv().expect("event"), SessionEvent::LoggedOut);
    let headers = received_auth_headers(&backend.server).await;
    assert_eq!(headers.len(), 2);
    assert_eq!(headers[0], None, "login itself is anonymous");
    assert_eq!(headers[1], None, "request after logout is anonymous");
}

#[tokio::test]
async fn given_email_when_forgot_password_then_acknowledgement_returned() {
    let backend = start_backend().await;
    Mock::given(method("POST"))
        .and(path(api_path("/users/forgotPassword")))
        .and(body_json(json!({"email": "leo@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Token sent to email!"
        })))
        .mount(&backend.server)
        .await;

    let response = backend
        .client
        .auth()
        .forgot_password("leo@example.com")
        .await
        .expect("acknowledged");

    assert_eq!(response.message.as_deref(), Some("Token sent to email!"));
}
