use crate::helpers::{TestBackend, seed_session, start_signed_in_backend};

use common::HttpStatusCode;

use models::{ReviewDraftBuilder, Role, UserUpdate};
use tour_client::{ApiClient, ApiError, MemorySessionStore, QuerySpec, SessionEvent, SessionStore};

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;

use serde_json::json;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

async fn reject_everything_with_401(backend: &TestBackend) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "fail",
            "message": "Your token has expired! Please log in again."
        })))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&backend.server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&backend.server)
        .await;
}

/// **VALUE**: A 401 tears down the session before the caller sees the error.
///
/// **WHY THIS MATTERS**: An expired token that stays stored makes every later
/// request fail the same way; the host must be told to show the login page.
///
/// **BUG THIS CATCHES**: Would catch:
/// - The session surviving a 401
/// - The expiry event being skipped or published twice
/// - The backend's explanation being replaced by a generic message
#[tokio::test]
async fn given_expired_token_when_backend_returns_401_then_session_cleared_and_expired_published() {
    // GIVEN: A signed-in client and a backend rejecting the token
    let backend = start_signed_in_backend(Role::User).await;
    reject_everything_with_401(&backend).await;
    let mut events = backend.client.subscribe();

    // WHEN: Any authenticated call is made
    let err = backend.client.users().get_me().await.expect_err("401");

    // THEN: Error surfaced with backend text, store empty, exactly one Expired
    assert!(err.is_unauthenticated());
    assert_eq!(err.message(), "Your token has expired! Please log in again.");
    assert!(!backend.store.is_authenticated());
    assert!(backend.store.user().is_none());
    assert_eq!(
        events.try_recv().expect("expired event"),
        SessionEvent::Expired {
            login_path: "/login".to_string()
        }
    );
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

/// Test helper: Assert one wrapper call hit a 401 and tore the session down exactly once.
fn assert_expired_once(
    backend: &TestBackend,
    events: &mut Receiver<SessionEvent>,
    result: Result<(), ApiError>,
    call: &str,
) {
    let err = result.expect_err(call);
    assert!(err.is_unauthenticated(), "{call}: {err}");
    assert_eq!(err.status(), Some(HttpStatusCode::UNAUTHORIZED), "{call}");
    assert!(!backend.store.is_authenticated(), "{call}: session survived");
    assert_eq!(
        events.try_recv(),
        Ok(SessionEvent::Expired {
            login_path: "/login".to_string()
        }),
        "{call}"
    );
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty), "{call}");
}

/// **VALUE**: The teardown lives in the shared request path, not in individual wrappers.
///
/// **BUG THIS CATCHES**: Would catch:
/// - A wrapper that maps the 401 itself and skips the session clear
/// - A wrapper that publishes Expired twice or not at all
#[tokio::test]
async fn given_401_from_any_resource_when_called_then_each_clears_session_once() {
    // GIVEN: A backend rejecting every call with 401
    let backend = start_signed_in_backend(Role::User).await;
    reject_everything_with_401(&backend).await;
    let draft = ReviewDraftBuilder::default()
        .with_review("Nice")
        .with_rating(5)
        .build()
        .expect("draft");

    // WHEN/THEN: Each wrapper runs against a freshly seeded session
    let mut events = backend.client.subscribe();
    let result = backend.client.tours().get_all(&QuerySpec::new()).await.map(|_| ());
    assert_expired_once(&backend, &mut events, result, "tours.get_all");

    seed_session(&backend.store, Role::User);
    let result = backend
        .client
        .reviews()
        .create_review_for_tour("t1", &draft)
        .await
        .map(|_| ());
    assert_expired_once(&backend, &mut events, result, "reviews.create_review_for_tour");

    seed_session(&backend.store, Role::User);
    let result = backend.client.users().update_me(&UserUpdate::default()).await.map(|_| ());
    assert_expired_once(&backend, &mut events, result, "users.update_me");

    seed_session(&backend.store, Role::User);
    let result = backend.client.bookings().get_my_bookings().await.map(|_| ());
    assert_expired_once(&backend, &mut events, result, "bookings.get_my_bookings");

    seed_session(&backend.store, Role::User);
    let result = backend
        .client
        .auth()
        .login("leo@example.com", "wrong")
        .await
        .map(|_| ());
    assert_expired_once(&backend, &mut events, result, "auth.login");
}

/// **VALUE**: A 401 whose body cannot be read still expires the session.
///
/// **WHY THIS MATTERS**: Proxies and crashing backends cut bodies short; the
/// status line alone decides the teardown.
///
/// **BUG THIS CATCHES**: Would catch:
/// - A body read error surfacing as Network and skipping the clear
/// - The generic status message not being used when the body is unusable
#[tokio::test]
async fn given_truncated_401_body_when_requesting_then_session_still_expired() {
    // GIVEN: A raw server announcing 100 body bytes, sending 6, then hanging up
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = stream.read(&mut chunk).expect("read request");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..read]);
        }
        stream
            .write_all(
                b"HTTP/1.1 401 Unauthorized\r\n\
                  Content-Type: application/json\r\n\
                  Content-Length: 100\r\n\r\n\
                  {\"stat",
            )
            .expect("write response");
    });

    let store = Arc::new(MemorySessionStore::new());
    seed_session(&store, Role::User);
    let client =
        ApiClient::new(&format!("http://{addr}/api/v1"), store.clone()).expect("client");
    let mut events = client.subscribe();

    // WHEN
    let err = client.users().get_me().await.expect_err("401");
    server.join().expect("server thread");

    // THEN: Treated as a 401 with the generic message
    assert!(err.is_unauthenticated(), "{err}");
    assert_eq!(err.message(), "Request failed with status code 401");
    assert!(!store.is_authenticated());
    assert!(matches!(events.try_recv(), Ok(SessionEvent::Expired { .. })));
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn given_configured_login_path_when_401_then_expired_event_carries_it() {
    let backend = start_signed_in_backend(Role::User).await;
    reject_everything_with_401(&backend).await;
    let client = backend.client.clone().with_login_path("/auth/sign-in");
    let mut events = client.subscribe();

    let _ = client.users().get_by_id("u1").await;

    assert_eq!(
        events.try_recv().expect("expired event"),
        SessionEvent::Expired {
            login_path: "/auth/sign-in".to_string()
        }
    );
    assert!(
        client
            .users()
            .get_by_id("u1")
            .await
            .is_err_and(|e| e.is_unauthenticated())
    );
}
