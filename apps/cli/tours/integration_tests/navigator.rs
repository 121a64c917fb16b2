use tours::navigator::{Navigator, spawn_expiry_forwarder};

use common::RedactedToken;
use models::User;
use tour_client::{ApiClient, MemorySessionStore, Session};

use std::sync::{Arc, Mutex};

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited
            .lock()
            .expect("navigator lock")
            .push(path.to_string());
    }
}

/// **VALUE**: A 401 anywhere ends with the host navigating to the login path, once.
///
/// **WHY THIS MATTERS**: This is the only path by which an expired session
/// reaches the user; the access layer never navigates by itself.
///
/// **BUG THIS CATCHES**: Would catch:
/// - The forwarder ignoring `Expired`
/// - Navigation for logins or logouts
/// - The forwarder exiting before the channel has drained
#[tokio::test]
async fn given_expired_session_when_forwarding_then_navigator_visits_login_once() {
    // GIVEN: A signed-in client against a backend that rejects the token
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let store = Arc::new(MemorySessionStore::with_session(Session::new(
        RedactedToken::new("stale"),
        User::default(),
    )));
    let client = ApiClient::new(&format!("{}/api/v1", server.uri()), store)
        .expect("client")
        .with_login_path("/login");
    let navigator = Arc::new(RecordingNavigator::default());
    let forwarder = spawn_expiry_forwarder(client.subscribe(), navigator.clone());

    // WHEN: A request fails with 401, a logout follows, then the client goes away
    let _ = client.users().get_me().await;
    client.auth().logout().expect("logout");
    drop(client);
    forwarder.await.expect("forwarder exits cleanly");

    // THEN
    assert_eq!(
        *navigator.visited.lock().expect("navigator lock"),
        vec!["/login".to_string()]
    );
}
