use crate::helpers::{
    TEST_TOKEN, api_path, auth_json, document_json, list_json, start_signed_in_backend,
    user_json,
};

use models::{PasswordChange, Role, UserUpdate};
use tour_client::SessionStore;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_session_when_get_me_then_current_user_returned() {
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("GET"))
        .and(path(api_path("/users/me")))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_json(user_json("u1", "user"))))
        .expect(1)
        .mount(&backend.server)
        .await;

    let me = backend.client.users().get_me().await.expect("me");

    assert_eq!(me.id(), Some("u1"));
    assert_eq!(me.photo.as_deref(), Some("user-1.jpg"));
}

/// **VALUE**: Profile edits update the cached session user so the header bar
/// reflects the new name without another round trip.
#[tokio::test]
async fn given_profile_update_when_update_me_then_cached_user_refreshed() {
    // GIVEN
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("PATCH"))
        .and(path(api_path("/users/updateMe")))
        .and(body_json(json!({"name": "Leo G."})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {"user": {"_id": "u1", "name": "Leo G.", "email": "leo@example.com", "role": "user"}}
        })))
        .mount(&backend.server)
        .await;

    // WHEN
    let update = UserUpdate {
        name: Some("Leo G.".to_string()),
        ..UserUpdate::default()
    };
    let updated = backend.client.users().update_me(&update).await.expect("updated");

    // THEN: Token kept, user replaced
    assert_eq!(updated.name, "Leo G.");
    let session = backend.store.get().expect("still signed in");
    assert_eq!(session.token.as_str(), TEST_TOKEN);
    assert_eq!(session.user.name, "Leo G.");
}

/// **VALUE**: A password change rotates the stored token.
///
/// **BUG THIS CATCHES**: Would catch the old token staying in the store; the
/// backend invalidates it, so the next request would log the user out.
#[tokio::test]
async fn given_password_change_when_accepted_then_new_token_stored() {
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("PATCH"))
        .and(path(api_path("/users/updateMyPassword")))
        .and(body_json(json!({
            "passwordCurrent": "old-pass",
            "password": "new-pass-1",
            "passwordConfirm": "new-pass-1"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(auth_json("rotated-token", user_json("u1", "user"))),
        )
        .mount(&backend.server)
        .await;

    let change = PasswordChange {
        password_current: "old-pass".to_string(),
        password: "new-pass-1".to_string(),
        password_confirm: "new-pass-1".to_string(),
    };
    backend
        .client
        .users()
        .update_my_password(&change)
        .await
        .expect("changed");

    assert_eq!(
        backend.store.token().map(|t| t.as_str().to_string()),
        Some("rotated-token".to_string())
    );
}

#[tokio::test]
async fn given_admin_when_listing_guides_then_role_filter_sent() {
    let backend = start_signed_in_backend(Role::Admin).await;
    Mock::given(method("GET"))
        .and(path(api_path("/users")))
        .and(query_param("role", "guide"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![
            user_json("g1", "guide"),
            user_json("g2", "guide"),
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let guides = backend
        .client
        .users()
        .get_all(Some(Role::Guide))
        .await
        .expect("guides");

    assert!(guides.items().iter().all(|u| u.role == Role::Guide));
}

/// **VALUE**: Deactivating the account does not clear the local session by itself.
#[tokio::test]
async fn given_delete_me_when_accepted_then_session_left_to_caller() {
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/users/deleteMe")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&backend.server)
        .await;

    backend.client.users().delete_me().await.expect("deleted");

    assert!(backend.store.is_authenticated());
}
