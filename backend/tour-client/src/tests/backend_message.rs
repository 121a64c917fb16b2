use crate::api_client::extract_backend_message;
use crate::error::ApiError;

use common::HttpStatusCode;

#[test]
fn given_json_error_body_when_extracting_then_message_field_returned() {
    let body = r#"{"status":"fail","message":"Incorrect email or password"}"#;

    assert_eq!(
        extract_backend_message(body).as_deref(),
        Some("Incorrect email or password")
    );
}

#[test]
fn given_body_without_usable_message_when_extracting_then_none() {
    assert_eq!(extract_backend_message("<html>Bad Gateway</html>"), None);
    assert_eq!(extract_backend_message(r#"{"status":"error"}"#), None);
    assert_eq!(extract_backend_message(r#"{"message":""}"#), None);
    assert_eq!(extract_backend_message(r#"{"message":42}"#), None);
}

/// **VALUE**: The backend's own message is what the user sees.
///
/// **BUG THIS CATCHES**: Would catch the generic status text winning over the
/// backend message, hiding "No tour found with that ID" behind "status code 404".
#[test]
fn given_backend_message_when_building_status_error_then_message_preserved() {
    let err = ApiError::from_status(
        HttpStatusCode(404),
        Some("No tour found with that ID".to_string()),
    );

    assert_eq!(err.message(), "No tour found with that ID");
    assert_eq!(err.backend_message(), Some("No tour found with that ID"));
    assert_eq!(err.status(), Some(HttpStatusCode(404)));
    assert!(!err.is_unauthenticated());
}

#[test]
fn given_no_backend_message_when_building_status_error_then_generic_message() {
    let err = ApiError::from_status(HttpStatusCode(500), None);

    assert_eq!(err.message(), "Request failed with status code 500");
    assert_eq!(err.backend_message(), None);
}

#[test]
fn given_401_when_building_status_error_then_unauthenticated_variant() {
    let err = ApiError::from_status(HttpStatusCode::UNAUTHORIZED, None);

    assert!(err.is_unauthenticated());
    assert_eq!(err.status(), Some(HttpStatusCode::UNAUTHORIZED));
}

#[test]
#[track_caller]
fn given_status_error_when_formatted_then_includes_location() {
    let err = ApiError::from_status(HttpStatusCode(400), Some("Invalid input".to_string()));

    let rendered = err.to_string();

    assert!(rendered.contains("HTTP 400"));
    assert!(rendered.contains("Invalid input"));
    assert!(rendered.contains("backend_message.rs"));
}
