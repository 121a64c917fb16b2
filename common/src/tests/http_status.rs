use crate::HttpStatusCode;

/// **VALUE**: 401 is the only status that triggers session teardown.
///
/// **BUG THIS CATCHES**: Would catch if 403 (authenticated but forbidden) were
/// classified as unauthorized, logging users out for permission errors.
#[test]
fn given_statuses_when_checking_unauthorized_then_only_401_matches() {
    assert!(HttpStatusCode(401).is_unauthorized());
    assert!(!HttpStatusCode(403).is_unauthorized());
    assert!(!HttpStatusCode(400).is_unauthorized());
    assert!(!HttpStatusCode(500).is_unauthorized());
}

#[test]
fn given_status_ranges_when_classified_then_buckets_are_disjoint() {
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(204).is_client_error());
    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(404).is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(302).is_success());
}

/// **VALUE**: Callers show this text when the backend sends no `message` field.
#[test]
fn given_status_when_generic_message_requested_then_includes_code() {
    assert_eq!(
        HttpStatusCode::from(500).generic_failure_message(),
        "Request failed with status code 500"
    );
}
