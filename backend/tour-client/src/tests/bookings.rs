use crate::api_client::ApiClient;
use crate::session::MemorySessionStore;

use std::sync::Arc;

// Nothing listens on this port; any I/O attempt would surface as a network error.
const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9/api/v1";

fn client() -> ApiClient {
    ApiClient::new(UNREACHABLE_BASE_URL, Arc::new(MemorySessionStore::new())).expect("client")
}

/// **VALUE**: Listing bookings is not supported by the backend and fails fast.
///
/// **WHY THIS MATTERS**: Callers must get a stable, recognizable error rather than
/// a 404 from a route that does not exist.
///
/// **BUG THIS CATCHES**: Would catch the guard being replaced by a real request.
#[test]
fn given_bookings_list_when_called_then_not_implemented_without_io() {
    // GIVEN: A client pointed at nothing
    let client = client();

    // WHEN: Listing all bookings
    let err = client.bookings().get_all().expect_err("must fail");

    // THEN: Guard error with the fixed message
    assert!(err.is_not_implemented());
    assert_eq!(
        err.message(),
        "Booking functionality not yet implemented in backend"
    );
    assert_eq!(err.status(), None);
}

#[test]
fn given_booking_lookup_when_called_then_not_implemented_for_any_id() {
    let client = client();

    for id in ["b1", "", "does-not-exist"] {
        let err = client.bookings().get_by_id(id).expect_err("must fail");
        assert!(err.is_not_implemented());
        assert_eq!(
            err.message(),
            "Booking functionality not yet implemented in backend"
        );
    }
}
