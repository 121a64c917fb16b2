// Unit tests for error module
// Tests conversion from library errors and JSON output for `--json`

use crate::error::TourCliError;

use common::{ErrorLocation, HttpStatusCode};
use models::ReviewDraftBuilder;
use tour_client::ApiError;

use std::panic::Location;

/// **VALUE**: `--json` prints errors as tagged JSON.
///
/// **BUG THIS CATCHES**: Would catch a non-serializable field being added to the error.
#[test]
fn given_cli_error_when_serialized_then_variant_and_message_present() {
    // GIVEN
    let err = TourCliError::InvalidInput {
        message: String::from("Rating is required"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN
    let json = serde_json::to_string(&err).expect("serializable");

    // THEN
    assert!(json.contains("InvalidInput"), "JSON should contain variant name");
    assert!(json.contains("Rating is required"));
}

/// **VALUE**: The user sees the backend's wording, and the status survives for scripts.
#[test]
fn given_api_error_when_converted_then_message_and_status_kept() {
    let api = ApiError::from_status(
        HttpStatusCode(404),
        Some(String::from("No tour found with that ID")),
    );

    let err = TourCliError::from(api);

    assert_eq!(err.user_message(), "No tour found with that ID");
    assert!(matches!(err, TourCliError::Api { status: Some(404), .. }));
}

#[test]
fn given_invalid_review_when_converted_then_invalid_input_with_validation_text() {
    let model_err = ReviewDraftBuilder::default()
        .with_review("Fine")
        .with_rating(9)
        .build()
        .expect_err("out of range");

    let err = TourCliError::from(model_err);

    assert!(matches!(err, TourCliError::InvalidInput { .. }));
    assert_eq!(err.user_message(), "Rating must be between 1 and 5, got 9");
}
