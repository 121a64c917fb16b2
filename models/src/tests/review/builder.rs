use crate::{ModelError, ReviewDraftBuilder};

/// **VALUE**: Verifies the builder accepts a complete, in-range review.
///
/// **WHY THIS MATTERS**: This is the happy path of every review submission. If it breaks,
/// no user can post a review.
#[test]
fn given_text_and_rating_when_building_then_returns_draft() {
    // GIVEN: A complete draft
    let builder = ReviewDraftBuilder::default()
        .with_review("Breathtaking views of the Simien Mountains")
        .with_rating(5);

    // WHEN: Building
    let draft = builder.build().expect("complete draft should build");

    // THEN: Fields are carried through and no tour is attached
    assert_eq!(draft.review, "Breathtaking views of the Simien Mountains");
    assert_eq!(draft.rating, 5);
    assert_eq!(draft.tour, None);
}

/// **VALUE**: Verifies that a rating of zero (no star selected) is rejected.
///
/// **WHY THIS MATTERS**: The star widget starts at 0. Submitting it unchanged must surface
/// "missing fields" locally instead of a backend validation error.
///
/// **BUG THIS CATCHES**: Would catch if the range check is removed or off by one.
#[test]
fn given_zero_rating_when_building_then_returns_validation_error() {
    let result = ReviewDraftBuilder::default()
        .with_review("Nice")
        .with_rating(0)
        .build();

    match result {
        Err(ModelError::Validation { field, message, .. }) => {
            assert_eq!(field, "rating");
            assert_eq!(message, "Rating must be between 1 and 5, got 0");
        }
        Ok(_) => panic!("Expected validation error for rating 0"),
    }
}

#[test]
fn given_rating_above_five_when_building_then_returns_validation_error() {
    let result = ReviewDraftBuilder::default()
        .with_review("Nice")
        .with_rating(6)
        .build();

    assert!(result.is_err(), "Rating 6 should be rejected");
}

/// **BUG THIS CATCHES**: Would catch if whitespace-only text slips past the emptiness check.
#[test]
fn given_blank_review_text_when_building_then_returns_validation_error() {
    let result = ReviewDraftBuilder::default()
        .with_review("   ")
        .with_rating(4)
        .build();

    match result {
        Err(ModelError::Validation { field, message, .. }) => {
            assert_eq!(field, "review");
            assert_eq!(message, "Review text cannot be empty");
        }
        Ok(_) => panic!("Expected validation error for blank text"),
    }
}

#[test]
fn given_missing_rating_when_building_then_returns_validation_error() {
    let result = ReviewDraftBuilder::default().with_review("Nice").build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Rating is required");
        }
        Ok(_) => panic!("Expected validation error for missing rating"),
    }
}

/// **VALUE**: The top-level `POST /reviews` needs `tour` in the body, the nested route must not.
#[test]
fn given_tour_when_serializing_draft_then_tour_field_is_present_only_when_set() {
    let with_tour = ReviewDraftBuilder::default()
        .with_review("Great")
        .with_rating(4)
        .with_tour("t1")
        .build()
        .expect("draft should build");
    let without_tour = ReviewDraftBuilder::default()
        .with_review("Great")
        .with_rating(4)
        .build()
        .expect("draft should build");

    let with_json = serde_json::to_value(&with_tour).expect("serializes");
    let without_json = serde_json::to_value(&without_tour).expect("serializes");

    assert_eq!(
        with_json,
        serde_json::json!({"review": "Great", "rating": 4, "tour": "t1"})
    );
    assert_eq!(
        without_json,
        serde_json::json!({"review": "Great", "rating": 4})
    );
}
