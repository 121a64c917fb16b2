use crate::{AuthResponse, DocumentResponse, ListResponse, Review, Role, StatsResponse, Tour};

use serde_json::json;

/// **VALUE**: List endpoints wrap documents twice (`data.data`).
///
/// **WHY THIS MATTERS**: Every list page reads `response.data.data`. Getting the nesting
/// wrong yields an empty page with no error.
#[test]
fn given_list_payload_when_decoding_then_items_are_unwrapped() {
    // GIVEN: A list response
    let payload = json!({
        "status": "success",
        "results": 2,
        "data": {"data": [
            {"_id": "r1", "review": "Loved it", "rating": 5, "user": {"_id": "u1", "name": "Sara"}},
            {"_id": "r2", "review": "Okay", "rating": 3, "user": "u2"}
        ]}
    });

    // WHEN: Decoding
    let response: ListResponse<Review> = serde_json::from_value(payload).expect("decodes");

    // THEN
    assert_eq!(response.results, Some(2));
    assert_eq!(response.items().len(), 2);
    let items = response.into_items();
    assert!(items[0].is_authored_by("u1"));
    assert!(items[1].is_authored_by("u2"));
}

#[test]
fn given_document_payload_when_decoding_then_document_is_unwrapped() {
    let payload = json!({
        "status": "success",
        "data": {"data": {"_id": "t1", "name": "The Park Camper", "price": 1497}}
    });

    let response: DocumentResponse<Tour> = serde_json::from_value(payload).expect("decodes");

    assert_eq!(response.into_document().name, "The Park Camper");
}

/// **VALUE**: Login responses carry the token beside the user record.
///
/// **BUG THIS CATCHES**: Would catch if the token decodes but then prints in Debug output.
#[test]
fn given_auth_payload_when_decoding_then_token_and_user_present_and_token_redacted() {
    let payload = json!({
        "status": "success",
        "token": "jwt-value",
        "data": {"user": {"_id": "u1", "name": "Sara", "email": "sara@example.com", "role": "lead-guide"}}
    });

    let response: AuthResponse = serde_json::from_value(payload).expect("decodes");

    let token = response.token.as_ref().expect("token present");
    assert_eq!(token.as_str(), "jwt-value");
    assert_eq!(response.user().map(|u| u.role), Some(Role::LeadGuide));
    assert!(!format!("{response:?}").contains("jwt-value"));
}

#[test]
fn given_verification_signup_payload_when_decoding_then_only_message_present() {
    let payload = json!({"status": "success", "message": "Verification email sent"});

    let response: AuthResponse = serde_json::from_value(payload).expect("decodes");

    assert!(response.token.is_none());
    assert!(response.user().is_none());
    assert_eq!(response.message.as_deref(), Some("Verification email sent"));
}

#[test]
fn given_stats_payload_when_decoding_then_rows_map_from_group_id() {
    let payload = json!({
        "status": "success",
        "data": {"stats": [{
            "_id": "EASY", "numTours": 4, "numRatings": 13,
            "avgRating": 4.7, "avgPrice": 1272, "minPrice": 397, "maxPrice": 1997
        }]}
    });

    let response: StatsResponse = serde_json::from_value(payload).expect("decodes");

    assert_eq!(response.data.stats[0].group.as_deref(), Some("EASY"));
    assert_eq!(response.data.stats[0].num_tours, 4);
}
