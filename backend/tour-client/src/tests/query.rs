use crate::api_client::ApiRequest;
use crate::query::{QuerySpec, QueryValue, TourFilter};

use models::Difficulty;

/// **VALUE**: Absent, null and empty values never reach the wire.
///
/// **WHY THIS MATTERS**: The backend treats `?difficulty=` as a filter for an
/// empty difficulty and returns no tours.
///
/// **BUG THIS CATCHES**: Would catch if empty text or `None` options were
/// encoded as empty parameters.
#[test]
fn given_mixed_values_when_encoding_then_absent_null_and_empty_are_omitted() {
    // GIVEN: A query with every kind of omittable value
    let query = QuerySpec::new()
        .with("difficulty", "easy")
        .with("sort", "")
        .with("page", Option::<u32>::None)
        .with("fields", QueryValue::Null)
        .with("limit", 0u32);

    // WHEN: Encoding
    let encoded = query.to_query_string();

    // THEN: Zero is kept, the rest are dropped
    assert_eq!(encoded.as_deref(), Some("difficulty=easy&limit=0"));
}

#[test]
fn given_only_omittable_values_when_encoding_then_no_query_string() {
    let query = QuerySpec::new()
        .with("sort", "")
        .with("page", QueryValue::Absent);

    assert!(query.is_empty());
    assert_eq!(query.to_query_string(), None);
}

/// **BUG THIS CATCHES**: Would catch `price[lte]=inf` or `NaN` reaching the
/// backend, which rejects them as invalid numbers.
#[test]
fn given_non_finite_floats_when_encoding_then_they_are_omitted() {
    let query = QuerySpec::new()
        .with("price[lte]", f64::INFINITY)
        .with("ratingsAverage", f64::NAN)
        .with("duration[gte]", f64::NEG_INFINITY)
        .with("price[gte]", 497.5);

    assert_eq!(query.get("ratingsAverage").and_then(QueryValue::coerce), None);
    assert_eq!(query.to_query_string().as_deref(), Some("price%5Bgte%5D=497.5"));
}

/// **BUG THIS CATCHES**: Would catch a request path ending in a bare `?`.
#[test]
fn given_empty_query_when_building_path_then_no_question_mark() {
    let request = ApiRequest::get("/tours").with_query(QuerySpec::new());

    assert_eq!(request.path_and_query(), "/tours");
}

#[test]
fn given_single_filter_when_building_path_then_query_appended() {
    let request = ApiRequest::get("/tours").with_query(QuerySpec::new().with("difficulty", "easy"));

    assert_eq!(request.path_and_query(), "/tours?difficulty=easy");
}

/// **VALUE**: Keys keep insertion order and a repeated key replaces the value in place.
#[test]
fn given_repeated_key_when_inserting_then_value_replaced_in_place() {
    let mut query = QuerySpec::new().with("page", 1u32).with("limit", 10u32);

    query.insert("page", 3u32);

    assert_eq!(
        query.pairs(),
        vec![("page", "3".to_string()), ("limit", "10".to_string())]
    );
    assert_eq!(query.get("page"), Some(&QueryValue::Integer(3)));
}

#[test]
fn given_reserved_characters_when_encoding_then_values_are_escaped() {
    let query: QuerySpec = [("sort", "-ratingsAverage,price"), ("name", "Sea & Sun")]
        .into_iter()
        .collect();

    assert_eq!(
        query.to_query_string().as_deref(),
        Some("sort=-ratingsAverage%2Cprice&name=Sea+%26+Sun")
    );
}

/// **VALUE**: The typed filter lowers into the backend's bracket operators.
///
/// **BUG THIS CATCHES**: Would catch a rename of `duration[gte]` or `price[lte]`,
/// which the backend silently ignores.
#[test]
fn given_tour_filter_when_lowered_then_bracket_operators_used() {
    // GIVEN: A filter with some fields set
    let filter = TourFilter {
        difficulty: Some(Difficulty::Medium),
        duration_gte: Some(5),
        price_lte: Some(997.5),
        sort: Some("price".to_string()),
        ..TourFilter::default()
    };

    // WHEN: Lowering to a query
    let pairs: Vec<(String, String)> = QuerySpec::from(&filter)
        .pairs()
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();

    // THEN: Unset fields are absent
    assert_eq!(
        pairs,
        vec![
            ("difficulty".to_string(), "medium".to_string()),
            ("duration[gte]".to_string(), "5".to_string()),
            ("price[lte]".to_string(), "997.5".to_string()),
            ("sort".to_string(), "price".to_string()),
        ]
    );
}

#[test]
fn given_default_filter_when_lowered_then_query_is_empty() {
    assert!(TourFilter::default().to_query().is_empty());
}
