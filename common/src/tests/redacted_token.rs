use crate::RedactedToken;

/// **VALUE**: Tokens never show up in Debug/Display output.
///
/// **WHY THIS MATTERS**: Request logging formats sessions with `{:?}`. A leaked bearer
/// token in a log file is a full account takeover.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug replacing the manual impl.
#[test]
fn given_token_when_formatted_then_value_is_redacted() {
    // GIVEN: A token
    let token = RedactedToken::new("eyJhbGciOiJIUzI1NiJ9.secret");

    // WHEN: Formatting both ways
    let debug = format!("{token:?}");
    let display = format!("{token}");

    // THEN: No secret material
    assert!(!debug.contains("secret"));
    assert!(!display.contains("secret"));
    assert_eq!(token.len(), 27);
}

#[test]
fn given_token_when_bearer_header_built_then_prefixes_scheme() {
    let token = RedactedToken::new("abc123");

    assert_eq!(token.bearer_header(), "Bearer abc123");
    assert_eq!(token.as_str(), "abc123");
}

/// **BUG THIS CATCHES**: Would catch a derived Serialize that writes the raw token
/// into an arbitrary JSON payload.
#[test]
fn given_token_when_serialized_implicitly_then_errors() {
    let token = RedactedToken::new("abc123");

    let result = serde_json::to_string(&token);

    assert!(result.is_err(), "Implicit serialization must be refused");
}
