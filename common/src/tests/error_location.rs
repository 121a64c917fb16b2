use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every client error carries an ErrorLocation. If capture breaks,
/// a failed tour fetch can no longer be traced to the wrapper that raised it.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being propagated or
/// the file path is dropped.
#[test]
#[track_caller]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Capturing the current caller
    let location = ErrorLocation::from(Location::caller());

    // THEN: File and column are populated
    assert!(location.file.ends_with(".rs"), "Should capture a source file");
    assert!(location.line > 0, "Should capture a line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the "[file:line:column]" Display format used in every error message.
///
/// **BUG THIS CATCHES**: Would catch if brackets or separators change and break log parsing.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A location at a fixed position
    let location = ErrorLocation {
        file: "src/api_client/mod.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting
    let formatted = location.to_string();

    // THEN: Bracketed file:line:column
    assert_eq!(formatted, "[src/api_client/mod.rs:42:7]");
}

/// **VALUE**: Verifies that `#[track_caller]` gives each call site its own line.
///
/// **BUG THIS CATCHES**: Would catch if a helper stops forwarding the caller, making
/// every error point at the constructor instead of the failing wrapper.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    let loc1 = capture_location();
    let loc2 = capture_location();

    assert_eq!(loc1.file, loc2.file, "Should have same file");
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}
