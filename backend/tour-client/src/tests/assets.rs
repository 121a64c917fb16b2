use crate::config::resolve_asset_url;

const API_BASE: &str = "http://api.example.com:8080/api/v1";

#[test]
fn given_missing_or_empty_name_when_resolving_then_empty_string() {
    assert_eq!(resolve_asset_url(None, None, Some(API_BASE)), "");
    assert_eq!(resolve_asset_url(Some(""), None, Some(API_BASE)), "");
}

/// **BUG THIS CATCHES**: Would catch absolute image URLs being re-rooted under
/// the backend origin, producing `http://host/img/https://cdn...`.
#[test]
fn given_absolute_url_when_resolving_then_returned_unchanged_regardless_of_case() {
    let name = "HTTPS://cdn.example.com/tour-1-cover.jpg";

    assert_eq!(resolve_asset_url(Some(name), None, Some(API_BASE)), name);
}

/// **VALUE**: Bare file names live under `/img/` on the API's origin, not under `/api/v1`.
#[test]
fn given_bare_name_when_no_asset_base_then_api_origin_and_img_dir_used() {
    assert_eq!(
        resolve_asset_url(Some("tour-1-cover.jpg"), None, Some(API_BASE)),
        "http://api.example.com:8080/img/tour-1-cover.jpg"
    );
}

#[test]
fn given_rooted_name_when_asset_base_set_then_asset_base_used_verbatim() {
    assert_eq!(
        resolve_asset_url(
            Some("/img/users/default.jpg"),
            Some("https://cdn.example.com/"),
            Some(API_BASE)
        ),
        "https://cdn.example.com/img/users/default.jpg"
    );
}

#[test]
fn given_no_usable_base_when_resolving_then_local_backend_used() {
    assert_eq!(
        resolve_asset_url(Some("tour-2.jpg"), None, None),
        "http://localhost:3000/img/tour-2.jpg"
    );
    assert_eq!(
        resolve_asset_url(Some("tour-2.jpg"), None, Some("not a url")),
        "http://localhost:3000/img/tour-2.jpg"
    );
}
