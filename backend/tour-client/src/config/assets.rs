//! Resolution of image names returned by the backend into absolute URLs.

use super::DEFAULT_BACKEND_ORIGIN;

use url::Url;

const DEFAULT_IMAGE_DIR: &str = "/img/";

/// Resolve an asset `name` (e.g. `tour-2-cover.jpg`) into a URL.
///
/// - empty or missing names resolve to `""`
/// - absolute `http(s)://` names are returned unchanged
/// - the origin is `asset_base`, else the origin of `api_base`, else the default backend
/// - bare names live under `/img/`, names starting with `/` are used as-is
pub fn resolve_asset_url(name: Option<&str>, asset_base: Option<&str>, api_base: Option<&str>) -> String {
    let Some(name) = name.filter(|name| !name.trim().is_empty()) else {
        return String::new();
    };

    if is_absolute_http(name) {
        return name.to_string();
    }

    let origin = asset_base
        .filter(|base| !base.is_empty())
        .map(|base| base.trim_end_matches('/').to_string())
        .or_else(|| api_base.and_then(origin_of))
        .unwrap_or_else(|| DEFAULT_BACKEND_ORIGIN.to_string());

    if name.starts_with('/') {
        format!("{origin}{name}")
    } else {
        format!("{origin}{DEFAULT_IMAGE_DIR}{name}")
    }
}

fn is_absolute_http(name: &str) -> bool {
    let lower = name.get(..8).unwrap_or(name).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// `scheme://host[:port]` of `url`, or `None` if it does not parse.
fn origin_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    Some(match parsed.port() {
        Some(port) => format!("{}://{host}:{port}", parsed.scheme()),
        None => format!("{}://{host}", parsed.scheme()),
    })
}
