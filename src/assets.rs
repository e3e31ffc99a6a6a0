//! Asset URL resolution.
//!
//! Uploaded assets (CV documents, thumbnails, certificates) are referenced
//! by relative path and resolved against the API base URL.

/// Resolve an asset path against the API base URL. Absolute URLs pass
/// through unchanged.
pub fn resolve_asset_url(api_base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    format!(
        "{}/{}",
        api_base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
