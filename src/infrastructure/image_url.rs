// Image URL resolution for catalog references

/// Resolve a catalog image reference for display. Absolute URLs and
/// local blob references pass through unchanged; relative references
/// resolve under the API's `/api/` prefix.
pub fn resolve_image_url(api_base: &str, url: &str) -> String {
    if url.starts_with("http") || url.starts_with("blob:") {
        return url.to_string();
    }
    let path = url.strip_prefix('/').unwrap_or(url);
    format!("{}/api/{}", api_base.trim_end_matches('/'), path)
}
