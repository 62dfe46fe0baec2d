//! Search URL construction from free-text queries.

/// Turns a free-text query into a listing URL path segment: trimmed,
/// lowercased, every internal space replaced with a hyphen.
///
/// No further sanitization is applied. A blank query yields an empty slug
/// and therefore a malformed search URL; callers own that input.
pub fn slugify(query: &str) -> String {
    query.trim().to_lowercase().replace(' ', "-")
}

/// Joins a slug onto the listing base URL.
pub fn search_url(base_url: &str, slug: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), slug)
}
