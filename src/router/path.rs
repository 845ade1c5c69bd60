//! Route pattern validation and request path matching keys.
//!
//! Matching ignores the query string, the fragment, a single trailing slash,
//! and ASCII case, so `/Items/?page=2#top` resolves to the `/items` route.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use super::error::RouteError;

/// Check that `pattern` is a static, absolute route path.
///
/// # Errors
///
/// Returns the first problem found with the pattern.
pub fn validate_pattern(pattern: &str) -> Result<(), RouteError> {
    if pattern.is_empty() {
        return Err(RouteError::EmptyPath);
    }
    if !pattern.starts_with('/') {
        return Err(RouteError::MissingLeadingSlash(pattern.to_owned()));
    }
    if let Some(ch) = pattern
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '?' | '#'))
    {
        return Err(RouteError::InvalidCharacter { path: pattern.to_owned(), ch });
    }

    let trimmed = pattern.strip_suffix('/').unwrap_or(pattern);
    for segment in trimmed.split('/').skip(1) {
        if segment.is_empty() {
            return Err(RouteError::EmptySegment(pattern.to_owned()));
        }
        if segment.starts_with(':') || segment.contains('*') {
            return Err(RouteError::DynamicSegment(pattern.to_owned()));
        }
    }
    Ok(())
}

/// Strip the query string and fragment from a request path.
pub fn strip_query(raw: &str) -> &str {
    raw.find(['?', '#']).map_or(raw, |idx| &raw[..idx])
}

/// Lookup key shared by registered patterns and incoming request paths.
pub fn match_key(raw: &str) -> String {
    let path = strip_query(raw);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        return "/".to_owned();
    }
    path.to_ascii_lowercase()
}
