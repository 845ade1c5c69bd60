use super::*;

// =============================================================
// validate_pattern
// =============================================================

#[test]
fn validate_accepts_root_and_static_paths() {
    assert_eq!(validate_pattern("/"), Ok(()));
    assert_eq!(validate_pattern("/items"), Ok(()));
    assert_eq!(validate_pattern("/admin/users/"), Ok(()));
}

#[test]
fn validate_rejects_empty_path() {
    assert_eq!(validate_pattern(""), Err(RouteError::EmptyPath));
}

#[test]
fn validate_rejects_relative_path() {
    assert_eq!(validate_pattern("items"), Err(RouteError::MissingLeadingSlash("items".to_owned())));
}

#[test]
fn validate_rejects_whitespace_and_query_characters() {
    assert_eq!(
        validate_pattern("/my items"),
        Err(RouteError::InvalidCharacter { path: "/my items".to_owned(), ch: ' ' })
    );
    assert_eq!(
        validate_pattern("/items?all"),
        Err(RouteError::InvalidCharacter { path: "/items?all".to_owned(), ch: '?' })
    );
    assert_eq!(
        validate_pattern("/items#top"),
        Err(RouteError::InvalidCharacter { path: "/items#top".to_owned(), ch: '#' })
    );
}

#[test]
fn validate_rejects_empty_interior_segment() {
    assert_eq!(validate_pattern("/a//b"), Err(RouteError::EmptySegment("/a//b".to_owned())));
    assert_eq!(validate_pattern("//"), Err(RouteError::EmptySegment("//".to_owned())));
}

#[test]
fn validate_rejects_dynamic_segments() {
    assert_eq!(validate_pattern("/items/:id"), Err(RouteError::DynamicSegment("/items/:id".to_owned())));
    assert_eq!(validate_pattern("/files/*rest"), Err(RouteError::DynamicSegment("/files/*rest".to_owned())));
}

// =============================================================
// match_key
// =============================================================

#[test]
fn strip_query_removes_query_and_fragment() {
    assert_eq!(strip_query("/items?page=2"), "/items");
    assert_eq!(strip_query("/items#top"), "/items");
    assert_eq!(strip_query("/items"), "/items");
}

#[test]
fn match_key_ignores_trailing_slash_and_case() {
    assert_eq!(match_key("/Items/"), "/items");
    assert_eq!(match_key("/REQUESTS?x=1#y"), "/requests");
}

#[test]
fn match_key_keeps_root() {
    assert_eq!(match_key("/"), "/");
    assert_eq!(match_key(""), "/");
    assert_eq!(match_key("/?next=items"), "/");
}
