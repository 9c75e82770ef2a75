//! HTTP cache control module
//!
//! Provides `ETag` generation and conditional request handling.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a quoted `ETag` string from file content, e.g. `"abc123def"`.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check whether the client's `If-None-Match` header matches the `ETag`.
///
/// Supports a single tag, a comma-separated list, and the `*` wildcard.
/// Returns true if the client copy is current (respond with 304).
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_is_quoted_and_stable() {
        let a = generate_etag(b"hello");
        let b = generate_etag(b"hello");
        assert_eq!(a, b);
        assert!(a.starts_with('"') && a.ends_with('"'));
    }

    #[test]
    fn etag_differs_for_different_content() {
        assert_ne!(generate_etag(b"hello"), generate_etag(b"world"));
    }

    #[test]
    fn match_single_tag() {
        let etag = generate_etag(b"hello");
        assert!(check_etag_match(Some(&etag), &etag));
        assert!(!check_etag_match(Some("\"other\""), &etag));
    }

    #[test]
    fn match_list_and_wildcard() {
        let etag = generate_etag(b"hello");
        let list = format!("\"other\", {etag}");
        assert!(check_etag_match(Some(&list), &etag));
        assert!(check_etag_match(Some("*"), &etag));
    }

    #[test]
    fn no_header_never_matches() {
        assert!(!check_etag_match(None, "\"abc\""));
    }
}
