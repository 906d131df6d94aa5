//! Entity-tag generation module
//!
//! Helper for implementing [`EtagProvider`](crate::resource::EtagProvider)
//! over in-memory or file content.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate an entity tag from content using fast hashing
///
/// Deterministic for identical content; the result is quoted, e.g.
/// `"abc123def"`, ready to be sent in an `ETag` header and compared
/// opaquely by the precondition predicates.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_etag_is_quoted() {
        let etag = generate_etag(b"hello world");
        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert!(etag.len() > 2);
    }

    #[test]
    fn test_etag_consistency() {
        assert_eq!(generate_etag(b"same content"), generate_etag(b"same content"));
    }

    #[test]
    fn test_etag_difference() {
        assert_ne!(generate_etag(b"content a"), generate_etag(b"content b"));
    }
}
