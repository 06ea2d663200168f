//! Post identifiers and slugs
//!
//! IDs take the form `pm-<hex>` where the hex digits are the leading bytes
//! of a SHA-256 hash of the post slug. Deriving the id from the slug keeps
//! it stable across re-ingestion of the same document, which the engine
//! relies on for counter mutations addressed by id.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Post ID with the `pm-` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(String);

impl PostId {
    /// The standard ID prefix
    pub const PREFIX: &'static str = "pm-";

    /// Hash length in hex characters
    pub const HASH_LEN: usize = 12;

    /// Derive the stable id for a slug
    pub fn from_slug(slug: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(slug.as_bytes());
        let hash = hasher.finalize();
        let full_hex = hex::encode(hash);

        PostId(format!("{}{}", Self::PREFIX, &full_hex[..Self::HASH_LEN]))
    }

    /// Get the ID string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the suffix (part after `pm-`)
    pub fn suffix(&self) -> &str {
        &self.0[Self::PREFIX.len()..]
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PostId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generate a URL-safe slug from a title
///
/// Lowercases, replaces non-alphanumeric runs with hyphens, and trims
/// leading/trailing hyphens.
pub fn slugify(title: &str) -> String {
    slug::slugify(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slug_is_deterministic() {
        let a = PostId::from_slug("angular-signals-deep-dive");
        let b = PostId::from_slug("angular-signals-deep-dive");
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_slug_shape() {
        let id = PostId::from_slug("hello-world");
        assert!(id.as_str().starts_with("pm-"));
        assert_eq!(id.suffix().len(), PostId::HASH_LEN);
        assert!(id.suffix().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_slugs_distinct_ids() {
        assert_ne!(PostId::from_slug("one"), PostId::from_slug("two"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Angular Signals: A Deep Dive"), "angular-signals-a-deep-dive");
        assert_eq!(slugify("Test!@#$%"), "test");
    }
}
