//! Cache key generation.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh64::Xxh64;

/// Namespace prepended to every request fingerprint.
pub const DEFAULT_KEY_NAMESPACE: &str = "opensea-req";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub hash: String,
}

impl CacheKey {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Derives request fingerprints.
///
/// The key is `"<namespace>:<xxh64>"` where the hash covers, in order, the
/// HTTP method, the fully-qualified URL, the encoded query string, the raw
/// body bytes and, when present, a scope string. Seed is fixed at zero so
/// keys stay stable across processes and can be shared through a persistent
/// backend.
#[derive(Debug, Clone)]
pub struct CacheKeyGenerator {
    namespace: String,
}

impl CacheKeyGenerator {
    pub fn new() -> Self {
        Self {
            namespace: DEFAULT_KEY_NAMESPACE.to_string(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn generate(
        &self,
        method: &str,
        url: &str,
        encoded_query: &str,
        body: &[u8],
        scope: Option<&str>,
    ) -> CacheKey {
        let mut hasher = Xxh64::new(0);
        hasher.update(method.as_bytes());
        hasher.update(url.as_bytes());
        hasher.update(encoded_query.as_bytes());
        hasher.update(body);
        if let Some(scope) = scope {
            hasher.update(scope.as_bytes());
        }
        CacheKey::new(format!("{}:{}", self.namespace, hasher.digest()))
    }
}

impl Default for CacheKeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.opensea.io/api/v1/asset/0xabc/1";

    #[test]
    fn test_deterministic() {
        let gen = CacheKeyGenerator::new();
        let a = gen.generate("GET", URL, "", b"", None);
        let b = gen.generate("GET", URL, "", b"", None);
        assert_eq!(a, b);
        assert!(a.as_str().starts_with("opensea-req:"));
    }

    #[test]
    fn test_matches_one_shot_xxh64() {
        let key = CacheKeyGenerator::new().generate("GET", URL, "a=1", b"{}", None);
        let mut input = Vec::new();
        input.extend_from_slice(b"GET");
        input.extend_from_slice(URL.as_bytes());
        input.extend_from_slice(b"a=1{}");
        let expected = xxhash_rust::xxh64::xxh64(&input, 0);
        assert_eq!(key.as_str(), format!("opensea-req:{}", expected));
    }

    #[test]
    fn test_components_change_key() {
        let gen = CacheKeyGenerator::new();
        let base = gen.generate("GET", URL, "", b"", None);
        assert_ne!(base, gen.generate("POST", URL, "", b"", None));
        assert_ne!(
            base,
            gen.generate("GET", "https://api.opensea.io/api/v1/asset/0xabc/2", "", b"", None)
        );
        assert_ne!(base, gen.generate("GET", URL, "limit=1", b"", None));
        assert_ne!(base, gen.generate("GET", URL, "", b"{\"a\":1}", None));
        assert_ne!(base, gen.generate("GET", URL, "", b"", Some("chain:137")));
    }

    #[test]
    fn test_namespace() {
        let key = CacheKeyGenerator::new()
            .with_namespace("staging")
            .generate("GET", URL, "", b"", None);
        assert!(key.as_str().starts_with("staging:"));
    }
}
