//! URL resolution: the external collaborator that materializes bytes.
//!
//! The engine never performs network I/O. A caller holding only URLs
//! supplies a [`ResolverMap`] whose entries each know how to fetch one URL
//! scheme; the engine hands a URL to the matching resolver and encodes the
//! bytes it gets back.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors from URL resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no resolver registered for scheme: {0}")]
    UnsupportedScheme(String),

    #[error("malformed url: {0}")]
    MalformedUrl(String),

    #[error("failed to resolve {url}: {reason}")]
    Fetch { url: String, reason: String },
}

/// Resolves URLs of a single scheme to their content bytes.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// The URL scheme this resolver handles, e.g. `https`.
    fn scheme(&self) -> &str;

    /// Fetch the content behind `url`.
    async fn resolve(&self, url: &str) -> Result<Bytes, ResolveError>;
}

/// Dispatches URLs to resolvers by scheme.
#[derive(Default)]
pub struct ResolverMap {
    by_scheme: HashMap<String, Arc<dyn Resolver>>,
}

impl ResolverMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver under its scheme. Last registration wins.
    pub fn register(&mut self, resolver: impl Resolver + 'static) {
        self.by_scheme
            .insert(resolver.scheme().to_string(), Arc::new(resolver));
    }

    /// Resolve `url` through the resolver registered for its scheme.
    pub async fn resolve(&self, url: &str) -> Result<Bytes, ResolveError> {
        let scheme = url
            .split_once(':')
            .map(|(scheme, _)| scheme)
            .ok_or_else(|| ResolveError::MalformedUrl(url.to_string()))?;
        let resolver = self
            .by_scheme
            .get(scheme)
            .ok_or_else(|| ResolveError::UnsupportedScheme(scheme.to_string()))?;
        resolver.resolve(url).await
    }
}

/// An in-memory resolver: a fixed url-to-bytes table.
///
/// Stands in for network-backed resolvers in tests.
pub struct MemoryResolver {
    scheme: String,
    contents: HashMap<String, Bytes>,
}

impl MemoryResolver {
    /// A resolver for `scheme` with an empty table.
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            contents: HashMap::new(),
        }
    }

    /// Insert content served for `url`.
    pub fn insert(&mut self, url: impl Into<String>, content: impl Into<Bytes>) {
        self.contents.insert(url.into(), content.into());
    }
}

#[async_trait]
impl Resolver for MemoryResolver {
    fn scheme(&self) -> &str {
        &self.scheme
    }

    async fn resolve(&self, url: &str) -> Result<Bytes, ResolveError> {
        self.contents
            .get(url)
            .cloned()
            .ok_or_else(|| ResolveError::Fetch {
                url: url.to_string(),
                reason: "not found".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_map() -> ResolverMap {
        let mut resolver = MemoryResolver::new("mem");
        resolver.insert("mem:greeting", &b"Hello World!\n"[..]);

        let mut map = ResolverMap::new();
        map.register(resolver);
        map
    }

    #[tokio::test]
    async fn test_resolve_dispatches_by_scheme() {
        let map = example_map();
        let content = map.resolve("mem:greeting").await.unwrap();
        assert_eq!(&content[..], b"Hello World!\n");
    }

    #[tokio::test]
    async fn test_resolve_unknown_scheme() {
        let map = example_map();
        let err = map.resolve("https://example.com/hw.txt").await.unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedScheme(s) if s == "https"));
    }

    #[tokio::test]
    async fn test_resolve_malformed_url() {
        let map = example_map();
        let err = map.resolve("no-scheme-here").await.unwrap_err();
        assert!(matches!(err, ResolveError::MalformedUrl(_)));
    }

    #[tokio::test]
    async fn test_resolve_missing_content() {
        let map = example_map();
        let err = map.resolve("mem:absent").await.unwrap_err();
        assert!(matches!(err, ResolveError::Fetch { .. }));
    }
}
