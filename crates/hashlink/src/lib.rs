//! # Hashlink
//!
//! Content-addressed hashlinks: encode raw bytes into a compact,
//! self-describing identifier string, and verify a link against data by
//! reconstructing the codec chain from the link's own bytes.
//!
//! A hashlink has the shape `hl:<hash-segment>[:<meta-segment>]`. The hash
//! segment is the data folded through an ordered codec chain (optional
//! canonicalization, a multihash-style cryptographic hash, a
//! multibase-style text encoding). The metadata segment is an optional
//! canonical CBOR map carrying urls, a content type, an experimental
//! value, and extra transform ids.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hashlink::{EncodeParams, Hashlink};
//!
//! async fn example() {
//!     let engine = Hashlink::with_default_codecs();
//!
//!     let link = engine
//!         .encode(
//!             &EncodeParams::default()
//!                 .data(b"Hello World!\n")
//!                 .url("https://example.com/hw.txt")
//!                 .content_type("text/plain"),
//!         )
//!         .await
//!         .unwrap();
//!
//!     assert!(engine.verify(b"Hello World!\n", &link).await.unwrap());
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `hashlink::core` - codec contract, registry, metadata
//! - `hashlink::codecs` - the built-in multihash/multibase codec set

pub mod engine;
pub mod error;
pub mod resolver;

// Re-export component crates
pub use hashlink_codecs as codecs;
pub use hashlink_core as core;

// Re-export main types for convenience
pub use engine::{DecodedLink, EncodeParams, Hashlink, DEFAULT_CODECS, SCHEME};
pub use error::{HashlinkError, Result};
pub use resolver::{MemoryResolver, ResolveError, Resolver, ResolverMap};

// Re-export commonly used core types
pub use hashlink_core::{Codec, CoreError, Metadata, Registry};

/// Encode a hashlink with the built-in codec set.
///
/// Builds a default-codec engine per call; hold a [`Hashlink`] to register
/// custom codecs or amortize setup.
pub async fn encode(params: &EncodeParams<'_>) -> Result<String> {
    Hashlink::with_default_codecs().encode(params).await
}

/// Verify a hashlink with the built-in codec set.
pub async fn verify(data: &[u8], link: &str) -> Result<bool> {
    Hashlink::with_default_codecs().verify(data, link).await
}

/// Decode a hashlink without its data. Unimplemented; see
/// [`Hashlink::decode`].
pub fn decode(link: &str) -> Result<DecodedLink> {
    Hashlink::with_default_codecs().decode(link)
}
