//! # Hashlink Core
//!
//! Pure primitives for content-addressed hashlinks: the codec contract, the
//! codec registry, and the metadata map.
//!
//! This crate contains no I/O and no concrete digest or base-N primitives.
//! It is pure orchestration surface over registered codecs.
//!
//! ## Key Types
//!
//! - [`Codec`] - A named transform with a self-describing identifier prefix
//! - [`Registry`] - Codec lookup by algorithm id or by prefix sniffing
//! - [`Metadata`] - The optional structured map carried in a link
//!
//! ## Canonicalization
//!
//! Metadata is encoded as deterministic CBOR. See [`metadata`] module.

pub mod codec;
pub mod error;
pub mod metadata;
pub mod registry;

pub use codec::Codec;
pub use error::CoreError;
pub use metadata::Metadata;
pub use registry::Registry;
