//! # Hashlink Codecs
//!
//! The built-in codec set for hashlinks: multihash cryptographic hash
//! codecs and the base58btc multibase text encoding.
//!
//! Concrete digest and base-N primitives come from the `sha2`, `blake2`,
//! and `bs58` crates; this crate only adapts them to the
//! [`Codec`](hashlink_core::Codec) contract.

pub mod multibase;
pub mod multihash;

pub use multibase::MultibaseBase58Btc;
pub use multihash::{MultihashBlake2b64, MultihashSha2256};
