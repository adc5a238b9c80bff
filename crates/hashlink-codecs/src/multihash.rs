//! Multihash codecs: self-describing cryptographic hash transforms.
//!
//! Output layout: `<algorithm-prefix-bytes><digest-bytes>`. The prefix
//! identifies the hash algorithm and digest length, so a verifier can
//! recover the algorithm from the bytes alone.

use async_trait::async_trait;
use blake2::digest::consts::U8;
use blake2::Blake2b;
use sha2::{Digest, Sha256};

use hashlink_core::{Codec, CoreError};

/// Blake2b with an 8-byte digest.
type Blake2b64 = Blake2b<U8>;

/// SHA-2 256-bit multihash codec (`mh-sha2-256`).
#[derive(Debug, Default, Clone, Copy)]
pub struct MultihashSha2256;

#[async_trait]
impl Codec for MultihashSha2256 {
    fn algorithm(&self) -> &str {
        "mh-sha2-256"
    }

    /// `0x12` = sha2-256, `0x20` = 32-byte digest length.
    fn identifier(&self) -> &[u8] {
        &[0x12, 0x20]
    }

    async fn encode(&self, input: &[u8]) -> Result<Vec<u8>, CoreError> {
        let digest = Sha256::digest(input);
        let mut out = Vec::with_capacity(self.identifier().len() + digest.len());
        out.extend_from_slice(self.identifier());
        out.extend_from_slice(&digest);
        Ok(out)
    }
}

/// Blake2b 64-bit multihash codec (`mh-blake2b-64`).
#[derive(Debug, Default, Clone, Copy)]
pub struct MultihashBlake2b64;

#[async_trait]
impl Codec for MultihashBlake2b64 {
    fn algorithm(&self) -> &str {
        "mh-blake2b-64"
    }

    /// `0xb2 0x08` = blake2b-64 hash code, trailing `0x08` = 8-byte digest
    /// length.
    fn identifier(&self) -> &[u8] {
        &[0xb2, 0x08, 0x08]
    }

    async fn encode(&self, input: &[u8]) -> Result<Vec<u8>, CoreError> {
        let digest = Blake2b64::digest(input);
        let mut out = Vec::with_capacity(self.identifier().len() + digest.len());
        out.extend_from_slice(self.identifier());
        out.extend_from_slice(&digest);
        Ok(out)
    }
}
