//! The codec contract: a named transform with a self-describing identifier.
//!
//! Codecs are the pluggable stages of the encoding pipeline. Each codec
//! carries a unique algorithm id and an identifier byte sequence; hash and
//! text-encoding codecs prepend the identifier to their output, which is
//! what lets a verifier recover the codec chain from a link's bytes alone.

use async_trait::async_trait;

use crate::error::CoreError;

/// A registered transform in the encoding pipeline.
///
/// Implementations must be thread-safe (`Send + Sync`) so a shared registry
/// can serve concurrent encode and verify calls.
#[async_trait]
pub trait Codec: Send + Sync {
    /// Unique algorithm id, e.g. `mh-sha2-256`.
    fn algorithm(&self) -> &str;

    /// Identifier bytes matched against the head of a buffer when sniffing.
    fn identifier(&self) -> &[u8];

    /// Transform `input`.
    ///
    /// A stage may be backed by an asynchronously completing primitive; the
    /// pipeline awaits each stage before starting the next.
    async fn encode(&self, input: &[u8]) -> Result<Vec<u8>, CoreError>;

    /// Reverse [`encode`](Codec::encode). Optional; the default fails.
    ///
    /// Only codecs that must be reversed during verification (text
    /// encodings) need to implement this.
    fn decode(&self, _input: &[u8]) -> Result<Vec<u8>, CoreError> {
        Err(CoreError::CodecFailure {
            algorithm: self.algorithm().to_string(),
            reason: "decoding is not supported".to_string(),
        })
    }
}
