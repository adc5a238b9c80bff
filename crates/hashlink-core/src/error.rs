//! Error types for the hashlink core.

use thiserror::Error;

/// Errors from codec resolution, codec execution, and metadata handling.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown codec: {0}")]
    UnknownCodec(String),

    #[error("no registered codec matches prefix 0x{0}")]
    UnknownPrefix(String),

    #[error("codec {algorithm} failed: {reason}")]
    CodecFailure { algorithm: String, reason: String },

    #[error("malformed metadata: {0}")]
    MalformedMetadata(String),

    #[error("unencodable metadata value: {0}")]
    InvalidMetadataValue(String),
}
