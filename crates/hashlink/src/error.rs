//! Error types for the hashlink engine.

use hashlink_core::CoreError;
use thiserror::Error;

use crate::resolver::ResolveError;

/// Errors that can occur while encoding or verifying hashlinks.
#[derive(Debug, Error)]
pub enum HashlinkError {
    /// Codec resolution, codec execution, or metadata failure.
    #[error("codec error: {0}")]
    Core(#[from] CoreError),

    /// URL resolution failure.
    #[error("resolver error: {0}")]
    Resolve(#[from] ResolveError),

    /// Neither data nor urls were supplied, or data is required and absent.
    #[error("either data or urls must be provided")]
    MissingInput,

    /// The codec chain was empty.
    #[error("at least one codec must be specified")]
    EmptyCodecChain,

    /// The final codec of the chain did not produce text output.
    #[error("codec chain must end in a text-encoding codec")]
    NonTextChainOutput,

    /// The link does not have the `scheme:hash[:meta]` shape.
    #[error("malformed hashlink: {0}")]
    MalformedLink(String),

    /// Decoding a hashlink without its original data.
    #[error("decoding a hashlink without data is not implemented")]
    NotImplemented,
}

/// Result type for hashlink operations.
pub type Result<T> = std::result::Result<T, HashlinkError>;
