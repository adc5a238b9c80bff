//! Multibase codecs: self-describing text encodings.
//!
//! Output layout: `<single marker byte><encoded characters>`. The marker
//! byte doubles as the identifier matched during sniffing, so the whole
//! output is text.

use async_trait::async_trait;

use hashlink_core::{Codec, CoreError};

/// Multibase marker for base58btc.
const BASE58_BTC_MARKER: u8 = b'z';

/// Base58btc multibase codec (`mb-base58-btc`).
///
/// The only built-in codec that implements `decode`: verification must
/// reverse the text encoding to reach the hash bytes underneath.
#[derive(Debug, Default, Clone, Copy)]
pub struct MultibaseBase58Btc;

impl MultibaseBase58Btc {
    fn failure(&self, reason: impl Into<String>) -> CoreError {
        CoreError::CodecFailure {
            algorithm: self.algorithm().to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Codec for MultibaseBase58Btc {
    fn algorithm(&self) -> &str {
        "mb-base58-btc"
    }

    fn identifier(&self) -> &[u8] {
        &[BASE58_BTC_MARKER]
    }

    async fn encode(&self, input: &[u8]) -> Result<Vec<u8>, CoreError> {
        let encoded = bs58::encode(input).into_string();
        let mut out = Vec::with_capacity(1 + encoded.len());
        out.push(BASE58_BTC_MARKER);
        out.extend_from_slice(encoded.as_bytes());
        Ok(out)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>, CoreError> {
        match input.first() {
            Some(&BASE58_BTC_MARKER) => {}
            _ => return Err(self.failure("missing base58btc marker")),
        }
        let text = std::str::from_utf8(&input[1..])
            .map_err(|e| self.failure(format!("input is not utf-8: {e}")))?;
        bs58::decode(text)
            .into_vec()
            .map_err(|e| self.failure(e.to_string()))
    }
}
