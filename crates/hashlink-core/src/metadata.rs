//! Hashlink metadata: the optional structured map carried in a link's
//! second segment.
//!
//! Metadata is a CBOR map with reserved integer keys. Encoding follows
//! RFC 8949 Core Deterministic Encoding:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//!
//! Deterministic bytes matter because the metadata segment is part of the
//! link text: two encoders given the same fields must emit identical links.

use ciborium::value::Value;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Metadata field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const TRANSFORM: u64 = 0x0c;
    pub const EXPERIMENTAL: u64 = 0x0d;
    pub const CONTENT_TYPE: u64 = 0x0e;
    pub const URL: u64 = 0x0f;
}

/// The recognized metadata fields of a hashlink.
///
/// Unrecognized keys in a decoded map are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// URLs where the content may be retrieved.
    pub urls: Vec<String>,

    /// MIME content type of the data.
    pub content_type: Option<String>,

    /// Experimental, application-defined value.
    pub experimental: Option<Value>,

    /// Extra codec ids applied to the data ahead of hashing, in order.
    ///
    /// Recording these lets a verifier reconstruct the full chain from the
    /// link alone.
    pub transforms: Vec<String>,
}

impl Metadata {
    /// Metadata with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is set. Empty metadata is never encoded into a
    /// link.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
            && self.content_type.is_none()
            && self.experimental.is_none()
            && self.transforms.is_empty()
    }

    /// Encode to canonical CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CoreError> {
        let mut buf = Vec::new();
        encode_value_to(&mut buf, &self.to_cbor_value())?;
        Ok(buf)
    }

    /// Decode from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        let cursor = std::io::Cursor::new(bytes);
        let value: Value =
            ciborium::from_reader(cursor).map_err(|e| CoreError::MalformedMetadata(e.to_string()))?;

        let entries = match value {
            Value::Map(entries) => entries,
            _ => return Err(CoreError::MalformedMetadata("expected a map".into())),
        };

        let mut meta = Metadata::new();
        for (key, value) in entries {
            let key: i128 = match key {
                Value::Integer(i) => i.into(),
                _ => return Err(CoreError::MalformedMetadata("expected integer key".into())),
            };
            if key == keys::URL as i128 {
                meta.urls = text_array(value, "url")?;
            } else if key == keys::CONTENT_TYPE as i128 {
                meta.content_type = match value {
                    Value::Text(s) => Some(s),
                    _ => {
                        return Err(CoreError::MalformedMetadata(
                            "content type must be text".into(),
                        ))
                    }
                };
            } else if key == keys::EXPERIMENTAL as i128 {
                meta.experimental = Some(value);
            } else if key == keys::TRANSFORM as i128 {
                meta.transforms = text_array(value, "transform")?;
            }
        }
        Ok(meta)
    }

    /// Convert to a CBOR Value (map with integer keys).
    ///
    /// Entry order here is irrelevant; the canonical encoder sorts keys.
    fn to_cbor_value(&self) -> Value {
        let mut entries = Vec::with_capacity(4);

        if !self.urls.is_empty() {
            let urls: Vec<Value> = self.urls.iter().map(|u| Value::Text(u.clone())).collect();
            entries.push((Value::Integer(keys::URL.into()), Value::Array(urls)));
        }

        if let Some(content_type) = &self.content_type {
            entries.push((
                Value::Integer(keys::CONTENT_TYPE.into()),
                Value::Text(content_type.clone()),
            ));
        }

        if let Some(experimental) = &self.experimental {
            entries.push((Value::Integer(keys::EXPERIMENTAL.into()), experimental.clone()));
        }

        if !self.transforms.is_empty() {
            let ids: Vec<Value> = self
                .transforms
                .iter()
                .map(|t| Value::Text(t.clone()))
                .collect();
            entries.push((Value::Integer(keys::TRANSFORM.into()), Value::Array(ids)));
        }

        Value::Map(entries)
    }
}

fn text_array(value: Value, field: &str) -> Result<Vec<String>, CoreError> {
    let items = match value {
        Value::Array(items) => items,
        _ => {
            return Err(CoreError::MalformedMetadata(format!(
                "{field} must be an array"
            )))
        }
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Text(s) => Ok(s),
            _ => Err(CoreError::MalformedMetadata(format!(
                "{field} entries must be text"
            ))),
        })
        .collect()
}

/// Recursively encode a CBOR value.
///
/// The experimental field admits caller-supplied values, so unsupported
/// types surface as errors rather than panics.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) -> Result<(), CoreError> {
    match value {
        Value::Integer(i) => {
            let n: i128 = (*i).into();
            if n >= 0 {
                encode_uint(buf, 0, n as u64);
            } else {
                // CBOR encodes -1 as 0, -2 as 1, etc.
                encode_uint(buf, 1, (-1 - n) as u64);
            }
        }
        Value::Bytes(b) => {
            encode_uint(buf, 2, b.len() as u64);
            buf.extend_from_slice(b);
        }
        Value::Text(s) => {
            encode_uint(buf, 3, s.len() as u64);
            buf.extend_from_slice(s.as_bytes());
        }
        Value::Array(arr) => {
            encode_uint(buf, 4, arr.len() as u64);
            for item in arr {
                encode_value_to(buf, item)?;
            }
        }
        Value::Map(entries) => {
            encode_map_canonical(buf, entries)?;
        }
        Value::Bool(b) => {
            buf.push(if *b { 0xf5 } else { 0xf4 });
        }
        Value::Null => {
            buf.push(0xf6);
        }
        Value::Float(_) => {
            return Err(CoreError::InvalidMetadataValue(
                "floats have no canonical encoding".into(),
            ));
        }
        _ => {
            return Err(CoreError::InvalidMetadataValue(
                "unsupported CBOR value type".into(),
            ));
        }
    }
    Ok(())
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a map canonically (major type 5).
///
/// Keys are sorted by their encoded byte comparison.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) -> Result<(), CoreError> {
    let mut pairs: Vec<(Vec<u8>, &Value)> = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let mut key_buf = Vec::new();
        encode_value_to(&mut key_buf, key)?;
        pairs.push((key_buf, value));
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    encode_uint(buf, 5, pairs.len() as u64);
    for (key_bytes, value) in pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value)?;
    }
    Ok(())
}
