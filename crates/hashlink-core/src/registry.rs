//! Codec registry: registration by algorithm id, resolution by id or by
//! identifier prefix.

use std::fmt;
use std::sync::Arc;

use crate::codec::Codec;
use crate::error::CoreError;

/// Holds the codecs available to an encode/verify pipeline.
///
/// A registry is populated once at setup time and only read afterwards.
/// Registration takes `&mut self`, so shared use cannot race against it.
#[derive(Default)]
pub struct Registry {
    codecs: Vec<Arc<dyn Codec>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self { codecs: Vec::new() }
    }

    /// Register a codec under its algorithm id.
    ///
    /// Re-registering an id replaces the previous codec silently.
    pub fn register(&mut self, codec: impl Codec + 'static) {
        let codec: Arc<dyn Codec> = Arc::new(codec);
        let existing = self
            .codecs
            .iter()
            .position(|c| c.algorithm() == codec.algorithm());
        match existing {
            Some(pos) => self.codecs[pos] = codec,
            None => self.codecs.push(codec),
        }
    }

    /// Resolve a codec by exact algorithm id.
    pub fn resolve(&self, algorithm: &str) -> Result<&Arc<dyn Codec>, CoreError> {
        self.codecs
            .iter()
            .find(|c| c.algorithm() == algorithm)
            .ok_or_else(|| CoreError::UnknownCodec(algorithm.to_string()))
    }

    /// Resolve a codec by matching identifier prefixes against `bytes`.
    ///
    /// Identifiers vary in length, so the longest identifier that prefixes
    /// `bytes` wins; ties go to the earliest registration. Matching in
    /// registration order alone would let a short identifier shadow a
    /// longer, more specific one.
    pub fn resolve_prefix(&self, bytes: &[u8]) -> Result<&Arc<dyn Codec>, CoreError> {
        let mut best: Option<&Arc<dyn Codec>> = None;
        for codec in &self.codecs {
            let identifier = codec.identifier();
            if bytes.len() < identifier.len() || &bytes[..identifier.len()] != identifier {
                continue;
            }
            let better = match best {
                Some(current) => identifier.len() > current.identifier().len(),
                None => true,
            };
            if better {
                best = Some(codec);
            }
        }
        best.ok_or_else(|| {
            let head = &bytes[..bytes.len().min(4)];
            CoreError::UnknownPrefix(hex::encode(head))
        })
    }

    /// Registered algorithm ids, in registration order.
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.codecs.iter().map(|c| c.algorithm())
    }

    /// Number of registered codecs.
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// True when no codec is registered.
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.algorithms()).finish()
    }
}
