//! The hashlink engine: encode and verify content-addressed links.
//!
//! A link is assembled as `hl:<hash-segment>[:<meta-segment>]`. The hash
//! segment is raw data folded through an ordered codec chain ending in a
//! text encoding; the metadata segment is the canonical CBOR metadata map
//! run through that final text encoding only. Verification reverses the
//! self-description: it sniffs the text codec from the hash segment, the
//! hash codec from the decoded bytes, recovers any extra transforms from
//! metadata, and re-encodes the supplied data for comparison.

use hashlink_codecs::{MultibaseBase58Btc, MultihashBlake2b64, MultihashSha2256};
use hashlink_core::{Codec, Metadata, Registry};

use crate::error::{HashlinkError, Result};
use crate::resolver::ResolverMap;

/// URI scheme of a hashlink.
pub const SCHEME: &str = "hl";

/// The default codec chain: sha2-256 multihash, base58btc multibase.
pub const DEFAULT_CODECS: [&str; 2] = ["mh-sha2-256", "mb-base58-btc"];

/// Parameters for an encode call.
pub struct EncodeParams<'a> {
    data: Option<&'a [u8]>,
    urls: Vec<String>,
    codecs: Vec<String>,
    meta: Metadata,
}

impl<'a> EncodeParams<'a> {
    /// Parameters using the given codec chain, applied left to right.
    ///
    /// The last id must name a text-encoding codec.
    pub fn new<I, S>(codecs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: None,
            urls: Vec::new(),
            codecs: codecs.into_iter().map(Into::into).collect(),
            meta: Metadata::new(),
        }
    }

    /// The raw data to address.
    pub fn data(mut self, data: &'a [u8]) -> Self {
        self.data = Some(data);
        self
    }

    /// Add a URL where the content lives. Urls are folded into the
    /// metadata map.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.urls.push(url.into());
        self
    }

    /// Set the content type metadata field.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.meta.content_type = Some(content_type.into());
        self
    }

    /// Record an extra transform codec id in metadata.
    ///
    /// Declare every canonicalization codec that runs ahead of the hash so
    /// a verifier can reconstruct the full chain from the link alone.
    pub fn transform(mut self, codec_id: impl Into<String>) -> Self {
        self.meta.transforms.push(codec_id.into());
        self
    }

    /// Replace the whole metadata map.
    pub fn meta(mut self, meta: Metadata) -> Self {
        self.meta = meta;
        self
    }
}

impl Default for EncodeParams<'_> {
    /// Parameters using [`DEFAULT_CODECS`].
    fn default() -> Self {
        Self::new(DEFAULT_CODECS)
    }
}

/// The structured contents of a decoded hashlink.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLink {
    /// Algorithm id of the hash codec, e.g. `mh-sha2-256`.
    pub hash_algorithm: String,
    /// Raw digest bytes, identifier prefix stripped.
    pub hash: Vec<u8>,
    /// Metadata fields carried by the link.
    pub meta: Metadata,
}

/// The encoder/verifier, holding the codec registry.
///
/// Register every codec before issuing encode or verify calls;
/// registration takes `&mut self`, so shared use cannot race against it.
pub struct Hashlink {
    registry: Registry,
}

impl Hashlink {
    /// An engine with no codecs registered.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// An engine with the built-in codec set registered.
    pub fn with_default_codecs() -> Self {
        let mut engine = Self::new();
        engine.register(MultihashSha2256);
        engine.register(MultihashBlake2b64);
        engine.register(MultibaseBase58Btc);
        engine
    }

    /// Register a codec. Re-registering an algorithm id replaces it.
    pub fn register(&mut self, codec: impl Codec + 'static) {
        self.registry.register(codec);
    }

    /// The codec registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Encode
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode a hashlink from raw data.
    ///
    /// The data is folded through the codec chain strictly left to right,
    /// awaiting each stage before the next starts. If the merged metadata
    /// map is non-empty it is canonically CBOR-encoded and run through only
    /// the last codec of the chain, never the full chain.
    pub async fn encode(&self, params: &EncodeParams<'_>) -> Result<String> {
        if params.data.is_none() && params.urls.is_empty() {
            return Err(HashlinkError::MissingInput);
        }
        if params.codecs.is_empty() {
            return Err(HashlinkError::EmptyCodecChain);
        }
        // Urls can stand in for data only when a resolver materializes
        // them; see `encode_with_resolvers`.
        let data = params.data.ok_or(HashlinkError::MissingInput)?;

        let mut meta = params.meta.clone();
        meta.urls.extend(params.urls.iter().cloned());

        let chain_output = self.run_chain(&params.codecs, data).await?;
        let mut link = format!("{SCHEME}:{}", into_text(chain_output)?);

        if !meta.is_empty() {
            let base_id = params
                .codecs
                .last()
                .ok_or(HashlinkError::EmptyCodecChain)?;
            let blob = meta.to_bytes()?;
            let encoded = self.registry.resolve(base_id)?.encode(&blob).await?;
            link.push(':');
            link.push_str(&into_text(encoded)?);
        }

        Ok(link)
    }

    /// Encode, materializing data through `resolvers` when only urls are
    /// supplied.
    ///
    /// The engine performs no I/O itself; fetching happens inside the
    /// caller-supplied resolver for the first url's scheme.
    pub async fn encode_with_resolvers(
        &self,
        params: &EncodeParams<'_>,
        resolvers: &ResolverMap,
    ) -> Result<String> {
        if params.data.is_some() {
            return self.encode(params).await;
        }
        let url = params.urls.first().ok_or(HashlinkError::MissingInput)?;
        let content = resolvers.resolve(url).await?;

        let resolved = EncodeParams {
            data: Some(content.as_ref()),
            urls: params.urls.clone(),
            codecs: params.codecs.clone(),
            meta: params.meta.clone(),
        };
        self.encode(&resolved).await
    }

    /// Fold `data` through the codec chain, strictly left to right.
    ///
    /// Stage N+1 does not start until stage N resolves; a failing codec
    /// aborts the fold immediately.
    async fn run_chain(&self, codec_ids: &[String], data: &[u8]) -> Result<Vec<u8>> {
        let mut output = data.to_vec();
        for id in codec_ids {
            let codec = self.registry.resolve(id)?;
            output = codec.encode(&output).await?;
        }
        Ok(output)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verify
    // ─────────────────────────────────────────────────────────────────────────

    /// Verify that `data` reproduces the content address in `link`.
    ///
    /// The codec chain is recovered from the link itself: the text codec is
    /// sniffed from the hash segment, the hash codec from the decoded hash
    /// bytes, and extra transforms from the metadata segment. The supplied
    /// data is re-encoded through that chain and the hash segments are
    /// compared; metadata content is not attested.
    ///
    /// Returns `Ok(false)` on a clean mismatch. Errors are reserved for
    /// malformed links and unresolvable codecs. Only the segment count is
    /// validated, not the scheme tag.
    pub async fn verify(&self, data: &[u8], link: &str) -> Result<bool> {
        let segments: Vec<&str> = link.split(':').collect();
        if segments.len() > 3 {
            return Err(HashlinkError::MalformedLink(format!(
                "too many segments: {link}"
            )));
        }
        let hash_segment = *segments
            .get(1)
            .ok_or_else(|| HashlinkError::MalformedLink(format!("missing hash segment: {link}")))?;

        let text_codec = self.registry.resolve_prefix(hash_segment.as_bytes())?;
        let hash_bytes = text_codec.decode(hash_segment.as_bytes())?;
        let hash_codec = self.registry.resolve_prefix(&hash_bytes)?;

        // Extra transforms recorded in metadata ran ahead of the hash when
        // the link was created.
        let mut chain: Vec<String> = Vec::new();
        if let Some(meta_segment) = segments.get(2) {
            let blob = text_codec.decode(meta_segment.as_bytes())?;
            let meta = Metadata::from_bytes(&blob)?;
            chain.extend(meta.transforms);
        }
        chain.push(hash_codec.algorithm().to_string());
        chain.push(text_codec.algorithm().to_string());
        tracing::debug!("reconstructed codec chain: {:?}", chain);

        let expected = self.encode(&EncodeParams::new(chain).data(data)).await?;
        let expected_hash = expected
            .split(':')
            .nth(1)
            .ok_or_else(|| HashlinkError::MalformedLink(expected.clone()))?;

        Ok(expected_hash == hash_segment)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Decode
    // ─────────────────────────────────────────────────────────────────────────

    /// Decode a hashlink into its hash algorithm, digest bytes, and
    /// metadata, without the original data.
    ///
    /// Contract only; not yet implemented.
    pub fn decode(&self, _link: &str) -> Result<DecodedLink> {
        Err(HashlinkError::NotImplemented)
    }
}

impl Default for Hashlink {
    fn default() -> Self {
        Self::new()
    }
}

fn into_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| HashlinkError::NonTextChainOutput)
}
