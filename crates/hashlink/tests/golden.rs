//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of the hashlink wire format must produce identical
//! links for these inputs: same digests, same multihash prefixes, same
//! base58btc text, same canonical CBOR metadata bytes.

use hashlink::codecs::{MultihashBlake2b64, MultihashSha2256};
use hashlink::{Codec, EncodeParams, Hashlink, HashlinkError, Metadata};

const TEST_DATA: &[u8] = b"Hello World!\n";
const EXAMPLE_URL: &str = "https://example.com/hw.txt";

const SHA2_LINK: &str = "hl:zQmNbCYUrvaVfy6w9b5W3SVTP2newPK5FoeY37QurUEUydH";
const BLAKE2B_LINK: &str = "hl:zm9YZpCjPLPJ4Epc";

const URL_META_SEGMENT: &str = "z3TSgXTuaHxY2tsArhUreJ4ixgw9NW7DYuQ9QTPQyLHy";
const URL_CONTENT_TYPE_META_SEGMENT: &str =
    "zCwPSdabLuj3jue1qYujzunnKwpL4myKdyeqySyFhnzZ8qdfW3bb6W8dVdRu";
const TRANSFORM_META_SEGMENT: &str = "zER21ZLCmb3bkKNtm8g";

#[tokio::test]
async fn test_sha2_256_link() {
    let engine = Hashlink::with_default_codecs();
    let link = engine
        .encode(&EncodeParams::default().data(TEST_DATA))
        .await
        .unwrap();
    assert_eq!(link, SHA2_LINK);
}

#[tokio::test]
async fn test_sha2_256_link_with_url() {
    let engine = Hashlink::with_default_codecs();
    let link = engine
        .encode(&EncodeParams::default().data(TEST_DATA).url(EXAMPLE_URL))
        .await
        .unwrap();
    assert_eq!(link, format!("{SHA2_LINK}:{URL_META_SEGMENT}"));
}

#[tokio::test]
async fn test_sha2_256_link_with_url_and_content_type() {
    let engine = Hashlink::with_default_codecs();
    let link = engine
        .encode(
            &EncodeParams::default()
                .data(TEST_DATA)
                .url(EXAMPLE_URL)
                .content_type("text/plain"),
        )
        .await
        .unwrap();
    assert_eq!(link, format!("{SHA2_LINK}:{URL_CONTENT_TYPE_META_SEGMENT}"));
}

#[tokio::test]
async fn test_urls_via_metadata_map_match_builder() {
    let engine = Hashlink::with_default_codecs();
    let meta = Metadata {
        urls: vec![EXAMPLE_URL.to_string()],
        ..Default::default()
    };
    let via_meta = engine
        .encode(&EncodeParams::default().data(TEST_DATA).meta(meta))
        .await
        .unwrap();
    let via_builder = engine
        .encode(&EncodeParams::default().data(TEST_DATA).url(EXAMPLE_URL))
        .await
        .unwrap();
    assert_eq!(via_meta, via_builder);
}

#[tokio::test]
async fn test_blake2b_64_link() {
    let engine = Hashlink::with_default_codecs();
    let link = engine
        .encode(&EncodeParams::new(["mh-blake2b-64", "mb-base58-btc"]).data(TEST_DATA))
        .await
        .unwrap();
    assert_eq!(link, BLAKE2B_LINK);
}

#[tokio::test]
async fn test_blake2b_64_link_with_url() {
    let engine = Hashlink::with_default_codecs();
    let link = engine
        .encode(
            &EncodeParams::new(["mh-blake2b-64", "mb-base58-btc"])
                .data(TEST_DATA)
                .url(EXAMPLE_URL),
        )
        .await
        .unwrap();
    assert_eq!(link, format!("{BLAKE2B_LINK}:{URL_META_SEGMENT}"));
}

#[tokio::test]
async fn test_transform_metadata_segment() {
    let engine = Hashlink::with_default_codecs();
    let link = engine
        .encode(
            &EncodeParams::default()
                .data(TEST_DATA)
                .transform("urdna2015"),
        )
        .await
        .unwrap();
    assert_eq!(link, format!("{SHA2_LINK}:{TRANSFORM_META_SEGMENT}"));
}

#[tokio::test]
async fn test_sha2_256_digest_bytes() {
    let out = MultihashSha2256.encode(TEST_DATA).await.unwrap();
    assert_eq!(
        hex::encode(&out[2..]),
        "03ba204e50d126e4674c005e04d82e84c21366780af1f43bd54a37816b6ab340"
    );
}

#[tokio::test]
async fn test_blake2b_64_digest_bytes() {
    let out = MultihashBlake2b64.encode(TEST_DATA).await.unwrap();
    assert_eq!(hex::encode(&out[3..]), "34377f929f5defa5");
}

#[tokio::test]
async fn test_verify_golden_links() {
    let engine = Hashlink::with_default_codecs();
    assert!(engine.verify(TEST_DATA, SHA2_LINK).await.unwrap());
    assert!(engine.verify(TEST_DATA, BLAKE2B_LINK).await.unwrap());
}

#[tokio::test]
async fn test_verify_link_with_metadata() {
    let engine = Hashlink::with_default_codecs();
    let link = format!("{SHA2_LINK}:{URL_CONTENT_TYPE_META_SEGMENT}");
    assert!(engine.verify(TEST_DATA, &link).await.unwrap());
}

#[tokio::test]
async fn test_verify_rejects_tampered_data() {
    let engine = Hashlink::with_default_codecs();
    assert!(!engine.verify(b"Hello World!", SHA2_LINK).await.unwrap());
    assert!(!engine.verify(b"Hello World!", BLAKE2B_LINK).await.unwrap());
}

#[tokio::test]
async fn test_malformed_link_rejected() {
    let engine = Hashlink::with_default_codecs();
    let link = format!("{SHA2_LINK}:{URL_META_SEGMENT}:extra");
    let err = engine.verify(TEST_DATA, &link).await.unwrap_err();
    assert!(matches!(err, HashlinkError::MalformedLink(_)));
}

#[tokio::test]
async fn test_convenience_functions() {
    let link = hashlink::encode(&EncodeParams::default().data(TEST_DATA))
        .await
        .unwrap();
    assert_eq!(link, SHA2_LINK);
    assert!(hashlink::verify(TEST_DATA, &link).await.unwrap());
    assert!(matches!(
        hashlink::decode(&link),
        Err(HashlinkError::NotImplemented)
    ));
}
