//! Integration tests for the default content hasher

use manifest::tree::hasher::{compute_content_hash, Blake3Hasher, ContentHasher, DIGEST_HEX_LEN};
use manifest::Renderer;

#[test]
fn test_default_digest_is_forty_hex_chars() {
    let hasher = Blake3Hasher;
    assert_eq!(hasher.digest_len(), 40);
    assert_eq!(DIGEST_HEX_LEN, 40);
    assert_eq!(hasher.hash(b"").len(), 40);
}

#[test]
fn test_hash_of_empty_input_is_blake3_prefix() {
    // BLAKE3("") = af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262
    assert_eq!(
        compute_content_hash(b""),
        "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9"
    );
}

#[test]
fn test_default_renderer_matches_default_digest_width() {
    assert_eq!(Renderer::default().hash_width(), Blake3Hasher.digest_len());
}
