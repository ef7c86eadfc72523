//! Content hashing for scanned files
//!
//! The rest of the crate only depends on [`ContentHasher`]: a pure function
//! from bytes to a digest string of fixed length. The default implementation
//! truncates BLAKE3 extendable output to 20 bytes, giving 40 hex characters.

use blake3::Hasher;

/// Digest length in hex characters produced by [`Blake3Hasher`]
pub const DIGEST_HEX_LEN: usize = 40;

/// Opaque content-hash capability
pub trait ContentHasher: Send + Sync {
    /// Exact length of every digest returned by [`ContentHasher::hash`]
    fn digest_len(&self) -> usize;

    /// Compute the digest of `content`
    fn hash(&self, content: &[u8]) -> String;
}

/// BLAKE3 content hasher with 40-character hex output
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl ContentHasher for Blake3Hasher {
    fn digest_len(&self) -> usize {
        DIGEST_HEX_LEN
    }

    fn hash(&self, content: &[u8]) -> String {
        compute_content_hash(content)
    }
}

/// Compute content hash for file bytes
pub fn compute_content_hash(content: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(content);

    let mut digest = [0u8; DIGEST_HEX_LEN / 2];
    hasher.finalize_xof().fill(&mut digest);
    hex::encode(digest)
}
