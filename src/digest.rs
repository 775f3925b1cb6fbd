//! Content digests used to identify uploaded files
use sha2::{Digest, Sha256};

/// Computes the SHA-256 digest of `content` as a lowercase hex string
///
/// This is the value Vercel expects in the `x-vercel-digest` header and the
/// identifier later used to reference the file in a deployment.
pub fn sha256_hex(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}
