//! Digests and digest-derived seeds.

use crate::error::GenError;

/// Hex length of a SHA-1 digest.
pub const DIGEST_LEN: usize = 40;

/// Longest window that still parses into a `u32`.
pub const MAX_WINDOW: usize = 7;

/// SHA-1 of `bytes` as 40 lowercase hex characters.
pub fn sha1_hex(bytes: impl AsRef<[u8]>) -> String {
    sha1_smol::Sha1::from(bytes.as_ref()).digest().to_string()
}

/// Check that `digest` looks like a fresh SHA-1 digest: 40 lowercase hex characters.
pub fn validate_digest(digest: &str) -> Result<(), GenError> {
    let lower_hex = |b: u8| b.is_ascii_digit() || (b'a'..=b'f').contains(&b);
    if digest.len() != DIGEST_LEN || !digest.bytes().all(lower_hex) {
        return Err(GenError::InvalidDigest(digest.to_string()));
    }
    Ok(())
}

/// Reads integer seeds out of fixed windows of a digest.
///
/// When a window runs past the end, the digest is extended with the hash of itself
/// until the window fits. The extended digest is kept so later windows see the same
/// characters.
#[derive(Debug, Clone)]
pub struct SeedExtractor {
    digest: String,
    extend: bool,
}

impl SeedExtractor {
    pub fn new(digest: impl Into<String>) -> Self {
        Self {
            digest: digest.into(),
            extend: true,
        }
    }

    /// Refuse windows past the end instead of extending.
    pub fn without_extension(mut self) -> Self {
        self.extend = false;
        self
    }

    /// The digest as extended so far.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn into_digest(self) -> String {
        self.digest
    }

    /// Parse `digest[offset..offset + len]` as hex.
    pub fn seed(&mut self, offset: usize, len: usize) -> Result<u32, GenError> {
        if len == 0 || len > MAX_WINDOW {
            return Err(GenError::InvalidSeedWindow(len));
        }

        let end = offset
            .checked_add(len)
            .ok_or(GenError::SeedWindowOutOfRange {
                offset,
                len,
                available: self.digest.len(),
            })?;
        while end > self.digest.len() {
            if !self.extend {
                return Err(GenError::SeedWindowOutOfRange {
                    offset,
                    len,
                    available: self.digest.len(),
                });
            }
            let tail = sha1_hex(&self.digest);
            self.digest.push_str(&tail);
            tracing::trace!(len = self.digest.len(), "Extended digest");
        }

        let window = self
            .digest
            .get(offset..end)
            .ok_or_else(|| GenError::InvalidDigest(self.digest.clone()))?;
        u32::from_str_radix(window, 16).map_err(|_| GenError::InvalidDigest(self.digest.clone()))
    }
}

/// One-shot seed lookup returning the possibly extended digest.
pub fn seed_from(digest: &str, offset: usize, len: usize) -> Result<(u32, String), GenError> {
    let mut extractor = SeedExtractor::new(digest);
    let seed = extractor.seed(offset, len)?;
    Ok((seed, extractor.into_digest()))
}
