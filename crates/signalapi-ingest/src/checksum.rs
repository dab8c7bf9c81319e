//! Seed file integrity check.

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{IngestError, IngestResult};

/// SHA-256 of `data/signals.csv`, the only seed file this build trusts.
pub const EXPECTED_SEED_SHA256: &str =
    "820e2bf50ef574ecab950090e4a502fec4a5ea7f7249441dde8b67cc525a6733";

/// Compute the SHA-256 of `bytes` and return the lowercase hex digest.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Check `bytes` against an expected hex digest (case-insensitive).
pub fn verify_checksum(bytes: &[u8], expected: &str) -> IngestResult<()> {
    let actual = sha256_hex(bytes);
    if !actual.eq_ignore_ascii_case(expected.trim()) {
        return Err(IngestError::ChecksumMismatch {
            expected: expected.to_string(),
            actual,
        });
    }
    debug!(sha256 = %actual, "seed file checksum verified");
    Ok(())
}
