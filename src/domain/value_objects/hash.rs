//! Content Hash Value Object
//!
//! SHA-256 of a file's bytes, used to leave unchanged classes untouched
//! when a copy set is executed again.

use std::fmt;

/// Content hash with the `sha256:` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Compute the hash of raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(content);
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
