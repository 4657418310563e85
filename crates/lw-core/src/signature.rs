//! Opaque mission-set signature.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-length digest over the canonical serialization of a mission set.
///
/// The value is treated as opaque everywhere except where it is produced
/// (`lw-detect`) and validated on load (`lw-store`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    /// Length in characters of a well-formed signature (hex-encoded 32 bytes).
    pub const LEN: usize = 64;

    /// Wrap a hex digest string.
    #[must_use]
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Parse a stored value, returning `None` unless it is exactly
    /// [`Self::LEN`] lowercase hex characters.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let well_formed = raw.len() == Self::LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        well_formed.then(|| Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 characters, for log lines.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(12)]
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
