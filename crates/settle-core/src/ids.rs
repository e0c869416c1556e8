//! Codec that packs two numeric identifiers into one UUID string.
//!
//! The host uses this to merge a user id and a message id into a single
//! opaque key. Each half occupies 64 bits: `high` the first 16 hex digits,
//! `low` the last 16.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::text::is_numeric;
use crate::CoreError;

/// The two decimal identifiers carried by an encoded UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdPair {
    /// Identifier stored in the upper 64 bits.
    pub high: String,
    /// Identifier stored in the lower 64 bits.
    pub low: String,
}

impl IdPair {
    /// Create a new IdPair.
    pub fn new(high: impl Into<String>, low: impl Into<String>) -> Self {
        Self {
            high: high.into(),
            low: low.into(),
        }
    }

    /// Encode this pair as a hyphenated UUID.
    pub fn encode(&self) -> Result<String, CoreError> {
        encode(&self.high, &self.low)
    }
}

impl fmt::Display for IdPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.high, self.low)
    }
}

/// Encode two decimal identifier strings into a hyphenated, lowercase UUID.
pub fn encode(high: &str, low: &str) -> Result<String, CoreError> {
    let high = parse_half(high)?;
    let low = parse_half(low)?;
    Ok(Uuid::from_u64_pair(high, low).hyphenated().to_string())
}

/// Decode a UUID produced by [`encode`] back into its decimal halves.
///
/// Hyphens are optional.
pub fn decode(uuid: &str) -> Result<IdPair, CoreError> {
    let parsed = Uuid::parse_str(uuid).map_err(|e| CoreError::InvalidUuid {
        uuid: uuid.to_string(),
        reason: e.to_string(),
    })?;
    let (high, low) = parsed.as_u64_pair();
    Ok(IdPair::new(high.to_string(), low.to_string()))
}

fn parse_half(value: &str) -> Result<u64, CoreError> {
    if !is_numeric(value) {
        return Err(CoreError::InvalidInput(format!(
            "'{}' is not a decimal integer",
            value
        )));
    }
    value
        .parse::<u64>()
        .map_err(|_| CoreError::InvalidInput(format!("'{}' does not fit in 64 bits", value)))
}
