//! Canonical serialization and digest of a mission sequence.
//!
//! The encoding is compact JSON of the records in the order given, with
//! every field in declaration order. Optional fields serialize as `null`
//! so that a missing anchor and an empty one stay distinct.

use lw_core::Signature;
use lw_core::entities::MissionRecord;

use crate::error::DetectError;

/// Deterministic, order-preserving byte encoding of `records`.
///
/// # Errors
///
/// Returns `DetectError::Serialize` if a record cannot be encoded.
pub fn canonical_serialize(records: &[MissionRecord]) -> Result<Vec<u8>, DetectError> {
    Ok(serde_json::to_vec(records)?)
}

/// BLAKE3 digest of [`canonical_serialize`] as a lowercase hex signature.
///
/// # Errors
///
/// Returns `DetectError::Serialize` if a record cannot be encoded.
pub fn compute_signature(records: &[MissionRecord]) -> Result<Signature, DetectError> {
    let bytes = canonical_serialize(records)?;
    Ok(Signature::new(blake3::hash(&bytes).to_hex().to_string()))
}
