//! # lw-detect
//!
//! The decision half of a launchwatch run: keep the upcoming missions,
//! put them in display order, sign the sequence, and compare the signature
//! against the one in a [`lw_store::SignatureStore`].

pub mod detector;
pub mod error;
pub mod filter;
pub mod signature;

pub use detector::ChangeDetector;
pub use error::DetectError;
pub use filter::{current_day_boundary, filter_and_sort, sort_key};
pub use signature::{canonical_serialize, compute_signature};
