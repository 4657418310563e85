//! # lw-core
//!
//! Core types shared by every launchwatch crate.
//!
//! - Mission records, input fragments and run-log entries
//! - Classification, outcome and fragment-kind enums
//! - The opaque [`Signature`] digest newtype
//! - The `RunReport` handed to downstream renderers

pub mod entities;
pub mod enums;
pub mod responses;
pub mod signature;

pub use signature::Signature;
