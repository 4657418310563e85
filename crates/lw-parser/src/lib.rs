//! # lw-parser
//!
//! Turns the fragment stream located on the launch schedule page into
//! [`MissionRecord`](lw_core::entities::MissionRecord)s.
//!
//! Two stages:
//! - [`date`]: resolves a heading's date phrase (exact, month-only, `NET`,
//!   quarter) into a concrete calendar date and classification
//! - [`extract`]: two-state scan pairing each dated heading with its
//!   trailing `Launch…` detail paragraph

pub mod date;
pub mod error;
pub mod extract;

pub use date::{NormalizedHeading, normalize_heading};
pub use error::ParserError;
pub use extract::MissionExtractor;
