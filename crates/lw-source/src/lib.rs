//! # lw-source
//!
//! Produces the ordered fragment stream the extractor consumes:
//! - [`PageClient`] fetches the live schedule page
//! - [`scan_fragments`] turns its HTML into heading/detail fragments
//! - [`load_fragments`] / [`save_fragments`] read and write JSONL fragment
//!   files for offline runs

mod client;
mod error;
mod http;
mod jsonl;
mod markup;

pub use client::PageClient;
pub use error::SourceError;
pub use jsonl::{load_fragments, save_fragments};
pub use markup::scan_fragments;
