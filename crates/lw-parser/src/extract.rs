//! Mission extraction from the fragment stream.
//!
//! The page lists each mission as a heading followed by a handful of
//! paragraphs; the one that starts with "Launch" names the pad and time.
//! The scan is a two-state machine:
//!
//! ```text
//! Idle      --heading with a date-->      Capturing(record)
//! Capturing --detail starting "Launch"--> Idle (record emitted)
//! ```
//!
//! Everything else is ignored in either state. A record still open when the
//! stream ends never saw its detail paragraph and is dropped.

use lw_core::entities::{Fragment, MissionRecord};
use lw_core::enums::FragmentKind;

use crate::date::normalize_heading;
use crate::error::ParserError;

/// Default prefix of the detail paragraph that completes a mission.
pub const DEFAULT_DETAIL_MARKER: &str = "Launch";

#[derive(Debug)]
enum ScanState {
    Idle,
    Capturing(MissionRecord),
}

/// Pairs dated headings with their trailing detail fragment.
#[derive(Debug, Clone)]
pub struct MissionExtractor {
    detail_marker: String,
}

impl Default for MissionExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_DETAIL_MARKER)
    }
}

impl MissionExtractor {
    /// Create an extractor completing records on details that start with `detail_marker`.
    #[must_use]
    pub fn new(detail_marker: impl Into<String>) -> Self {
        Self {
            detail_marker: detail_marker.into(),
        }
    }

    #[must_use]
    pub fn detail_marker(&self) -> &str {
        &self.detail_marker
    }

    /// Scan `fragments` and return completed missions in encounter order.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::DateGrammar`] for the first heading that starts
    /// with a date keyword but does not parse. No partial result is returned.
    pub fn extract(&self, fragments: &[Fragment]) -> Result<Vec<MissionRecord>, ParserError> {
        let mut missions = Vec::new();
        let mut state = ScanState::Idle;

        for fragment in fragments {
            state = match (state, fragment.kind) {
                (ScanState::Idle, FragmentKind::Heading) => self.open(fragment)?,
                (ScanState::Capturing(mut record), FragmentKind::Detail)
                    if fragment.text.trim_start().starts_with(&self.detail_marker) =>
                {
                    record.detail_text = Some(fragment.text.trim().to_string());
                    tracing::debug!(title = %record.title, date = %record.date, "mission completed");
                    missions.push(record);
                    ScanState::Idle
                }
                (state, _) => state,
            };
        }

        if let ScanState::Capturing(record) = state {
            tracing::debug!(title = %record.title, "dropping mission without detail at end of input");
        }

        tracing::debug!(
            fragments = fragments.len(),
            missions = missions.len(),
            "extraction finished"
        );
        Ok(missions)
    }

    fn open(&self, heading: &Fragment) -> Result<ScanState, ParserError> {
        let Some(normalized) = normalize_heading(&heading.text)? else {
            tracing::debug!(text = %heading.text, "heading is not a mission entry");
            return Ok(ScanState::Idle);
        };

        Ok(ScanState::Capturing(MissionRecord {
            date: normalized.date,
            human_label: normalized.human_label,
            title: normalized.title,
            anchor_id: heading.anchor_id.clone(),
            detail_text: None,
            classification: normalized.classification,
        }))
    }
}
