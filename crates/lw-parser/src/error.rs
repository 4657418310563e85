//! Parser error types for lw-parser.

/// Errors raised while normalizing headings.
///
/// A heading that does not start with a date keyword is not an error; the
/// normalizer returns `Ok(None)` for it and the scan moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    /// The heading starts like a date but does not fit any known grammar.
    #[error("Unrecognized date grammar in '{phrase}': {reason}")]
    DateGrammar { phrase: String, reason: String },
}

impl ParserError {
    pub(crate) fn grammar(phrase: &str, reason: impl Into<String>) -> Self {
        Self::DateGrammar {
            phrase: phrase.to_string(),
            reason: reason.into(),
        }
    }
}
