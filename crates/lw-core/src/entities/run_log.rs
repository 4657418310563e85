use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Signature;
use crate::enums::RunOutcome;

/// An append-only run log entry recording the outcome of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RunLogEntry {
    pub logged_at: DateTime<Utc>,
    pub outcome: RunOutcome,
    pub signature: Signature,
    /// Number of missions in the filtered set the signature covers.
    #[serde(default)]
    pub mission_count: usize,
}
