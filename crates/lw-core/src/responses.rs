//! CLI response types returned as JSON by `lwatch` commands.
//!
//! `RunReport` is the contract with downstream renderers and notifiers: on a
//! `changed` outcome its `missions` field carries the filtered, sorted set.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Signature;
use crate::entities::{MissionRecord, RunLogEntry};
use crate::enums::RunOutcome;

/// Response from `lwatch run`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub signature: Signature,
    pub previous_signature: Option<Signature>,
    /// Filtered, sorted missions. Empty unless `outcome` is `changed`.
    pub missions: Vec<MissionRecord>,
}

/// Response from `lwatch extract`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExtractResponse {
    pub missions: Vec<MissionRecord>,
    pub total: usize,
}

/// Response from `lwatch history`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryResponse {
    pub backend: String,
    pub entries: Vec<RunLogEntry>,
}

/// Response from `lwatch signature`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignatureResponse {
    pub backend: String,
    pub signature: Option<Signature>,
}
