use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FragmentKind;

/// One atomic unit of the input stream located by the markup scan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_id: Option<String>,
}

impl Fragment {
    #[must_use]
    pub fn heading(text: impl Into<String>, anchor_id: Option<&str>) -> Self {
        Self {
            kind: FragmentKind::Heading,
            text: text.into(),
            anchor_id: anchor_id.map(str::to_string),
        }
    }

    #[must_use]
    pub fn detail(text: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::Detail,
            text: text.into(),
            anchor_id: None,
        }
    }
}
