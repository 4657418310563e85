//! Entity structs for launchwatch domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! cross the CLI boundary as JSON and be described by the report schema.

mod fragment;
mod mission;
mod run_log;

pub use fragment::Fragment;
pub use mission::{CalendarDate, MissionRecord};
pub use run_log::RunLogEntry;
