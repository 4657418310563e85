use lw_core::entities::{Fragment, MissionRecord, RunLogEntry};
use lw_core::responses::RunReport;
use schemars::schema_for;

use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::cli::{GlobalFlags, OutputFormat};

/// JSON Schema for the document named by `kind`.
pub fn schema_value(kind: SchemaKind) -> serde_json::Result<serde_json::Value> {
    match kind {
        SchemaKind::RunReport => serde_json::to_value(schema_for!(RunReport)),
        SchemaKind::Mission => serde_json::to_value(schema_for!(MissionRecord)),
        SchemaKind::Fragment => serde_json::to_value(schema_for!(Fragment)),
        SchemaKind::RunLogEntry => serde_json::to_value(schema_for!(RunLogEntry)),
    }
}

/// Handle `lwatch schema`. Table format falls back to pretty JSON.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(args.kind)?;
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(())
}
