use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use lw_config::StoreBackend;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch the schedule, detect changes and record the run.
    Run(RunArgs),
    /// Extract missions without touching the signature store.
    Extract(ExtractArgs),
    /// Show the most recent run log entries.
    History,
    /// Show the currently stored signature.
    Signature,
    /// Print the JSON Schema of a launchwatch document.
    Schema(SchemaArgs),
}

/// Where the fragment stream comes from.
#[derive(Clone, Debug, Default, Args)]
pub struct SourceArgs {
    /// Read fragments from a JSONL file instead of fetching the page.
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    pub fragments: Option<PathBuf>,

    /// Fetch this URL instead of the configured schedule page.
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Override the configured signature store backend.
    #[arg(long)]
    pub backend: Option<BackendArg>,
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Keep past missions and source order (skip filter and sort).
    #[arg(long)]
    pub all: bool,

    /// Also write the scanned fragments to this JSONL file.
    #[arg(long, value_name = "FILE")]
    pub save_fragments: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document type to describe.
    #[arg(long = "type", value_enum, default_value = "run-report")]
    pub kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    RunReport,
    Mission,
    Fragment,
    RunLogEntry,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum BackendArg {
    Local,
    Libsql,
}

impl From<BackendArg> for StoreBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Local => Self::Local,
            BackendArg::Libsql => Self::Libsql,
        }
    }
}
