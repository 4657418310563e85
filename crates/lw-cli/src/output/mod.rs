use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
mod views;

pub use table::Table;

/// A response that has a human-oriented table form.
pub trait Tabular {
    fn to_table(&self) -> Table;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            Ok(table::render(
                &value.to_table(),
                table::TableOptions {
                    max_width: prefs.term_width,
                    color: prefs.table_color,
                },
            ))
        }
    }
}

/// Print a response to stdout in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use lw_core::Signature;
    use lw_core::entities::{CalendarDate, MissionRecord};
    use lw_core::enums::{Classification, RunOutcome};
    use lw_core::responses::RunReport;

    use super::render;
    use crate::cli::OutputFormat;

    fn report() -> RunReport {
        RunReport {
            outcome: RunOutcome::Changed,
            signature: Signature::new("ab".repeat(32)),
            previous_signature: None,
            missions: vec![MissionRecord {
                date: CalendarDate::from_ymd(2023, 1, 3).unwrap(),
                human_label: "January 3, 2023".into(),
                title: "SpaceX Falcon 9, Transporter 6".into(),
                anchor_id: None,
                detail_text: Some("Launch from SLC-40".into()),
                classification: Classification::Exact,
            }],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&report(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["outcome"], "changed");
        assert_eq!(parsed["missions"][0]["date"], "2023-01-03");
        assert_eq!(parsed["previous_signature"], serde_json::Value::Null);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&report(), OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["signature"], "ab".repeat(32));
    }

    #[test]
    fn table_render_lists_missions() {
        let out = render(&report(), OutputFormat::Table).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().is_some_and(|l| l.contains("changed") && l.contains("abababababab")));
        assert!(lines.next().is_some_and(|l| l.starts_with("date")));
        assert!(out.contains("SpaceX Falcon 9, Transporter 6"));
    }
}
