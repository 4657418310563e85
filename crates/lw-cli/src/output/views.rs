use lw_core::entities::MissionRecord;
use lw_core::responses::{ExtractResponse, HistoryResponse, RunReport, SignatureResponse};

use super::{Table, Tabular};

const MISSION_HEADERS: [&str; 4] = ["date", "class", "label", "title"];

fn mission_rows(missions: &[MissionRecord]) -> Vec<Vec<String>> {
    missions
        .iter()
        .map(|mission| {
            vec![
                mission.date.to_string(),
                mission.classification.to_string(),
                mission.human_label.clone(),
                mission.title.clone(),
            ]
        })
        .collect()
}

impl Tabular for RunReport {
    fn to_table(&self) -> Table {
        let previous = self
            .previous_signature
            .as_ref()
            .map_or("none", |signature| signature.short());
        Table {
            headers: MISSION_HEADERS.to_vec(),
            rows: mission_rows(&self.missions),
            summary: Some(format!(
                "outcome: {}  signature: {}  previous: {previous}",
                self.outcome,
                self.signature.short()
            )),
        }
    }
}

impl Tabular for ExtractResponse {
    fn to_table(&self) -> Table {
        Table {
            headers: MISSION_HEADERS.to_vec(),
            rows: mission_rows(&self.missions),
            summary: Some(format!("{} of {} missions", self.missions.len(), self.total)),
        }
    }
}

impl Tabular for HistoryResponse {
    fn to_table(&self) -> Table {
        Table {
            headers: vec!["logged_at", "outcome", "signature", "missions"],
            rows: self
                .entries
                .iter()
                .map(|entry| {
                    vec![
                        entry.logged_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                        entry.outcome.to_string(),
                        entry.signature.short().to_string(),
                        entry.mission_count.to_string(),
                    ]
                })
                .collect(),
            summary: Some(format!("backend: {}", self.backend)),
        }
    }
}

impl Tabular for SignatureResponse {
    fn to_table(&self) -> Table {
        Table {
            headers: vec!["backend", "signature"],
            rows: vec![vec![
                self.backend.clone(),
                self.signature
                    .as_ref()
                    .map_or_else(|| "none".to_string(), ToString::to_string),
            ]],
            summary: None,
        }
    }
}
