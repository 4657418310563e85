//! Saved schedule page through the scanner and extractor.

use lw_core::entities::{Fragment, MissionRecord};
use lw_core::enums::{Classification, FragmentKind};
use lw_parser::MissionExtractor;
use lw_source::{load_fragments, save_fragments, scan_fragments};
use pretty_assertions::assert_eq;

const PAGE: &str = include_str!("fixtures/schedule.html");

fn missions() -> Vec<MissionRecord> {
    MissionExtractor::default()
        .extract(&scan_fragments(PAGE))
        .unwrap()
}

#[test]
fn scan_skips_chrome_and_empty_paragraphs() {
    let fragments = scan_fragments(PAGE);
    let headings: Vec<&Fragment> = fragments
        .iter()
        .filter(|f| f.kind == FragmentKind::Heading)
        .collect();

    assert_eq!(headings.len(), 5);
    assert_eq!(
        headings[0].anchor_id.as_deref(),
        Some("january32023-spacexfalcon9transporter6")
    );
    assert!(fragments.iter().all(|f| !f.text.is_empty()));
    assert!(!fragments.iter().any(|f| f.text.contains("dataLayer")));
}

#[test]
fn fixture_page_yields_four_missions() {
    let missions = missions();
    let summary: Vec<(String, Classification)> = missions
        .iter()
        .map(|m| (m.date.to_string(), m.classification))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("2023-01-03".into(), Classification::Exact),
            ("2023-03-02".into(), Classification::NetEstimate),
            ("2023-03-31".into(), Classification::MonthOnly),
            ("2023-09-30".into(), Classification::QuarterAllocated),
        ]
    );
    assert_eq!(missions[0].title, "SpaceX Falcon 9, Transporter 6");
    assert_eq!(
        missions[0].detail_text.as_deref(),
        Some("Launch was from launch pad SLC-40 at 9:56 am.")
    );
    assert_eq!(
        missions[1].detail_text.as_deref(),
        Some("Launch from SLC-41, time TBC.")
    );
    assert_eq!(
        missions[2].anchor_id.as_deref(),
        Some("march2023-spacexfalcon9polarisdawn")
    );
}

#[test]
fn fragment_file_round_trip_extracts_the_same_missions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule.jsonl");
    save_fragments(&path, &scan_fragments(PAGE)).unwrap();

    let offline = MissionExtractor::default()
        .extract(&load_fragments(&path).unwrap())
        .unwrap();
    assert_eq!(offline, missions());
}
