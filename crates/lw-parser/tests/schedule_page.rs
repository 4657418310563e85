//! Extraction over a fragment sequence shaped like the live schedule page.

use lw_core::entities::{CalendarDate, Fragment, MissionRecord};
use lw_core::enums::Classification;
use lw_parser::MissionExtractor;
use pretty_assertions::assert_eq;

fn schedule_fragments() -> Vec<Fragment> {
    vec![
        Fragment::heading("Current Launch Schedule", Some("current-launch-schedule")),
        Fragment::detail("Here are the upcoming rocket launches from Florida."),
        Fragment::heading(
            "January 3, 2023 - SpaceX Falcon 9, Transporter 6",
            Some("january32023-spacexfalcon9transporter6"),
        ),
        Fragment::detail("Launch was from launch pad SLC-40 at 9:56 am."),
        Fragment::heading(
            "NET March 2, 2023 - Boeing Starliner, CFT",
            Some("netmarch22023-boeingstarlinercft"),
        ),
        Fragment::detail("The first crewed flight of Starliner."),
        Fragment::detail("Launch from SLC-41, time TBC."),
        Fragment::heading("March 2023 - SpaceX Falcon 9, Polaris Dawn", None),
        Fragment::detail("Launch from LC-39A."),
        Fragment::heading(
            "Quarter 3, 2023 - ULA Vulcan, Dream Chaser",
            Some("quarter32023-ulavulcandreamchaser"),
        ),
        Fragment::detail("Launch from SLC-41."),
        Fragment::heading("Viewing locations", Some("viewing-locations")),
        Fragment::detail("Launch viewing is best from Playalinda Beach."),
    ]
}

#[test]
fn transporter_6_end_to_end() {
    let fragments = [
        Fragment::heading("January 3, 2023 - SpaceX Falcon 9, Transporter 6", None),
        Fragment::detail("Launch was from launch pad SLC-40..."),
    ];
    let missions = MissionExtractor::default().extract(&fragments).unwrap();

    assert_eq!(
        missions,
        vec![MissionRecord {
            date: CalendarDate::from_ymd(2023, 1, 3).unwrap(),
            human_label: "January 3, 2023".into(),
            title: "SpaceX Falcon 9, Transporter 6".into(),
            anchor_id: None,
            detail_text: Some("Launch was from launch pad SLC-40...".into()),
            classification: Classification::Exact,
        }]
    );
}

#[test]
fn full_page_yields_missions_in_encounter_order() {
    let missions = MissionExtractor::default()
        .extract(&schedule_fragments())
        .unwrap();

    let summary: Vec<(String, Classification, String)> = missions
        .iter()
        .map(|m| (m.date.to_string(), m.classification, m.human_label.clone()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("2023-01-03".into(), Classification::Exact, "January 3, 2023".into()),
            ("2023-03-02".into(), Classification::NetEstimate, "March 2, 2023".into()),
            ("2023-03-31".into(), Classification::MonthOnly, "March 2023".into()),
            ("2023-09-30".into(), Classification::QuarterAllocated, "Quarter 3, 2023".into()),
        ]
    );
    assert_eq!(
        missions[1].detail_text.as_deref(),
        Some("Launch from SLC-41, time TBC.")
    );
    assert!(missions[3].title.starts_with("ULA Vulcan, Dream Chaser (Q3 2023"));
}

#[test]
fn every_emitted_record_has_detail() {
    let missions = MissionExtractor::default()
        .extract(&schedule_fragments())
        .unwrap();
    assert!(missions.iter().all(|m| m.detail_text.is_some()));
}
