//! Change detection against real and scripted stores.

use std::cell::RefCell;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use lw_core::Signature;
use lw_core::entities::{Fragment, MissionRecord, RunLogEntry};
use lw_core::enums::RunOutcome;
use lw_detect::{ChangeDetector, DetectError, compute_signature, filter_and_sort};
use lw_parser::MissionExtractor;
use lw_store::{FileSignatureStore, LibsqlSignatureStore, SignatureStore, StoreError};
use pretty_assertions::assert_eq;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 2, 6, 0, 0).unwrap()
}

fn extract(fragments: &[Fragment]) -> Vec<MissionRecord> {
    MissionExtractor::default().extract(fragments).unwrap()
}

fn schedule() -> Vec<MissionRecord> {
    extract(&[
        Fragment::heading("January 3, 2023 - SpaceX Falcon 9, Transporter 6", None),
        Fragment::detail("Launch was from launch pad SLC-40."),
        Fragment::heading("March 2023 - SpaceX Falcon 9, Polaris Dawn", None),
        Fragment::detail("Launch from LC-39A."),
        Fragment::heading("December 30, 2022 - SpaceX Falcon 9, Starlink", None),
        Fragment::detail("Launch was on time."),
    ])
}

fn rescheduled() -> Vec<MissionRecord> {
    extract(&[
        Fragment::heading("January 5, 2023 - SpaceX Falcon 9, Transporter 6", None),
        Fragment::detail("Launch was from launch pad SLC-40."),
        Fragment::heading("March 2023 - SpaceX Falcon 9, Polaris Dawn", None),
        Fragment::detail("Launch from LC-39A."),
    ])
}

fn local_store(dir: &std::path::Path) -> FileSignatureStore {
    FileSignatureStore::open(dir, "last_signature.txt", "run_log.jsonl", Duration::from_secs(2))
        .unwrap()
}

#[tokio::test]
async fn first_run_is_changed_and_carries_missions() {
    let store = LibsqlSignatureStore::open_local(":memory:").await.unwrap();
    let report = ChangeDetector::new(&store).run(schedule(), now()).await.unwrap();

    assert_eq!(report.outcome, RunOutcome::Changed);
    assert_eq!(report.previous_signature, None);
    let titles: Vec<_> = report.missions.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["SpaceX Falcon 9, Transporter 6", "SpaceX Falcon 9, Polaris Dawn"]
    );
    assert_eq!(store.latest_signature().await.unwrap(), Some(report.signature));
}

#[tokio::test]
async fn second_identical_run_is_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let store = local_store(dir.path());
    let detector = ChangeDetector::new(&store);

    let first = detector.run(schedule(), now()).await.unwrap();
    let raw_before = std::fs::read_to_string(store.signature_path()).unwrap();

    let second = detector.run(schedule(), now()).await.unwrap();
    assert_eq!(second.outcome, RunOutcome::Unchanged);
    assert_eq!(second.signature, first.signature);
    assert_eq!(second.previous_signature, Some(first.signature.clone()));
    assert!(second.missions.is_empty());
    assert_eq!(std::fs::read_to_string(store.signature_path()).unwrap(), raw_before);

    let log = store.run_log(10).await.unwrap();
    let outcomes: Vec<_> = log.iter().map(|e| e.outcome).collect();
    assert_eq!(outcomes, vec![RunOutcome::Unchanged, RunOutcome::Changed]);
    assert!(log.iter().all(|e| e.signature == first.signature && e.mission_count == 2));
}

#[tokio::test]
async fn rescheduled_mission_changes_signature() {
    let store = LibsqlSignatureStore::open_local(":memory:").await.unwrap();
    let detector = ChangeDetector::new(&store);

    let first = detector.run(schedule(), now()).await.unwrap();
    let second = detector.run(rescheduled(), now()).await.unwrap();

    assert_eq!(second.outcome, RunOutcome::Changed);
    assert_ne!(second.signature, first.signature);
    assert_eq!(second.previous_signature, Some(first.signature));
    assert_eq!(second.missions.len(), 2);
}

#[tokio::test]
async fn past_missions_do_not_affect_signature() {
    let store = LibsqlSignatureStore::open_local(":memory:").await.unwrap();
    let detector = ChangeDetector::new(&store);
    let mut without_past = schedule();
    without_past.retain(|m| m.title != "SpaceX Falcon 9, Starlink");

    let first = detector.run(schedule(), now()).await.unwrap();
    let second = detector.run(without_past, now()).await.unwrap();
    assert_eq!(second.outcome, RunOutcome::Unchanged);
    assert_eq!(second.signature, first.signature);
}

#[tokio::test]
async fn empty_source_keeps_stored_signature() {
    let store = LibsqlSignatureStore::open_local(":memory:").await.unwrap();
    let detector = ChangeDetector::new(&store);
    let first = detector.run(schedule(), now()).await.unwrap();

    let empty = detector.run(Vec::new(), now()).await.unwrap();
    assert_eq!(empty.outcome, RunOutcome::Unchanged);
    assert_eq!(empty.signature, compute_signature(&[]).unwrap());
    assert_eq!(store.latest_signature().await.unwrap(), Some(first.signature));

    let log = store.run_log(1).await.unwrap();
    assert_eq!(log[0].signature, empty.signature);
    assert_eq!(log[0].mission_count, 0);
}

#[tokio::test]
async fn all_past_missions_still_publish_empty_set() {
    let store = LibsqlSignatureStore::open_local(":memory:").await.unwrap();
    let detector = ChangeDetector::new(&store);
    detector.run(schedule(), now()).await.unwrap();

    let later = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let report = detector.run(schedule(), later).await.unwrap();
    assert_eq!(report.outcome, RunOutcome::Changed);
    assert!(report.missions.is_empty());
    assert_eq!(
        store.latest_signature().await.unwrap(),
        Some(compute_signature(&[]).unwrap())
    );
}

#[test]
fn comma_glued_exact_heading_sorts_by_its_day() {
    let missions = extract(&[
        Fragment::heading("January 3,2023 - Later", None),
        Fragment::detail("Launch from SLC-40"),
        Fragment::heading("January 2, 2023 - Earlier", None),
        Fragment::detail("Launch from LC-39A"),
    ]);
    let sorted = filter_and_sort(missions, now());
    let titles: Vec<&str> = sorted.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Earlier", "Later"]);
}

#[test]
fn distinct_schedules_sign_distinctly() {
    let a = filter_and_sort(schedule(), now());
    let b = filter_and_sort(rescheduled(), now());
    let mut c = a.clone();
    c[0].detail_text = Some("Launch scrubbed.".into());

    let sigs = [
        compute_signature(&a).unwrap(),
        compute_signature(&b).unwrap(),
        compute_signature(&c).unwrap(),
    ];
    assert_ne!(sigs[0], sigs[1]);
    assert_ne!(sigs[0], sigs[2]);
    assert_ne!(sigs[1], sigs[2]);
}

/// A store that scripts failures and a concurrent writer.
#[derive(Default)]
struct ScriptedStore {
    current: RefCell<Option<Signature>>,
    /// Installed just before our swap, as if another run won the race.
    racer: Option<Signature>,
    fail_reads: bool,
    fail_log: bool,
    replace_calls: RefCell<u32>,
    log: RefCell<Vec<RunLogEntry>>,
}

impl SignatureStore for ScriptedStore {
    fn backend(&self) -> &'static str {
        "scripted"
    }

    async fn latest_signature(&self) -> Result<Option<Signature>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Io(std::io::Error::other("store offline")));
        }
        Ok(self.current.borrow().clone())
    }

    async fn replace_signature(
        &self,
        expected: Option<&Signature>,
        new: &Signature,
    ) -> Result<(), StoreError> {
        *self.replace_calls.borrow_mut() += 1;
        if let Some(racer) = &self.racer {
            *self.current.borrow_mut() = Some(racer.clone());
        }
        let actual = self.current.borrow().clone();
        if actual.as_ref() != expected {
            return Err(StoreError::Conflict {
                expected: expected.cloned(),
                actual,
            });
        }
        *self.current.borrow_mut() = Some(new.clone());
        Ok(())
    }

    async fn append_run_log(&self, entry: &RunLogEntry) -> Result<(), StoreError> {
        if self.fail_log {
            return Err(StoreError::InvalidState("log table locked".into()));
        }
        self.log.borrow_mut().push(entry.clone());
        Ok(())
    }

    async fn run_log(&self, limit: u32) -> Result<Vec<RunLogEntry>, StoreError> {
        Ok(self
            .log
            .borrow()
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[tokio::test]
async fn run_log_failure_is_not_fatal() {
    let store = ScriptedStore {
        fail_log: true,
        ..Default::default()
    };
    let report = ChangeDetector::new(&store).run(schedule(), now()).await.unwrap();
    assert_eq!(report.outcome, RunOutcome::Changed);
    assert_eq!(*store.current.borrow(), Some(report.signature));
}

#[tokio::test]
async fn unreadable_store_fails_without_replacing() {
    let store = ScriptedStore {
        fail_reads: true,
        ..Default::default()
    };
    let err = ChangeDetector::new(&store)
        .run(schedule(), now())
        .await
        .unwrap_err();
    assert!(matches!(err, DetectError::Store(_)));
    assert_eq!(*store.replace_calls.borrow(), 0);
    assert!(store.log.borrow().is_empty());
}

#[tokio::test]
async fn losing_race_to_different_signature_fails() {
    let other = Signature::new("ee".repeat(32));
    let store = ScriptedStore {
        racer: Some(other.clone()),
        ..Default::default()
    };
    let err = ChangeDetector::new(&store)
        .run(schedule(), now())
        .await
        .unwrap_err();
    match err {
        DetectError::ConcurrentUpdate { actual } => assert_eq!(actual, Some(other.clone())),
        e => panic!("expected concurrent update, got {e}"),
    }
    assert_eq!(*store.current.borrow(), Some(other));
    assert!(store.log.borrow().is_empty(), "failed run is not logged");
}

#[tokio::test]
async fn losing_race_to_same_signature_is_unchanged() {
    let ours = compute_signature(&filter_and_sort(schedule(), now())).unwrap();
    let store = ScriptedStore {
        racer: Some(ours.clone()),
        ..Default::default()
    };
    let report = ChangeDetector::new(&store).run(schedule(), now()).await.unwrap();
    assert_eq!(report.outcome, RunOutcome::Unchanged);
    assert_eq!(report.signature, ours);
    assert_eq!(store.log.borrow()[0].outcome, RunOutcome::Unchanged);
}
