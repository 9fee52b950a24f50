use std::sync::{Arc, Mutex};

use customer_audit::config::AuditConfig;
use customer_audit::driver::{run, Outcome};
use customer_audit::ingestion::{
    load_customers, LoadEvent, LoadObserver, LoadOptions, LoadSeverity, LoadStats,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Seen {
    Loaded(LoadStats),
    Failed { severity: LoadSeverity, alert: bool },
}

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<Seen>>,
}

impl LoadObserver for RecordingObserver {
    fn on_event(&self, event: &LoadEvent<'_>) {
        let seen = match event {
            LoadEvent::Loaded { stats, .. } => Seen::Loaded(*stats),
            LoadEvent::Failed { severity, alert, .. } => Seen::Failed {
                severity: *severity,
                alert: *alert,
            },
        };
        self.events.lock().unwrap().push(seen);
    }
}

fn opts_with(obs: &Arc<RecordingObserver>, threshold: LoadSeverity) -> LoadOptions {
    LoadOptions {
        observers: vec![obs.clone() as Arc<dyn LoadObserver>],
        alert_at_or_above: threshold,
        ..Default::default()
    }
}

#[test]
fn observer_receives_load_shape_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    load_customers("tests/fixtures/customers.csv", &opts_with(&obs, LoadSeverity::Critical)).unwrap();

    assert_eq!(
        *obs.events.lock().unwrap(),
        vec![Seen::Loaded(LoadStats {
            rows: 7,
            columns: 4,
            short_records: 1,
        })]
    );
}

#[test]
fn missing_file_is_a_warning_without_alert() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = load_customers("tests/fixtures/does_not_exist.csv", &opts_with(&obs, LoadSeverity::Critical))
        .unwrap_err();

    assert_eq!(
        *obs.events.lock().unwrap(),
        vec![Seen::Failed {
            severity: LoadSeverity::Warning,
            alert: false,
        }]
    );
}

#[test]
fn lowering_the_threshold_turns_failures_into_alerts() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = load_customers("tests/fixtures/does_not_exist.csv", &opts_with(&obs, LoadSeverity::Warning))
        .unwrap_err();

    assert_eq!(
        *obs.events.lock().unwrap(),
        vec![Seen::Failed {
            severity: LoadSeverity::Warning,
            alert: true,
        }]
    );
}

#[test]
fn malformed_input_is_an_error_without_alert() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, b"name,email\n\xff,a@b.com\n").unwrap();

    let obs = Arc::new(RecordingObserver::default());
    let _ = load_customers(&path, &opts_with(&obs, LoadSeverity::Critical)).unwrap_err();

    assert_eq!(
        *obs.events.lock().unwrap(),
        vec![Seen::Failed {
            severity: LoadSeverity::Error,
            alert: false,
        }]
    );
}

#[test]
fn every_observer_gets_the_event() {
    let first = Arc::new(RecordingObserver::default());
    let second = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observers: vec![
            first.clone() as Arc<dyn LoadObserver>,
            second.clone() as Arc<dyn LoadObserver>,
        ],
        ..Default::default()
    };

    load_customers("tests/fixtures/header_only.csv", &opts).unwrap();

    let expected = vec![Seen::Loaded(LoadStats {
        rows: 0,
        columns: 3,
        short_records: 0,
    })];
    assert_eq!(*first.events.lock().unwrap(), expected);
    assert_eq!(*second.events.lock().unwrap(), expected);
}

#[test]
fn log_file_records_missing_file_without_alert() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("audit.log");
    let cfg = AuditConfig {
        log_file: Some(log.clone()),
        ..AuditConfig::for_path(dir.path().join("absent.csv"))
    };

    let mut out = Vec::new();
    assert_eq!(run(&cfg, &mut out).unwrap(), Outcome::NotFound);

    let text = std::fs::read_to_string(&log).unwrap();
    assert!(text.contains("failed severity=Warning"));
    assert!(!text.contains("ALERT"));
}
