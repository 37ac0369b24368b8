use portfolio_core::{
    BackendRegistry, LocalBackend, Notification, NotificationSink, ProjectService, RecordDraft,
    RecordPatch, ServiceError, Severity, DEFAULT_SLOT_KEY, LOCAL_BACKEND_LABEL,
};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingSink {
    events: Vec<Notification>,
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.events.push(notification);
    }
}

fn service_over(dir: &Path) -> ProjectService<RecordingSink> {
    let mut backends = BackendRegistry::new();
    backends
        .register(Arc::new(LocalBackend::in_dir(dir, DEFAULT_SLOT_KEY)))
        .expect("local backend should register");

    let mut service = ProjectService::new(backends, RecordingSink::default());
    service
        .switch_backend(LOCAL_BACKEND_LABEL)
        .expect("switching to local storage should succeed");
    service
}

fn draft(id: &str, title: &str) -> RecordDraft {
    RecordDraft {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        image: "images/card.png".to_string(),
        alt: "card image".to_string(),
        github: "https://github.com/example/repo".to_string(),
        tags: "rust,portfolio".to_string(),
        commit_count: "12".to_string(),
        contributors: "2".to_string(),
        project_status: "Active".to_string(),
        license_type: "MIT".to_string(),
    }
}

fn last_severity(service: &ProjectService<RecordingSink>) -> Severity {
    service
        .sink()
        .events
        .last()
        .expect("an intent should have notified")
        .severity
}

#[test]
fn create_then_read_contains_exactly_one_matching_record() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());

    service.create(draft("tracker", "Tracker")).unwrap();

    assert_eq!(service.records().len(), 1);
    let stored = service.find("tracker").expect("record should be readable");
    assert_eq!(stored.title, "Tracker");
    assert_eq!(stored.commit_count, 12);
    assert_eq!(stored.contributors, 2);
    assert_eq!(last_severity(&service), Severity::Success);
}

#[test]
fn blank_numeric_fields_default_to_zero() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());

    let mut input = draft("tracker", "Tracker");
    input.commit_count = String::new();
    input.contributors = "  ".to_string();
    service.create(input).unwrap();

    let stored = service.find("tracker").unwrap();
    assert_eq!(stored.commit_count, 0);
    assert_eq!(stored.contributors, 0);
}

#[test]
fn duplicate_id_leaves_list_unchanged_and_reports_validation_failure() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());
    service.create(draft("tracker", "Tracker")).unwrap();

    let err = service.create(draft("tracker", "Impostor")).unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateId(_)));

    assert_eq!(service.records().len(), 1);
    assert_eq!(service.find("tracker").unwrap().title, "Tracker");
    assert_eq!(last_severity(&service), Severity::Error);
}

#[test]
fn malformed_id_is_rejected_without_mutation() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());

    let err = service.create(draft("bad id!", "Broken")).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(service.records().is_empty());
    assert_eq!(last_severity(&service), Severity::Error);
}

#[test]
fn non_numeric_count_is_rejected_without_mutation() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());

    let mut input = draft("tracker", "Tracker");
    input.commit_count = "lots".to_string();
    let err = service.create(input).unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(service.records().is_empty());
}

#[test]
fn update_changes_only_patched_fields_and_keeps_id() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());
    service.create(draft("tracker", "Tracker")).unwrap();

    let patch = RecordPatch {
        description: Some("Rewritten description".to_string()),
        commit_count: Some("40".to_string()),
        ..RecordPatch::default()
    };
    service.update("tracker", patch).unwrap();

    let stored = service.find("tracker").unwrap();
    assert_eq!(stored.id, "tracker");
    assert_eq!(stored.description, "Rewritten description");
    assert_eq!(stored.commit_count, 40);
    // unspecified fields keep their values
    assert_eq!(stored.title, "Tracker");
    assert_eq!(stored.contributors, 2);
    assert_eq!(stored.license_type, "MIT");
}

#[test]
fn update_with_blank_selection_is_no_selection() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());

    let err = service.update("  ", RecordPatch::default()).unwrap_err();
    assert!(matches!(err, ServiceError::NoSelection));
}

#[test]
fn update_of_unknown_id_is_not_found_and_leaves_store_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());
    service.create(draft("tracker", "Tracker")).unwrap();

    let err = service
        .update("ghost", RecordPatch::default())
        .unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound(_)));
    assert_eq!(service.records().len(), 1);
}

#[test]
fn delete_removes_the_record_for_good() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());
    service.create(draft("tracker", "Tracker")).unwrap();
    service.create(draft("weather", "Weather")).unwrap();

    service.delete("tracker").unwrap();

    assert!(service.find("tracker").is_none());
    assert_eq!(service.records().len(), 1);

    // gone from persistent storage too, not just the session list
    let mut fresh = service_over(dir.path());
    fresh.reload().unwrap();
    assert!(fresh.find("tracker").is_none());
    assert!(fresh.find("weather").is_some());
}

#[test]
fn deleting_a_missing_id_is_a_reported_no_op() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());
    service.create(draft("tracker", "Tracker")).unwrap();

    let err = service.delete("ghost").unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound(_)));
    assert_eq!(service.records().len(), 1);
    assert_eq!(last_severity(&service), Severity::Error);
}

#[test]
fn created_records_survive_a_new_session() {
    let dir = TempDir::new().unwrap();
    {
        let mut service = service_over(dir.path());
        service.create(draft("tracker", "Tracker")).unwrap();
    }

    let service = service_over(dir.path());
    assert_eq!(service.records().len(), 1);
    assert_eq!(service.find("tracker").unwrap().title, "Tracker");
}

#[test]
fn every_intent_ends_in_exactly_one_notification() {
    let dir = TempDir::new().unwrap();
    let mut service = service_over(dir.path());
    let after_switch = service.sink().events.len();
    assert_eq!(after_switch, 1);

    service.create(draft("tracker", "Tracker")).unwrap();
    let _ = service.create(draft("tracker", "Dup")).unwrap_err();
    service
        .update(
            "tracker",
            RecordPatch {
                title: Some("Renamed".to_string()),
                ..RecordPatch::default()
            },
        )
        .unwrap();
    service.delete("tracker").unwrap();
    service.reload().unwrap();

    assert_eq!(service.sink().events.len(), after_switch + 5);
}

#[test]
fn first_switch_to_an_empty_slot_notifies_info() {
    let dir = TempDir::new().unwrap();
    let service = service_over(dir.path());

    let first = service.sink().events.first().unwrap();
    assert_eq!(first.severity, Severity::Info);
    assert!(first.message.contains("No projects found"));
}
