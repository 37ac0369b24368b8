use portfolio_core::{
    BackendError, LoadNotice, LocalBackend, ProjectRecord, StorageBackend, DEFAULT_SLOT_KEY,
};
use std::fs;
use tempfile::TempDir;

fn record(id: &str, title: &str) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        image: String::new(),
        alt: String::new(),
        github: String::new(),
        tags: String::new(),
        commit_count: 5,
        contributors: 1,
        project_status: "Active".to_string(),
        license_type: "MIT".to_string(),
    }
}

#[test]
fn save_then_load_roundtrips_the_full_list() {
    let dir = TempDir::new().unwrap();
    let backend = LocalBackend::in_dir(dir.path(), DEFAULT_SLOT_KEY);

    let records = vec![record("one", "First"), record("two", "Second")];
    let echoed = backend.save(&records).unwrap();
    assert_eq!(echoed, records);

    let outcome = backend.load().unwrap();
    assert_eq!(outcome.records, records);
    assert!(outcome.notice.is_none());
}

#[test]
fn missing_slot_loads_empty_with_notice() {
    let dir = TempDir::new().unwrap();
    let backend = LocalBackend::in_dir(dir.path(), DEFAULT_SLOT_KEY);

    let outcome = backend.load().unwrap();
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.notice, Some(LoadNotice::EmptySlot));
}

#[test]
fn corrupt_slot_loads_empty_with_notice_and_is_left_untouched() {
    let dir = TempDir::new().unwrap();
    let backend = LocalBackend::in_dir(dir.path(), DEFAULT_SLOT_KEY);
    fs::write(backend.slot_path(), "{ not json").unwrap();

    let outcome = backend.load().unwrap();
    assert!(outcome.records.is_empty());
    assert!(matches!(
        outcome.notice,
        Some(LoadNotice::CorruptSlot { .. })
    ));

    // load never rewrites the slot
    let raw = fs::read_to_string(backend.slot_path()).unwrap();
    assert_eq!(raw, "{ not json");
}

#[test]
fn save_creates_missing_parent_directory() {
    let dir = TempDir::new().unwrap();
    let backend = LocalBackend::in_dir(dir.path().join("nested/slots"), DEFAULT_SLOT_KEY);

    backend.save(&[record("one", "First")]).unwrap();
    assert!(backend.slot_path().is_file());
}

#[test]
fn save_surfaces_write_failures() {
    let dir = TempDir::new().unwrap();
    // A regular file where the slot directory should be makes the write fail.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let backend = LocalBackend::in_dir(&blocker, DEFAULT_SLOT_KEY);

    let err = backend.save(&[record("one", "First")]).unwrap_err();
    assert!(matches!(err, BackendError::Storage { .. }));
}

#[test]
fn slot_file_holds_a_bare_array_with_wire_names() {
    let dir = TempDir::new().unwrap();
    let backend = LocalBackend::in_dir(dir.path(), DEFAULT_SLOT_KEY);
    backend.save(&[record("one", "First")]).unwrap();

    let raw = fs::read_to_string(backend.slot_path()).unwrap();
    assert!(raw.trim_start().starts_with('['));
    assert!(raw.contains("\"commitCount\""));
    assert!(raw.contains("\"projectStatus\""));
    assert!(!raw.contains("commit_count"));
}

#[test]
fn slot_filename_derives_from_key() {
    let dir = TempDir::new().unwrap();
    let backend = LocalBackend::in_dir(dir.path(), DEFAULT_SLOT_KEY);
    assert!(backend
        .slot_path()
        .ends_with(format!("{DEFAULT_SLOT_KEY}.json")));
}
