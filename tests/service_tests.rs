use roster::db::{CredentialStore, RecordStore};
use roster::types::Department;
use roster::{RosterError, RosterService, ValidationError};
use std::fs;
use tempfile::TempDir;

fn service() -> (TempDir, RosterService) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let svc = RosterService::new(
        RecordStore::new(dir.path().join("students.json")),
        CredentialStore::new(dir.path().join("users.json")),
    );
    (dir, svc)
}

#[test]
fn add_then_list_contains_exactly_one_record() {
    let (_dir, svc) = service();
    svc.add_record("123456789012", "Budi", "TI1", "3.2", "Teknik Informatika")
        .unwrap();

    let records = svc.list_records().unwrap();
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.id, "123456789012");
    assert_eq!(r.name, "Budi");
    assert_eq!(r.section, "TI1");
    assert_eq!(r.gpa, 3.2);
    assert_eq!(r.department, Department::InformaticsEngineering);
}

#[test]
fn duplicate_id_is_rejected_without_writing() {
    let (_dir, svc) = service();
    svc.add_record("123456789012", "Budi", "TI1", "3.2", "Hukum").unwrap();

    let err = svc
        .add_record("123456789012", "Other", "X9", "1.0", "PGSD")
        .unwrap_err();
    assert!(matches!(err, RosterError::DuplicateId(ref id) if id == "123456789012"));

    let records = svc.list_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Budi");
}

#[test]
fn invalid_add_leaves_store_untouched() {
    let (_dir, svc) = service();
    let err = svc
        .add_record("123456789012", "Budi", "TI1", "4.5", "Hukum")
        .unwrap_err();
    assert!(matches!(err, RosterError::Validation(ValidationError::Gpa)));
    assert!(!svc.records().path().exists());
}

#[test]
fn edit_updates_fields_but_not_id() {
    let (_dir, svc) = service();
    svc.add_record("111111111111", "Budi", "TI1", "3.2", "Hukum").unwrap();
    svc.add_record("222222222222", "Ani", "TI2", "3.9", "PJOK").unwrap();

    let updated = svc
        .edit_record("111111111111", "Budi Utomo", "MN3", "2.8", "Manajemen")
        .unwrap();
    assert_eq!(updated.id, "111111111111");

    let records = svc.list_records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "111111111111");
    assert_eq!(records[0].name, "Budi Utomo");
    assert_eq!(records[0].section, "MN3");
    assert_eq!(records[0].gpa, 2.8);
    assert_eq!(records[0].department, Department::Management);
    assert_eq!(records[1].name, "Ani");
}

#[test]
fn edit_missing_id_is_not_found_and_unmodified() {
    let (_dir, svc) = service();
    svc.add_record("111111111111", "Budi", "TI1", "3.2", "Hukum").unwrap();
    let before = fs::read_to_string(svc.records().path()).unwrap();

    let err = svc
        .edit_record("999999999999", "Nobody", "X1", "1", "Hukum")
        .unwrap_err();
    assert!(matches!(err, RosterError::NotFound(ref id) if id == "999999999999"));
    assert_eq!(fs::read_to_string(svc.records().path()).unwrap(), before);
}

#[test]
fn edit_validates_new_values() {
    let (_dir, svc) = service();
    svc.add_record("111111111111", "Budi", "TI1", "3.2", "Hukum").unwrap();
    let err = svc
        .edit_record("111111111111", "Budi", "TI1", "3.2", "Farmasi")
        .unwrap_err();
    assert!(matches!(err, RosterError::Validation(ValidationError::Department)));
    assert_eq!(svc.get_record("111111111111").unwrap().department, Department::Law);
}

#[test]
fn get_record_finds_by_id() {
    let (_dir, svc) = service();
    svc.add_record("111111111111", "Budi", "TI1", "3.2", "Hukum").unwrap();
    assert_eq!(svc.get_record("111111111111").unwrap().name, "Budi");
    assert!(matches!(
        svc.get_record("000000000000"),
        Err(RosterError::NotFound(_))
    ));
}

#[test]
fn delete_removes_exactly_that_record() {
    let (_dir, svc) = service();
    svc.add_record("111111111111", "Budi", "TI1", "3.2", "Hukum").unwrap();
    svc.add_record("222222222222", "Ani", "TI2", "3.9", "PJOK").unwrap();

    assert!(svc.delete_record("111111111111").unwrap());
    let ids: Vec<_> = svc.list_records().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["222222222222".to_string()]);
}

#[test]
fn delete_missing_id_is_a_noop() {
    let (_dir, svc) = service();
    svc.add_record("111111111111", "Budi", "TI1", "3.2", "Hukum").unwrap();

    assert!(!svc.delete_record("999999999999").unwrap());
    assert_eq!(svc.list_records().unwrap().len(), 1);
}

#[test]
fn dashboard_on_empty_store() {
    let (_dir, svc) = service();
    let stats = svc.dashboard_stats().unwrap();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.average_gpa, 0.0);
    assert_eq!(stats.per_department.len(), Department::ALL.len());
    assert!(stats.per_department.values().all(|&n| n == 0));
}

#[test]
fn dashboard_averages_and_counts() {
    let (_dir, svc) = service();
    svc.add_record("111111111111", "Budi", "TI1", "3.0", "Hukum").unwrap();
    svc.add_record("222222222222", "Ani", "TI2", "4.0", "Hukum").unwrap();

    let stats = svc.dashboard_stats().unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.average_gpa, 3.5);
    assert_eq!(stats.count_for(Department::Law), 2);
    assert_eq!(stats.count_for(Department::PhysicalEducation), 0);
}

#[test]
fn dashboard_rounds_average_to_two_decimals() {
    let (_dir, svc) = service();
    svc.add_record("111111111111", "A", "S1", "3", "PGSD").unwrap();
    svc.add_record("222222222222", "B", "S1", "3", "PGSD").unwrap();
    svc.add_record("333333333333", "C", "S1", "4", "PGSD").unwrap();
    assert_eq!(svc.dashboard_stats().unwrap().average_gpa, 3.33);
}

#[test]
fn dashboard_rounds_exact_halves_to_even() {
    let (_dir, svc) = service();
    svc.add_record("111111111111", "A", "S1", "3.25", "PGSD").unwrap();
    svc.add_record("222222222222", "B", "S1", "3", "PGSD").unwrap();
    assert_eq!(svc.dashboard_stats().unwrap().average_gpa, 3.12);
}

#[test]
fn dashboard_serializes_departments_by_name() {
    let (_dir, svc) = service();
    svc.add_record("111111111111", "A", "S1", "3", "Ilmu Komunikasi").unwrap();
    let json = serde_json::to_value(svc.dashboard_stats().unwrap()).unwrap();
    assert_eq!(json["per_department"]["Ilmu Komunikasi"], 1);
    assert_eq!(json["per_department"]["Teknik Informatika"], 0);
}

#[test]
fn corrupt_records_file_surfaces_storage_error() {
    let (_dir, svc) = service();
    fs::write(svc.records().path(), "not json").unwrap();
    assert!(matches!(svc.list_records(), Err(RosterError::Storage(_))));
    assert!(matches!(
        svc.add_record("111111111111", "A", "S1", "3", "PGSD"),
        Err(RosterError::Storage(_))
    ));
    assert_eq!(fs::read_to_string(svc.records().path()).unwrap(), "not json");
}

#[test]
fn bootstrap_admin_can_log_in() {
    let (_dir, svc) = service();
    svc.bootstrap("12345").unwrap();
    assert!(svc.authenticate("admin", "12345").unwrap());
    assert!(!svc.authenticate("admin", "123456").unwrap());
    assert!(svc.records().path().exists());
}

#[test]
fn register_then_authenticate() {
    let (_dir, svc) = service();
    svc.register("dina", "rahasia").unwrap();
    assert!(svc.authenticate("dina", "rahasia").unwrap());
    assert!(!svc.authenticate("dina", "rahasia1").unwrap());
    assert!(!svc.authenticate("dinah", "rahasia").unwrap());
}

#[test]
fn register_rejects_existing_username() {
    let (_dir, svc) = service();
    svc.register("dina", "one").unwrap();
    let err = svc.register("dina", "two").unwrap_err();
    assert!(matches!(err, RosterError::AlreadyExists(ref u) if u == "dina"));
    assert!(svc.authenticate("dina", "one").unwrap());
}

#[test]
fn register_rejects_empty_fields() {
    let (_dir, svc) = service();
    assert!(matches!(
        svc.register("", "pw"),
        Err(RosterError::Validation(ValidationError::EmptyCredentials))
    ));
    assert!(matches!(
        svc.register("dina", ""),
        Err(RosterError::Validation(ValidationError::EmptyCredentials))
    ));
}

#[test]
fn stored_credentials_never_contain_raw_password() {
    let (_dir, svc) = service();
    svc.register("dina", "plaintext-secret").unwrap();
    let raw = fs::read_to_string(svc.credentials().path()).unwrap();
    assert!(!raw.contains("plaintext-secret"));
}
