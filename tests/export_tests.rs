use predicates::str::contains;
use std::fs;

mod common;
use common::{clocked_day, init_dir, setup_test_dir, tc, temp_out};

#[test]
fn test_export_csv_writes_task_rows() {
    let dir = setup_test_dir("export_csv");
    let out = temp_out("export_csv", "csv");
    init_dir(&dir);
    clocked_day(&dir, "Wrote onboarding doc");

    tc().args(["--dir", &dir, "--test", "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("client,log,clock_in,clock_out,task_start,task_end,description,duration,seconds"));
    assert!(content.contains("Wrote onboarding doc"));
    assert!(content.contains("00:30:00"));
}

#[test]
fn test_export_json_writes_task_rows() {
    let dir = setup_test_dir("export_json");
    let out = temp_out("export_json", "json");
    init_dir(&dir);
    clocked_day(&dir, "Reviewed contract");

    tc().args(["--dir", &dir, "--test", "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"description\": \"Reviewed contract\""));
    assert!(content.contains("\"seconds\": 1800"));
}

#[test]
fn test_export_with_no_tasks_writes_nothing() {
    let dir = setup_test_dir("export_empty");
    let out = temp_out("export_empty", "csv");
    init_dir(&dir);

    tc().args(["--dir", &dir, "--test", "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let dir = setup_test_dir("export_relative");
    init_dir(&dir);
    clocked_day(&dir, "Some work");

    tc().args(["--dir", &dir, "--test", "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let dir = setup_test_dir("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    init_dir(&dir);
    clocked_day(&dir, "Some work");

    fs::write(&out, "already here").unwrap();
    tc().args(["--dir", &dir, "--test", "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    tc().args(["--dir", &dir, "--test", "export", "--file", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_backup_archives_book_and_logs() {
    let dir = setup_test_dir("backup");
    let out = temp_out("backup", "zip");
    init_dir(&dir);
    clocked_day(&dir, "Backed up work");

    tc().args(["--dir", &dir, "--test", "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let meta = fs::metadata(&out).unwrap();
    assert!(meta.len() > 0);
}
