use predicates::str::contains;
use std::fs;

mod common;
use common::{ct, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_entries_csv() {
    let db_path = setup_test_db("export_entries_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_entries_csv", "csv");

    ct().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("Period entries export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("id,start_date,end_date,flow,symptoms,notes,created_at"));
    assert!(content.contains("2025-06-01,2025-06-05,medium"));
    assert!(content.contains("2025-06-29,2025-07-03,heavy"));
}

#[test]
fn test_export_entries_json_round_trips() {
    let db_path = setup_test_db("export_entries_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_entries_json", "json");

    ct().args([
        "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let entries = parsed.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["start_date"], "2025-06-01");
    assert_eq!(entries[0]["flow"], "medium");
    assert_eq!(entries[1]["flow"], "heavy");
}

#[test]
fn test_export_cycle_history() {
    let db_path = setup_test_db("export_history");
    init_db_with_data(&db_path);

    let out = temp_out("export_history", "csv");

    ct().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        "--history",
    ])
    .assert()
    .success()
    .stdout(contains("Cycle history export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("start_date,end_date,length,average_length,is_predicted"));
    // one observed 28-day cycle between the two seeded entries
    assert!(content.contains("2025-06-01,2025-06-29,28,28,false"));
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let db_path = setup_test_db("export_no_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_no_force", "csv");
    fs::write(&out, "occupied").expect("pre-create");

    // answering "n" to the overwrite prompt aborts the export
    ct().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .write_stdin("n\n")
    .assert()
    .failure();

    assert_eq!(fs::read_to_string(&out).expect("read"), "occupied");

    // --force overwrites without asking
    ct().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "-f",
    ])
    .assert()
    .success();

    assert!(fs::read_to_string(&out).expect("read").starts_with("id,"));
}
