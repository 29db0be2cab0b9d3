use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_db(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tasks-{nanos}-{file_name}"))
}

fn run(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tasks"))
        .args(args)
        .env("TASKS_DB_PATH", db)
        .output()
        .expect("failed to run tasks binary")
}

#[test]
fn done_rejects_out_of_range_position() {
    let db = temp_db("cli-done-range.db");
    assert!(run(&db, &["add", "buy milk"]).status.success());

    let output = run(&db, &["done", "2"]);
    std::fs::remove_file(&db).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid ID"));
}

#[test]
fn done_rejects_zero_position() {
    let db = temp_db("cli-done-zero.db");
    assert!(run(&db, &["add", "buy milk"]).status.success());

    let output = run(&db, &["done", "0"]);
    std::fs::remove_file(&db).ok();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid ID"));
}

#[test]
fn done_task_keeps_position_out_of_incomplete_listing() {
    let db = temp_db("cli-done-twice.db");
    assert!(run(&db, &["add", "buy milk"]).status.success());
    assert!(run(&db, &["done", "1"]).status.success());

    // the incomplete listing is empty now, so position 1 no longer resolves
    let output = run(&db, &["done", "1"]);
    std::fs::remove_file(&db).ok();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid ID"));
}

#[test]
fn delete_removes_task_for_good() {
    let db = temp_db("cli-delete.db");
    assert!(run(&db, &["add", "buy milk"]).status.success());

    let delete = run(&db, &["delete", "1"]);
    let list = run(&db, &["list"]);
    let completed = run(&db, &["completed"]);
    let export = run(&db, &["export"]);
    std::fs::remove_file(&db).ok();

    assert!(delete.status.success());
    assert!(String::from_utf8_lossy(&delete.stdout).contains("Deleted: buy milk"));
    assert_eq!(String::from_utf8_lossy(&list.stdout), "");
    assert_eq!(String::from_utf8_lossy(&completed.stdout), "");
    assert_eq!(String::from_utf8_lossy(&export.stdout).trim(), "[]");
}

#[test]
fn delete_rejects_invalid_position() {
    let db = temp_db("cli-delete-invalid.db");
    let output = run(&db, &["delete", "1"]);
    std::fs::remove_file(&db).ok();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid ID"));
}
