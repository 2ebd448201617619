//! Integration tests for the fsreport binary


use assert_cmd::Command;
use harness::{TestDir, run_fsreport};
use predicates::prelude::*;

#[test]
fn test_basic_report_output() {
    let dir = TestDir::new();
    dir.add_file("main.rs", 120);
    dir.add_file("docs/guide.md", 40);

    let (stdout, _stderr, success) = run_fsreport(dir.path(), &["--color", "never"]);
    assert!(success, "fsreport should succeed");
    assert!(stdout.contains("main.rs"), "should show main.rs");
    assert!(stdout.contains("docs"), "should show docs");
    assert!(stdout.contains("guide.md"), "should show guide.md");
    assert!(stdout.contains("2 directories, 2 files"), "{}", stdout);
    assert!(stdout.contains("Largest files"));
}

#[test]
fn test_depth_limit() {
    let dir = TestDir::new();
    dir.add_file("top.rs", 1);
    dir.add_file("level1/mid.rs", 1);
    dir.add_file("level1/level2/deep.rs", 1);

    let (stdout, _stderr, success) = run_fsreport(dir.path(), &["-L", "1", "--color", "never"]);
    assert!(success);
    assert!(stdout.contains("top.rs"), "should show top level");
    assert!(stdout.contains("mid.rs"), "should show first level files");
    assert!(
        !stdout.contains("level2"),
        "should not list the level2 directory: {}",
        stdout
    );
    assert!(!stdout.contains("deep.rs"), "should not show deep files: {}", stdout);
}

#[test]
fn test_json_output() {
    let dir = TestDir::new();
    dir.add_file("a.txt", 100);
    dir.add_file("b.txt", 50);

    let (stdout, _stderr, success) = run_fsreport(dir.path(), &["--json"]);
    assert!(success);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["hierarchy"]["size"], 150);
    assert_eq!(json["hierarchy"]["is_dir"], true);
    assert_eq!(json["extension_stats"][0]["name"], "txt");
    assert_eq!(json["extension_stats"][0]["count"], 2);
    assert_eq!(json["top_files"][0]["size"], 50);
    assert_eq!(json["top_files"][1]["size"], 100);
}

#[test]
fn test_skip_metadata_drops_extras_from_json() {
    let dir = TestDir::new();
    dir.add_file("a.txt", 1);

    let (with, _, _) = run_fsreport(dir.path(), &["--json"]);
    assert!(with.contains("accessed_at"));

    let (without, _, success) = run_fsreport(dir.path(), &["--json", "--skip-metadata"]);
    assert!(success);
    assert!(!without.contains("accessed_at"), "{}", without);
}

#[test]
fn test_top_option_limits_largest_files() {
    let dir = TestDir::new();
    for len in 1..=5 {
        dir.add_file(&format!("f{}.bin", len), len);
    }

    let (stdout, _stderr, success) = run_fsreport(dir.path(), &["--json", "-n", "2"]);
    assert!(success);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let top = json["top_files"].as_array().unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["size"], 4);
    assert_eq!(top[1]["size"], 5);
}

#[test]
fn test_no_tree_prints_statistics_only() {
    let dir = TestDir::new();
    dir.add_file("sub/inner.txt", 3);

    let (stdout, _stderr, success) = run_fsreport(dir.path(), &["--no-tree", "--color", "never"]);
    assert!(success);
    assert!(!stdout.contains("└──"), "{}", stdout);
    assert!(stdout.contains("Extensions by size"));
}

#[test]
fn test_path_argument() {
    let dir = TestDir::new();
    dir.add_file("project/readme.md", 10);

    Command::cargo_bin("fsreport")
        .unwrap()
        .arg(dir.path().join("project"))
        .args(["--color", "never", "--no-dates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("readme.md  10B"));
}

#[test]
fn test_missing_directory_fails() {
    let dir = TestDir::new();

    Command::cargo_bin("fsreport")
        .unwrap()
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no such directory"));
}

#[test]
fn test_file_as_root_fails() {
    let dir = TestDir::new();
    let file = dir.add_file("plain.txt", 1);

    Command::cargo_bin("fsreport")
        .unwrap()
        .arg(file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("fsreport:"));
}
