use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{Sandbox, path_str};

const HISTORY: &str = "2024-03-01,2300,2200\n2024-03-02,500,2200\n2024-04-10,1800,1800\n";

#[test]
fn test_history_lists_newest_first_with_flags() {
    let sb = Sandbox::new();
    sb.write_log(HISTORY);

    let out = sb
        .wb()
        .arg("history")
        .assert()
        .success()
        .stdout(contains("2300 / 2200 ml"))
        .stdout(contains("Goal Not Met"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let first = text.find("2024-04-10").unwrap();
    let last = text.find("2024-03-01").unwrap();
    assert!(first < last);
}

#[test]
fn test_history_range_filter() {
    let sb = Sandbox::new();
    sb.write_log(HISTORY);

    sb.wb()
        .args(["history", "--range", "2024-03"])
        .assert()
        .success()
        .stdout(contains("2024-03-01"))
        .stdout(contains("2024-03-02"))
        .stdout(contains("2024-04-10").not());
}

#[test]
fn test_history_empty() {
    let sb = Sandbox::new();

    sb.wb()
        .arg("history")
        .assert()
        .success()
        .stdout(contains("No history yet"));
}

#[test]
fn test_history_bad_range() {
    let sb = Sandbox::new();
    sb.write_log(HISTORY);

    sb.wb()
        .args(["history", "--range", "2024:2024-03"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_export_csv_all() {
    let sb = Sandbox::new();
    sb.write_log(HISTORY);
    let out = sb.path("export.csv");

    sb.wb()
        .args(["export", "--format", "csv", "--file", &path_str(&out)])
        .assert()
        .success()
        .stdout(contains("3 day(s)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,total_ml,goal_ml,met");
    assert_eq!(lines[1], "2024-03-01,2300,2200,true");
    assert_eq!(lines[2], "2024-03-02,500,2200,false");
    assert_eq!(lines[3], "2024-04-10,1800,1800,true");
}

#[test]
fn test_export_json_range() {
    let sb = Sandbox::new();
    sb.write_log(HISTORY);
    let out = sb.path("export.json");

    sb.wb()
        .args([
            "export",
            "--format",
            "json",
            "--file",
            &path_str(&out),
            "--range",
            "2024-04",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2024-04-10");
    assert_eq!(rows[0]["met"], true);
}

#[test]
fn test_export_refuses_to_overwrite_without_consent() {
    let sb = Sandbox::new();
    sb.write_log(HISTORY);
    let out = sb.path("export.csv");
    fs::write(&out, "keep me").unwrap();

    sb.wb()
        .args(["export", "--file", &path_str(&out)])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    sb.wb()
        .args(["export", "--file", &path_str(&out), "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("date,"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let sb = Sandbox::new();
    sb.write_log(HISTORY);

    let copy = sb.path("backup/water_log.bak");
    sb.wb()
        .args(["backup", "--file", &path_str(&copy)])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(fs::read_to_string(&copy).unwrap(), HISTORY);

    let zipped = sb.path("zipped.txt");
    sb.wb()
        .args(["backup", "--file", &path_str(&zipped), "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(sb.path("zipped.zip").exists());
    assert!(!zipped.exists());
}

#[test]
fn test_theme_is_stored_in_config() {
    let sb = Sandbox::new();

    sb.wb()
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(contains("Theme set to"));
    let cfg = fs::read_to_string(sb.config_path()).expect("config written");
    assert!(cfg.contains("dark_mode: true"));

    sb.wb().args(["theme", "--toggle"]).assert().success();
    let cfg = fs::read_to_string(sb.config_path()).unwrap();
    assert!(cfg.contains("dark_mode: false"));
}

#[test]
fn test_init_creates_config_and_log() {
    let sb = Sandbox::new();

    sb.wb()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Daily log ready"));

    assert!(sb.log.exists());
    let cfg = fs::read_to_string(sb.config_path()).expect("config written");
    assert!(cfg.contains(sb.log_str()));

    sb.wb()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("quick_add_ml: 250"));
}

#[test]
fn test_init_in_test_mode_skips_config() {
    let sb = Sandbox::new();

    sb.wb().args(["--test", "init"]).assert().success();

    assert!(sb.log.exists());
    assert!(!sb.config_path().exists());
}
