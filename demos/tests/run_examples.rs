use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Command;

fn is_numbered_rs(entry: &fs::DirEntry) -> bool {
    let path = entry.path();
    path.is_file()
        && path.extension() == Some(OsStr::new("rs"))
        && path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|n| n.chars().next().is_some_and(|c| c.is_ascii_digit()))
}

#[test]
fn run_all_examples_with_mock() {
    let out_dir = std::env::temp_dir().join("macropanel-demos");
    let examples_dir = Path::new("examples");
    let entries = fs::read_dir(examples_dir).expect("read examples dir");
    let mut found_any = false;
    for entry in entries.flatten().filter(is_numbered_rs) {
        let path = entry.path();
        let name_owned = path
            .file_stem()
            .and_then(OsStr::to_str)
            .expect("example name")
            .to_string();
        found_any = true;
        let mut cmd = Command::new("cargo");
        cmd.arg("run").arg("--example").arg(&name_owned);
        cmd.env("MACROPANEL_OUT_DIR", &out_dir);
        cmd.assert().success();
    }
    assert!(found_any, "no examples found to run");
}

#[test]
fn etl_writes_both_tables() {
    let out_dir = std::env::temp_dir().join("macropanel-demos-etl");
    let _ = fs::remove_dir_all(&out_dir);

    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--example", "00_etl"]);
    cmd.env("MACROPANEL_OUT_DIR", &out_dir);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("macro panel: 5476 rows"))
        .stdout(predicate::str::contains("market panel: 5476 rows"));

    let macro_csv = fs::read_to_string(out_dir.join("macro_data.csv")).expect("macro csv");
    assert!(macro_csv.starts_with("Date,GDP,Real_GDP,Real_Potential_GDP,CPI,"));
    let market_csv = fs::read_to_string(out_dir.join("market_data.csv")).expect("market csv");
    assert!(market_csv.starts_with("Date,EUR_USD,"));
    assert!(market_csv.lines().next().is_some_and(|h| h.ends_with(",Copper_Gold_Ratio")));
}

#[test]
fn fault_isolation_reports_each_pipeline() {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--example", "02_fault_isolation"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("macro: ok"))
        .stdout(predicate::str::contains("market: market source unavailable"));
}
