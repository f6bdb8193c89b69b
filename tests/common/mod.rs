#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn holidays_cmd() -> Command {
    let mut cmd = Command::cargo_bin("holidays").unwrap();
    cmd.env_remove("HOLIDAYS_ROOT");
    cmd.env_remove("HOLIDAYS_LOG");
    cmd
}

/// Add a holiday in `dir` and return the generated key
pub fn add_holiday(dir: &Path, date: &str, descr: &str) -> String {
    let output = holidays_cmd()
        .current_dir(dir)
        .args(["add", "--date", date, "--descr", descr])
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .strip_prefix("Added ")
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or_else(|| panic!("unexpected add output: {}", stdout))
        .to_string()
}

/// Parsed contents of the default slot
pub fn read_slot(dir: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(dir.join(".holidays/holidays.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}
