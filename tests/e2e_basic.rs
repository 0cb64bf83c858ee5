use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn bin() -> Command {
    let path = assert_cmd::cargo::cargo_bin!("clock-calc");
    Command::new(path)
}

#[test]
fn adds_across_midnight() {
    bin()
        .args(["add", "23:30", "01:00"])
        .assert()
        .success()
        .stdout("00:30\n");
}

#[test]
fn subtracts_earlier_time_as_next_day() {
    bin()
        .args(["sub", "1:30", "23:30"])
        .assert()
        .success()
        .stdout("02:00\n");
}

#[test]
fn outputs_json_calculation() {
    let assert = bin()
        .args(["--output", "json", "sub", "23:30", "01:00"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["time1"], "23:30");
    assert_eq!(json["time2"], "01:00");
    assert_eq!(json["operation"], "-");
    assert_eq!(json["result"], "22:30");
}

#[test]
fn rejects_out_of_range_time() {
    bin()
        .args(["add", "25:00", "01:00"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "invalid input: hours 0-23, minutes 0-59",
        ));
}

#[test]
fn rejects_unknown_output_format() {
    bin()
        .args(["--output", "yaml", "add", "01:00", "01:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format: yaml"));
}

#[test]
fn scripted_session_keeps_five_newest() {
    let mut script = String::from("h1 0\nm1 0\nh2 0\nm2 1\n");
    for _ in 0..6 {
        script.push_str("add\nh1 0\n");
    }
    script.push_str("history\n");

    let assert = bin()
        .arg("session")
        .write_stdin(script)
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let history: Vec<&str> = output.lines().filter(|l| l.starts_with('[')).collect();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0], "[6] 00:00 + 00:01 = 00:01");
    assert_eq!(history[4], "[2] 00:00 + 00:01 = 00:01");
}

#[test]
fn session_reports_missing_field_without_recording() {
    bin()
        .arg("session")
        .write_stdin("h1 10\nm1 00\nh2 02\nh1 25\nadd\nhistory\nshow\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("invalid input: hours 0-23, minutes 0-59")
                .and(predicate::str::contains("(no history)"))
                .and(predicate::str::contains("10:00  02:--")),
        );
}

#[test]
fn session_json_history() {
    let assert = bin()
        .args(["--output", "json", "session"])
        .write_stdin("h1 23\nm1 30\nh2 01\nm2 00\nadd\nclear\nhistory\n")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let last = output.lines().last().unwrap();
    let json: Value = serde_json::from_str(last).unwrap();
    assert_eq!(json["history"][0]["id"], 1);
    assert_eq!(json["history"][0]["operation"], "+");
    assert_eq!(json["history"][0]["result"], "00:30");
}
