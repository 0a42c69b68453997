use assert_cmd::Command;
use predicates::prelude::*;

fn nextdate() -> Command {
    Command::cargo_bin("nextdate").unwrap()
}

// ============================================================
// Computing occurrences
// ============================================================

#[test]
fn test_daily_rule() {
    nextdate()
        .args(["d 3", "--date", "20240301", "--now", "20240310"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20240310"));
}

#[test]
fn test_weekly_rule() {
    nextdate()
        .args(["w 1,3", "--date", "20240301", "--now", "20240304"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20240306"));
}

#[test]
fn test_monthly_last_day_rule() {
    nextdate()
        .args(["m -1", "--date", "20240115", "--now", "20240201"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20240229"));
}

#[test]
fn test_yearly_rule() {
    nextdate()
        .args(["y", "--date", "20200101", "--now", "20230101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20230101"));
}

#[test]
fn test_json_output() {
    nextdate()
        .args(["d 3", "--date", "20240301", "--now", "20240310", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"next\":\"20240310\""));
}

// ============================================================
// Validation surfaces
// ============================================================

#[test]
fn test_check_valid_rule() {
    nextdate()
        .args(["w 1,5", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_check_rejects_bad_rule() {
    nextdate().args(["w 8", "--check"]).assert().failure();
}

#[test]
fn test_check_accepts_zero_interval_but_compute_fails() {
    // The grammar admits "d 0"; only the computation rejects it.
    nextdate().args(["d 0", "--check"]).assert().success();
    nextdate()
        .args(["d 0", "--date", "20240301", "--now", "20240310"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_parse_shows_structured_rule() {
    nextdate()
        .args(["m -1 2,3", "--parse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"monthly\""));
}

#[test]
fn test_search_date_literal() {
    nextdate()
        .args(["--search-date", "08.03.2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20240308"));
}

#[test]
fn test_search_date_rejects_bad_literal() {
    nextdate()
        .args(["--search-date", "31.02.2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ============================================================
// Errors and exit codes
// ============================================================

#[test]
fn test_invalid_rule_fails() {
    nextdate()
        .args(["q 1", "--date", "20240301"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_invalid_anchor_date_fails() {
    nextdate()
        .args(["d 3", "--date", "2024-03-01", "--now", "20240310"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_no_arguments_is_a_usage_error() {
    nextdate().assert().failure().code(2);
}

#[test]
fn test_missing_anchor_is_a_usage_error() {
    nextdate().args(["d 3"]).assert().failure().code(2);
}
