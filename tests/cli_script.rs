mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn script(base: &std::path::Path, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("dream_calc_cli")
        .unwrap()
        .env("DREAM_CALC_CLI_SCRIPT", "1")
        .env("DREAM_CALC_HOME", base)
        .env_remove("RUST_LOG")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn script_mode_runs_basic_flow() {
    let base = common::temp_base();
    script(
        &base,
        "income 60000\nadd Rent 20000 month\ngoal Japan 200000\nshow\nexit\n",
    )
    .success()
    .stdout(contains("income saved"))
    .stdout(contains("category added"))
    .stdout(contains("goal saved"))
    .stdout(contains("5 months"));

    let json = std::fs::read_to_string(base.join("dream_calc.json")).unwrap();
    assert!(json.contains("\"Rent\""));
}

#[test]
fn invalid_input_reports_field_error() {
    let base = common::temp_base();
    script(&base, "add Food 0\n")
        .success()
        .stdout(contains("amount must be greater than zero"))
        .stdout(contains("category added").not());
    assert!(!base.join("dream_calc.json").exists());
}

#[test]
fn unknown_command_suggests_closest() {
    let base = common::temp_base();
    script(&base, "shwo\n")
        .success()
        .stdout(contains("Unknown command `shwo`"))
        .stdout(contains("Suggestion: `show`?"));
}

#[test]
fn language_switch_changes_durations() {
    let base = common::temp_base();
    script(
        &base,
        "language ru\nincome 10000\ngoal Car 120000\nshow\n",
    )
    .success()
    .stdout(contains("1 год"));

    let config = std::fs::read_to_string(base.join("config.json")).unwrap();
    assert!(config.contains("\"ru\""));
}

#[test]
fn theme_toggle_is_persisted() {
    let base = common::temp_base();
    script(&base, "theme toggle\ntheme\n")
        .success()
        .stdout(contains("theme set to dark"))
        .stdout(contains("Theme: dark"));
}

#[test]
fn state_carries_over_between_runs() {
    let base = common::temp_base();
    script(&base, "add Coffee 150 day\n").success();
    script(&base, "list\nfeedback\n")
        .success()
        .stdout(contains("Coffee"))
        .stdout(contains("per day"));
}

#[test]
fn corrupt_snapshot_loads_silently() {
    let base = common::temp_base();
    std::fs::write(
        base.join("dream_calc.json"),
        r#"{"income":"lots","categories":[]}"#,
    )
    .unwrap();

    script(&base, "exit\n")
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn remove_with_empty_target_keeps_category() {
    let base = common::temp_base();
    script(&base, "add Rent 100 month\nremove \"\"\nlist\n")
        .success()
        .stdout(contains("category removed").not())
        .stdout(contains("Rent"));
}
