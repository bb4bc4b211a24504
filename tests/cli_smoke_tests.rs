mod common;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const BIN_NAME: &str = "roster_core_cli";

fn script_command(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("ROSTER_CORE_CLI_SCRIPT", "1")
        .env("ROSTER_CORE_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn first_run_shows_seed_table() {
    let home = common::temp_dir();
    script_command(&home)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(contains("Список студентов"))
        .stdout(contains("Иванов Иван Иванович"))
        .stdout(contains("Петров Пётр Петрович"));

    assert!(home.join("config").join("config.json").exists());
}

#[test]
fn adding_a_student_persists_across_runs() {
    let home = common::temp_dir();
    script_command(&home)
        .write_stdin("form\nadd Сидоров Алексей Павлович 2003-03-14 2021 ИСиП\nexit\n")
        .assert()
        .success()
        .stdout(contains("[ok] Added Сидоров Алексей Павлович."));

    assert!(home.join("data").join("students.json").exists());

    script_command(&home)
        .write_stdin("status\nexit\n")
        .assert()
        .success()
        .stdout(contains("Students: 3"))
        .stdout(contains("Сидоров Алексей Павлович"));
}

#[test]
fn invalid_submit_reports_fields() {
    let home = common::temp_dir();
    script_command(&home)
        .write_stdin("form\nadd Сидоров \"\" Павлович 1900-01-01 2021 ИСиП\nstatus\nexit\n")
        .assert()
        .success()
        .stdout(contains("Please correct: Имя, Дата рождения"))
        .stdout(contains("View: form"))
        .stdout(contains("Students: 2"));
}

#[test]
fn help_and_version_commands() {
    let home = common::temp_dir();
    script_command(&home)
        .write_stdin("help\nversion\nexit\n")
        .assert()
        .success()
        .stdout(contains("Available commands").and(contains("roster_core ")));
}
