use predicates::str::contains;

mod common;
use common::{clocked_day, init_dir, setup_test_dir, tc};

#[test]
fn test_status_shows_open_session_and_tasks() {
    let dir = setup_test_dir("status_open");
    init_dir(&dir);

    tc().args(["--dir", &dir, "--test", "in"]).assert().success();
    tc().args(["--dir", &dir, "--test", "task", "Email triage", "--minutes", "15"])
        .assert()
        .success();

    tc().args(["--dir", &dir, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Clocked in since"))
        .stdout(contains("Email triage"))
        .stdout(contains("Working time:  00:15:00"));
}

#[test]
fn test_status_when_not_clocked_in() {
    let dir = setup_test_dir("status_closed");
    init_dir(&dir);

    tc().args(["--dir", &dir, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Not clocked in"));
}

#[test]
fn test_list_totals_accumulate_over_sessions() {
    let dir = setup_test_dir("list_totals");
    init_dir(&dir);
    clocked_day(&dir, "Morning work");
    clocked_day(&dir, "Afternoon work");

    tc().args(["--dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Total worked:   01:00:00"));
}

#[test]
fn test_list_marks_open_sessions() {
    let dir = setup_test_dir("list_open");
    init_dir(&dir);
    tc().args(["--dir", &dir, "--test", "in"]).assert().success();

    tc().args(["--dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("(open)"));
}

#[test]
fn test_rotate_starts_next_period_and_list_all_covers_both() {
    let dir = setup_test_dir("rotate");
    init_dir(&dir);
    clocked_day(&dir, "Period one work");

    tc().args(["--dir", &dir, "--test", "rotate"])
        .assert()
        .success()
        .stdout(contains("Started log period 2"));

    clocked_day(&dir, "Period two work");

    // current-period listing sees only the new session
    tc().args(["--dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Total worked:   00:30:00"));

    // --all folds both periods together
    tc().args(["--dir", &dir, "--test", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Total worked:   01:00:00"));
}

#[test]
fn test_client_add_and_list() {
    let dir = setup_test_dir("client_roster");
    init_dir(&dir);

    tc().args([
        "--dir", &dir, "--test", "client", "--add", "acme", "--name", "Acme Corp", "--rate", "75",
    ])
    .assert()
    .success()
    .stdout(contains("Client 'acme' added"));

    tc().args(["--dir", &dir, "--test", "client", "--list"])
        .assert()
        .success()
        .stdout(contains("acme"))
        .stdout(contains("Acme Corp"))
        .stdout(contains("75"));

    // the named client gets its own clock
    tc().args(["--dir", &dir, "--test", "in", "acme"])
        .assert()
        .success()
        .stdout(contains("Acme Corp clocked in"));
}

#[test]
fn test_sessions_are_isolated_per_client() {
    let dir = setup_test_dir("per_client");
    init_dir(&dir);
    tc().args([
        "--dir", &dir, "--test", "client", "--add", "acme", "--name", "Acme Corp",
    ])
    .assert()
    .success();

    tc().args(["--dir", &dir, "--test", "in", "acme"]).assert().success();

    // the default client is still clocked out
    tc().args(["--dir", &dir, "--test", "out"])
        .assert()
        .failure()
        .stderr(contains("No open session"));
}
