use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("formpoint").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn quote_prints_the_point_budget() {
    let mut cmd = Command::cargo_bin("formpoint").expect("binary exists");
    let assert = cmd
        .args(["quote", "--questions", "5", "--responses", "50", "--reward", "100"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("\"total\": 8900"), "stdout was: {stdout}");
    assert!(stdout.contains("\"fee\": 3900"), "stdout was: {stdout}");
}
