use std::process::Command;

#[test]
fn test_help_describes_flags() {
    let bin = env!("CARGO_BIN_EXE_preflight");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("--root") && stdout.contains("--json"),
        "help output should describe the --root and --json flags; got:\n{}",
        stdout
    );
}
