use std::process::Command;

#[test]
fn test_failing_run_reports_on_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_clsum"))
        .env("CLSUM_CL_DEVICE_IDX", "not a number")
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CLSUM_CL_DEVICE_IDX"), "stderr: {stderr}");
}
