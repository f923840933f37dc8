use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run(tmp: &TempDir, args: &[&str], stdin: Option<&str>) -> Output {
    let config = tmp.path().join("factlens.yaml");
    if !config.exists() {
        fs::write(&config, "version: '1'\n").expect("write config");
    }

    let mut child = Command::new(env!("CARGO_BIN_EXE_factlens"))
        .args(args)
        .arg("--config")
        .arg(&config)
        .env("FACTLENS_LOG_DIR", tmp.path().join("logs"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn factlens");

    let mut pipe = child.stdin.take().expect("stdin");
    if let Some(text) = stdin {
        pipe.write_all(text.as_bytes()).expect("write stdin");
    }
    drop(pipe);
    child.wait_with_output().expect("wait for factlens")
}

#[test]
fn prints_text_report() {
    let tmp = TempDir::new().unwrap();
    let out = run(&tmp, &["--headline", "Shocking secret cure revealed"], None);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Prediction: [x] FAKE"));
    assert!(stdout.contains("Google Fact Check Explorer"));
}

#[test]
fn json_output_with_model_strategy() {
    let tmp = TempDir::new().unwrap();
    let out = run(
        &tmp,
        &[
            "--headline",
            "Local council approves new budget",
            "--body",
            "Officials confirmed the vote passed 7-2.",
            "--strategy",
            "model",
            "--format",
            "json",
        ],
        None,
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["strategy"], "model");
    assert_eq!(report["verdict"], "REAL");
}

#[test]
fn body_can_come_from_stdin() {
    let tmp = TempDir::new().unwrap();
    let out = run(&tmp, &["--body", "-", "--format", "yaml"], Some("This is banned\n"));
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("verdict: POSSIBLY_FAKE"));
}

#[test]
fn blank_input_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let out = run(&tmp, &["--headline", "   "], None);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Empty input"), "{stderr}");
}
