//! Drive the demo binary end to end: pipe scripts through it and check
//! stdout, stderr and exit status.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Path to the binary cargo built for this test run.
fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cmdscript"))
}

/// Write `source` to a temp file and run the binary on it with `args`.
fn run_script(source: &str, args: &[&str]) -> Output {
    let mut file = tempfile::NamedTempFile::new().expect("create temp script");
    file.write_all(source.as_bytes()).expect("write temp script");
    binary()
        .arg(file.path())
        .args(args)
        .output()
        .expect("spawn cmdscript")
}

fn demos_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn built_in_demo_script_runs_by_default() {
    let output = binary().output().expect("spawn cmdscript");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "cmdscript demo\n\
         Ada is 36 years old\n\
         total: 42\n\
         6.5 * 4 = 26\n\
         strict: on\n"
    );
}

#[test]
fn script_file_argument_is_compiled_and_run() {
    let output = run_script("Say \"from a file\"\n", &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "from a file\n");
}

#[test]
fn check_mode_compiles_without_running() {
    let output = run_script("Say \"quiet\"\nTally 1\n", &["--check"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().ends_with("2 instruction(s)"), "{stdout}");
    assert!(!stdout.contains("quiet"));
}

#[test]
fn runs_flag_replays_the_program() {
    let output = run_script("Say \"again\"\n", &["--runs", "3"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "again\nagain\nagain\n"
    );
}

#[test]
fn compile_error_prints_line_and_exits_nonzero() {
    let output = run_script("Say \"ok\"\nNope 1\n", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "{stderr}");
    assert!(stderr.contains("unknown function `Nope`"), "{stderr}");
    // Fail-fast: nothing from line 1 ran.
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_script_file_exits_nonzero() {
    let output = binary()
        .arg("no/such/script.cmds")
        .output()
        .expect("spawn cmdscript");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no/such/script.cmds"));
}

#[test]
fn tour_demo_compiles_clean() {
    let output = binary()
        .arg(demos_dir().join("tour.cmds"))
        .arg("--check")
        .output()
        .expect("spawn cmdscript");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("instruction(s)"));
}

#[test]
fn broken_demo_reports_its_bad_line() {
    let output = binary()
        .arg(demos_dir().join("broken.cmds"))
        .output()
        .expect("spawn cmdscript");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}
