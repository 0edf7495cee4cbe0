use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn build_release() {
    let _ = Command::new("cargo")
        .arg("build")
        .arg("--release")
        .status()
        .unwrap();
}

fn run_scanforge(args: &[&str]) -> Output {
    Command::new("./target/release/scanforge")
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

struct CsvFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl CsvFixture {
    fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("weights.csv");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", contents).unwrap();
        Self { _dir: dir, path }
    }

    fn path_str(&self) -> &str {
        self.path.to_str().unwrap()
    }
}

#[test]
fn test_cli_show_prints_all_grids() {
    build_release();
    let output = run_scanforge(&["show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Layout: alphabetical (5x6)"), "{}", stdout);
    assert!(stdout.contains("Layout: frequency (6x6)"));
    assert!(stdout.contains("Layout: qwerty (4x10)"));
    assert!(stdout.contains("Row 5"));
    assert!(stdout.contains("Col 10"));
}

#[test]
fn test_cli_show_markdown_with_filter() {
    build_release();
    let output = run_scanforge(&["show", "--markdown", "--layout", "qwerty"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("### qwerty (4x10)"), "{}", stdout);
    assert!(stdout.contains("| Q | W | E | R | T | Y | U | I | O | P |"));
    assert!(!stdout.contains("alphabetical"));
}

#[test]
fn test_cli_simulate_battery_is_reproducible() {
    build_release();
    let output = run_scanforge(&["simulate"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Hand-checked totals over the five standard utterances at 0.5s steps
    assert!(stdout.contains("Linear (Alphabetical)"), "{}", stdout);
    assert!(stdout.contains("202.00"), "{}", stdout);
    assert!(stdout.contains("Row-Column (Alphabetical)"));
    assert!(stdout.contains("74.50"), "{}", stdout);

    // 78 consultations across the predictive runs, 9 of them shortcuts
    let accuracy = Regex::new(r"Prediction Accuracy: \d+/\d+ \(\d+\.\d{2}%\)").unwrap();
    assert!(accuracy.is_match(&stdout), "{}", stdout);
    assert!(stdout.contains("Prediction Accuracy: 9/78 (11.54%)"), "{}", stdout);
}

#[test]
fn test_cli_simulate_show_grids_flag() {
    build_release();
    let output = run_scanforge(&["simulate", "--show-grids"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Layout: Alphabetical (5x6)"));
    assert!(stdout.contains("Layout: QWERTY (4x10)"));
}

#[test]
fn test_cli_rejects_zero_step_time() {
    build_release();
    let output = run_scanforge(&["simulate", "--step-time", "0"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_rejects_unknown_service() {
    build_release();
    let output = run_scanforge(&["simulate", "--service", "oracle"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_custom_frequency_table() {
    build_release();
    let fixture = CsvFixture::new("symbol,weight\nX,9.0\nY,5.0\nZ,1.0\n");
    let output = run_scanforge(&[
        "show",
        "--markdown",
        "--layout",
        "frequency",
        "--frequencies",
        fixture.path_str(),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Three symbols plus the appended blank, tiled across six columns
    assert!(stdout.contains("| X | Y | Z | _ | X | Y |"), "{}", stdout);
}

#[test]
fn test_cli_rejects_malformed_frequency_csv() {
    build_release();
    let fixture = CsvFixture::new("symbol,weight\nXY,not_a_number\n");
    let output = run_scanforge(&["show", "--frequencies", fixture.path_str()]);
    assert!(!output.status.success());
}
