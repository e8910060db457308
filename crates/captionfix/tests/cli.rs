// ABOUTME: Integration tests for the captionfix CLI binary.
// ABOUTME: Tests folder scanning, dry runs, JSON summaries and invalid roots.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn captionfix_cmd() -> Command {
    Command::cargo_bin("captionfix").unwrap()
}

const DOUBLED: &str = "<html><body><figure><figcaption>Chart A Chart A</figcaption></figure></body></html>";

#[test]
fn fixes_files_and_reports_progress() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("test.html");
    fs::write(&html_path, DOUBLED).unwrap();

    captionfix_cmd()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing file:"))
        .stdout(predicate::str::contains("Found duplicate caption: 'Chart A Chart A'"))
        .stdout(predicate::str::contains("Fixed to: 'Chart A'"))
        .stdout(predicate::str::contains("updated."))
        .stdout(predicate::str::contains("All HTML files processed."));

    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("<figcaption>Chart A</figcaption>"));
}

#[test]
fn dry_run_leaves_files_alone() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("test.htm");
    fs::write(&html_path, DOUBLED).unwrap();

    captionfix_cmd()
        .arg("--dry-run")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("would be updated (dry run)"));

    assert_eq!(fs::read_to_string(&html_path).unwrap(), DOUBLED);
}

#[test]
fn json_summary_is_the_only_stdout() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("a.html"),
        "<figure><figcaption>{x} {x}</figcaption></figure>",
    )
    .unwrap();
    fs::write(temp_dir.path().join("b.html"), "<p>no captions</p>").unwrap();

    let output = captionfix_cmd()
        .arg("--json")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Fixed to: '{x}'"))
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(summary["files_scanned"], 2);
    assert_eq!(summary["files_updated"], 1);
    assert_eq!(summary["captions_repaired"], 1);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("All HTML files processed."));
}

#[test]
fn invalid_root_fails_without_touching_anything() {
    let temp_dir = TempDir::new().unwrap();
    let file_root = temp_dir.path().join("test.html");
    fs::write(&file_root, DOUBLED).unwrap();

    captionfix_cmd()
        .arg(&file_root)
        .assert()
        .failure()
        .stdout(predicate::str::contains("is not a valid folder"));

    assert_eq!(fs::read_to_string(&file_root).unwrap(), DOUBLED);
}

#[test]
fn strict_fails_when_a_file_cannot_be_read() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.html"), [0xff, 0xfe]).unwrap();
    fs::write(temp_dir.path().join("good.html"), DOUBLED).unwrap();

    captionfix_cmd()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error processing file"));

    fs::write(temp_dir.path().join("good.html"), DOUBLED).unwrap();

    captionfix_cmd()
        .arg("--strict")
        .arg(temp_dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Fixed to: 'Chart A'"));
}

#[test]
fn custom_extension() {
    let temp_dir = TempDir::new().unwrap();
    let xhtml = temp_dir.path().join("page.xhtml");
    fs::write(&xhtml, DOUBLED).unwrap();

    captionfix_cmd()
        .args(["--ext", "xhtml"])
        .arg(temp_dir.path())
        .assert()
        .success();

    assert!(fs::read_to_string(&xhtml)
        .unwrap()
        .contains("<figcaption>Chart A</figcaption>"));
}
