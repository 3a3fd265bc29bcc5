//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("wordgauge")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn json_output(args: &[&str], stdin: Option<&str>) -> serde_json::Value {
    let mut command = cmd();
    command.args(["-f", "json"]).args(args);
    if let Some(input) = stdin {
        command.write_stdin(input);
    }
    let output = command.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_fixture_path("essay.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Statistics"))
        .stdout(predicate::str::contains("qualifications"));
}

#[test]
fn test_cli_stdin_input() {
    cmd()
        .arg("-")
        .write_stdin("The quick brown fox. The lazy dog sleeps.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch Reading Ease"))
        .stdout(predicate::str::contains("sleeps (6 chars)"));
}

#[test]
fn test_cli_json_format() {
    let json = json_output(&["-"], Some("The quick brown fox. The lazy dog sleeps."));
    assert_eq!(json["word_count"], 8);
    assert_eq!(json["sentence_count"], 2);
    assert_eq!(json["longest_word"], "sleeps");
    assert_eq!(json["top_words"][0]["word"], "the");
}

#[test]
fn test_cli_json_essay() {
    let json = json_output(&[&get_fixture_path("essay.txt")], None);
    assert_eq!(json["word_count"], 75);
    assert_eq!(json["sentence_count"], 9);
    assert_eq!(json["paragraph_count"], 3);
}

#[test]
fn test_cli_html_by_extension() {
    let json = json_output(&[&get_fixture_path("article.html")], None);
    assert_eq!(json["word_count"], 78);
}

#[test]
fn test_cli_html_flag_on_stdin() {
    let html = std::fs::read_to_string(get_fixture_path("article.html")).unwrap();
    let json = json_output(&["--html", "-"], Some(&html));
    assert_eq!(json["word_count"], 78);
}

#[test]
fn test_cli_html_without_flag_counts_markup() {
    let html = std::fs::read_to_string(get_fixture_path("article.html")).unwrap();
    let json = json_output(&["-"], Some(&html));
    assert_ne!(json["word_count"], 78);
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.txt");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("essay.txt"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("Readability"));
}

#[test]
fn test_cli_invalid_file() {
    cmd()
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_cli_empty_content() {
    cmd()
        .arg(get_fixture_path("empty_content.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("main content"));
}

#[test]
fn test_cli_min_text() {
    let json = json_output(&["--min-text", "5", &get_fixture_path("empty_content.html")], None);
    assert_eq!(json["word_count"], 2);
}

#[test]
fn test_cli_nav_heavy() {
    let json = json_output(&[&get_fixture_path("nav_heavy.html")], None);
    assert_eq!(json["word_count"], 21);
}

#[test]
fn test_cli_empty_input() {
    cmd()
        .arg("-")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No words found."))
        .stderr(predicate::str::contains("No words found in input"));
}

#[test]
fn test_cli_top() {
    let json = json_output(&["--top", "1", &get_fixture_path("essay.txt")], None);
    assert_eq!(json["top_words"].as_array().unwrap().len(), 1);
}

#[test]
fn test_cli_mode() {
    let text = "well-known camelCase";
    let json = json_output(&["-"], Some(text));
    assert_eq!(json["word_count"], 2);

    let json = json_output(&["--mode", "letter-runs", "-"], Some(text));
    assert_eq!(json["word_count"], 4);
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "yaml", &get_fixture_path("essay.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_cli_invalid_mode() {
    cmd()
        .args(["--mode", "syllables", &get_fixture_path("essay.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tokenization mode"));
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("essay.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wordgauge"))
        .stderr(predicate::str::contains("Analysis:"));
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("readability"));
}
