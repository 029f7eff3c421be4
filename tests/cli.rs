use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command as StdCommand, Stdio};
use tempfile::tempdir;

const PUNCTUATION: &str = "。，、；：？！（）【】『』《》…—‘’“”";

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn cjkscan() -> Command {
    Command::cargo_bin("cjkscan").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn quiet_output_is_sorted_and_wrapped() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.c"), "label = \"中文字\";");
    write_file(&temp.path().join("sub/b.c"), "label = \"字体\";");

    let stdout = stdout_of(
        cjkscan()
            .arg(temp.path())
            .args(["--no-punctuation", "-q", "-l", "2"]),
    );

    assert_eq!(stdout, "中体\n字文\n");
}

#[test]
fn ascii_never_appears_in_output() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("main.c"), "ABC 中 xyz 123");

    let stdout = stdout_of(cjkscan().arg(temp.path()).args(["--np", "-q"]));

    assert_eq!(stdout, "中\n");
}

#[test]
fn two_letter_np_flag_suppresses_punctuation() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("main.c"), "puts(\"中\");");

    let stdout = stdout_of(cjkscan().arg(temp.path()).args(["-np", "-q"]));

    assert_eq!(stdout, "中\n");
}

#[cfg(unix)]
#[test]
fn dangling_symlink_warns_and_continues() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.c"), "中");
    std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("dangling.c")).unwrap();

    cjkscan()
        .arg(temp.path())
        .args(["--np", "-q"])
        .assert()
        .success()
        .stdout("中\n")
        .stderr(predicate::str::contains("dangling.c"));
}

#[test]
fn closed_stdout_does_not_abort() {
    let temp = tempdir().unwrap();
    for i in 0..200 {
        write_file(&temp.path().join(format!("f{}.c", i)), "中文");
    }

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("cjkscan"))
        .arg(temp.path())
        .arg("-v")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    let status = child.wait().unwrap();
    assert!(status.success(), "exited with {:?}", status);
}

#[test]
fn non_matching_extensions_contribute_nothing() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("notes.txt"), "中文");
    write_file(&temp.path().join("main.C"), "字");

    let stdout = stdout_of(
        cjkscan()
            .arg(temp.path())
            .args(["-n", "-q", "-e", ".c"]),
    );

    assert_eq!(stdout, "字\n");
}

#[test]
fn punctuation_added_by_default() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("main.c"), "int main(void) { return 0; }");

    let stdout = stdout_of(cjkscan().arg(temp.path()).arg("-q"));

    for mark in PUNCTUATION.chars() {
        assert!(stdout.contains(mark), "Missing punctuation {}", mark);
    }
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn missing_directory_warns_and_continues() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("missing");
    let present = temp.path().join("present");
    write_file(&present.join("gui.c"), "中");

    cjkscan()
        .arg(&missing)
        .arg(&present)
        .assert()
        .success()
        .stderr(predicate::str::contains(missing.display().to_string()))
        .stdout(predicate::str::contains("中"));
}

#[test]
fn empty_result_reports_nothing_found() {
    let temp = tempdir().unwrap();

    cjkscan()
        .arg(temp.path().join("nowhere"))
        .arg("--no-punctuation")
        .assert()
        .success()
        .stdout(predicate::str::contains("No Chinese characters found."));

    cjkscan()
        .arg(temp.path().join("nowhere"))
        .args(["--no-punctuation", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn runs_are_identical() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.c"), "甲乙丙丁戊己庚辛壬癸");
    write_file(&temp.path().join("b/c.c"), "子丑寅卯");

    let first = stdout_of(cjkscan().arg(temp.path()).args(["-q", "-l", "3"]));
    let second = stdout_of(cjkscan().arg(temp.path()).args(["-q", "-l", "3"]));

    assert_eq!(first, second);
    let joined: String = first.lines().collect();
    let chars: Vec<char> = joined.chars().collect();
    assert!(chars.windows(2).all(|w| w[0] < w[1]));
    assert!(first.lines().rev().skip(1).all(|l| l.chars().count() == 3));
}

#[test]
fn json_output_contains_report() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.c"), "字中");

    let stdout = stdout_of(
        cjkscan()
            .arg(temp.path())
            .args(["--np", "-q", "--output-format", "json"]),
    );

    let report: Value = serde_json::from_str(stdout.trim()).expect("valid json report");
    assert_eq!(report["count"], 2);
    assert_eq!(report["characters"], "中字");
    assert_eq!(report["files_scanned"], 1);
}

#[test]
fn config_file_settings_are_used() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("src");
    write_file(&src.join("a.h"), "一二三");
    let config = temp.path().join("scan.toml");
    write_file(
        &config,
        &format!(
            "[scan]\ndirectories = [{:?}]\nextensions = [\".h\"]\n\n[output]\ninclude_punctuation = false\nline_length = 1\n",
            src.display().to_string()
        ),
    );

    let stdout = stdout_of(cjkscan().arg("--config").arg(&config).arg("-q"));

    assert_eq!(stdout, "一\n三\n二\n");
}

#[test]
fn invalid_config_file_fails() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("broken.toml");
    write_file(&config, "[output]\nline_length = \"wide\"\n");

    cjkscan()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn zero_line_length_is_rejected() {
    cjkscan().args(["-l", "0"]).assert().failure();
}

#[test]
fn generate_config_writes_sample() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("cjkscan.toml");

    cjkscan()
        .arg("--generate-config")
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("line_length = 50"));
}
