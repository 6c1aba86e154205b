use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BLOCK: &str = "\n    fn main() {\n        run();\n    }\n";

fn codetrim() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("codetrim").unwrap();
    cmd.env_remove("CODETRIM_STRATEGY")
        .env_remove("CODETRIM_CHAR")
        .env_remove("CODETRIM_SEPARATOR");
    cmd
}

#[test]
fn trims_stdin_with_default_strategy() {
    codetrim()
        .write_stdin(BLOCK)
        .assert()
        .success()
        .stdout("\nfn main() {\n    run();\n}\n");
}

#[test]
fn strip_edges_drops_surrounding_newlines() {
    codetrim()
        .arg("--strip-edges")
        .write_stdin(BLOCK)
        .assert()
        .success()
        .stdout("fn main() {\n    run();\n}");
}

#[test]
fn every_strategy_is_selectable() {
    for strategy in ["scalar", "single-pass", "vectorized", "buffered"] {
        codetrim()
            .args(["--strategy", strategy, "--strip-edges"])
            .write_stdin(BLOCK)
            .assert()
            .success()
            .stdout("fn main() {\n    run();\n}");
    }
}

#[test]
fn single_pass_leaves_inconsistent_block_alone() {
    codetrim()
        .args(["-s", "single-pass"])
        .write_stdin("  a\nb\n  c\n")
        .assert()
        .success()
        .stdout("  a\nb\n  c");
}

#[test]
fn custom_leading_char_from_env_and_flag() {
    codetrim()
        .env("CODETRIM_CHAR", "\\t")
        .write_stdin("\t\ta\n\tb")
        .assert()
        .success()
        .stdout("\ta\nb");

    codetrim()
        .args(["--char", "-"])
        .write_stdin("--a\n---b")
        .assert()
        .success()
        .stdout("a\n-b");
}

#[test]
fn named_leading_chars_match_help() {
    codetrim()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("\\t / tab / \\s / space"));

    for name in ["\\t", "tab"] {
        codetrim()
            .args(["--char", name])
            .write_stdin("\t\ta\n\tb")
            .assert()
            .success()
            .stdout("\ta\nb");
    }
    for name in ["\\s", "space"] {
        codetrim()
            .args(["-c", name])
            .write_stdin("  a\n   b")
            .assert()
            .success()
            .stdout("a\n b");
    }
}

#[test]
fn rejects_multi_char_leading() {
    codetrim()
        .args(["--char", "ab"])
        .write_stdin("  a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one char"));
}

#[test]
fn rejects_bad_env_strategy() {
    codetrim()
        .env("CODETRIM_STRATEGY", "simd")
        .write_stdin("  a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn reads_input_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("block.txt");
    fs::write(&path, "  x\r\n    y\r\n").unwrap();
    codetrim()
        .args(["--separator", "crlf", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout("x\r\n  y\r\n");
}

#[test]
fn json_output_carries_strategy() {
    let assert = codetrim()
        .args(["--format", "json", "-s", "buffered"])
        .write_stdin("  a\n  b")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(assert.get_output().stdout.as_ref());
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["strategy"], "buffered");
    assert_eq!(v["output"], "a\nb");
    assert_eq!(v["leading"], " ");
}

#[test]
fn compare_reports_divergence() {
    let assert = codetrim()
        .args(["compare", "--format", "json"])
        .write_stdin("   \n  \n")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(assert.get_output().stdout.as_ref());
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["equivalent"], true);
    assert_eq!(v["single_pass_matches"], false);
    assert_eq!(v["results"].as_array().map(|a| a.len()), Some(4));
}

#[test]
fn compare_yaml_and_text_rejection() {
    codetrim()
        .args(["compare", "-f", "yaml"])
        .write_stdin("  a\n  b")
        .assert()
        .success()
        .stdout(predicate::str::contains("equivalent: true"));

    codetrim()
        .arg("compare")
        .write_stdin("  a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("use json|yaml"));
}

#[test]
fn completions_for_bash() {
    codetrim()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("codetrim"));
}
