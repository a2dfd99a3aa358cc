//! Integration tests for the tag-corpus CLI
//!
//! These cover everything that fails before a Python toolkit is started, so
//! they run without spaCy or stanza installed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tag_corpus() -> Command {
    let mut cmd = Command::cargo_bin("tag-corpus").unwrap();
    cmd.env_remove("TAG_CORPUS_PYTHON").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    tag_corpus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("spaCy or stanza"))
        .stdout(predicate::str::contains("--input_item"))
        .stdout(predicate::str::contains("--formatter_sep"))
        .stdout(predicate::str::contains("--n_process"));
}

#[test]
fn test_missing_positionals() {
    tag_corpus()
        .assert()
        .failure()
        .stderr(predicate::str::contains("MODEL_OR_LANG"));
}

#[test]
fn test_no_input_given() {
    tag_corpus()
        .args(["en_core_web_sm", "spacy"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "'input_str' or 'input_item' must be given",
        ));
}

#[test]
fn test_stanza_rejects_multiple_processes() {
    tag_corpus()
        .args(["en", "stanza", "-j", "4", "-b", "Hello world."])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not supported by stanza"));
}

#[test]
fn test_stanza_rejects_all_cores() {
    tag_corpus()
        .args(["en", "stanza", "--n_process", "-1", "-b", "Hello world."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported by stanza"));
}

#[test]
fn test_unknown_vendor() {
    tag_corpus()
        .args(["en", "udpipe", "-b", "Hello world."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("udpipe"));
}

#[test]
fn test_unknown_formatter_attribute() {
    tag_corpus()
        .args(["en_core_web_sm", "spacy", "--formatter", "ner", "-b", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ner"));
}

#[test]
fn test_zero_processes() {
    tag_corpus()
        .args(["en_core_web_sm", "spacy", "-j", "0", "-b", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_input_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    tag_corpus()
        .args(["en_core_web_sm", "spacy", "-f"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input not found"));
}

#[test]
fn test_unknown_input_encoding() {
    tag_corpus()
        .args(["en_core_web_sm", "spacy", "-b", "x", "-a", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown encoding: klingon"));
}

#[test]
fn test_directory_input_with_file_output() {
    let temp_dir = TempDir::new().unwrap();
    let corpus = temp_dir.path().join("corpus");
    fs::create_dir(&corpus).unwrap();
    fs::write(corpus.join("a.txt"), "Hello.\n").unwrap();
    let out_file = temp_dir.path().join("out.txt");
    fs::write(&out_file, "").unwrap();

    tag_corpus()
        .args(["en_core_web_sm", "spacy", "-f"])
        .arg(&corpus)
        .arg("-o")
        .arg(&out_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("tag-corpus.toml");
    fs::write(&config, "[defaults]\nformater = [\"text\"]\n").unwrap();

    tag_corpus()
        .args(["en_core_web_sm", "spacy", "-b", "x", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_config_file_process_count_is_validated() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("tag-corpus.toml");
    fs::write(&config, "[defaults]\nn_process = 2\n").unwrap();

    tag_corpus()
        .args(["nl", "stanza", "-b", "x", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported by stanza"));
}
