#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn baeum() -> Command {
    Command::cargo_bin("baeum").unwrap()
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_all_drills() {
    baeum()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("romanization"))
        .stdout(predicate::str::contains("vocab"))
        .stdout(predicate::str::contains("race"))
        .stdout(predicate::str::contains("tense"));
}

// ---------------------------------------------------------------------------
// bank
// ---------------------------------------------------------------------------

#[test]
fn bank_romanization_contains_known_word() {
    baeum()
        .args(["bank", "romanization"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chingu"))
        .stdout(predicate::str::contains("친구"))
        .stdout(predicate::str::contains("51 word pairs"));
}

#[test]
fn bank_vocab_lists_choices() {
    baeum()
        .args(["bank", "vocab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Friend"))
        .stdout(predicate::str::contains("49 questions"));
}

#[test]
fn bank_race_defaults_to_easy() {
    baeum()
        .args(["bank", "race"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30 sentences (Easy mode)"));
}

#[test]
fn bank_race_hard_mode() {
    baeum()
        .args(["bank", "race", "--mode", "hard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 sentences (Hard mode)"));
}

#[test]
fn bank_unknown_drill_fails() {
    baeum()
        .args(["bank", "sudoku"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown drill"));
}

#[test]
fn bank_from_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vocab.json");
    fs::write(
        &path,
        r#"[{"prompt": "Cat", "choices": ["고양이", "강아지", "물", "책"], "answer": "고양이"}]"#,
    )
    .unwrap();

    baeum()
        .args(["bank", "vocab", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cat"))
        .stdout(predicate::str::contains("1 questions"));
}

#[test]
fn bank_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vocab.json");
    // The answer is not among the choices.
    fs::write(
        &path,
        r#"[{"prompt": "Cat", "choices": ["고양이", "강아지", "물", "책"], "answer": "학교"}]"#,
    )
    .unwrap();

    baeum()
        .args(["bank", "vocab", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid item at index 0"));
}

// ---------------------------------------------------------------------------
// guide
// ---------------------------------------------------------------------------

#[test]
fn guide_romanization() {
    baeum()
        .args(["guide", "romanization"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hangul"))
        .stdout(predicate::str::contains("eo"));
}

#[test]
fn guide_tenses() {
    baeum()
        .args(["guide", "tenses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Present"))
        .stdout(predicate::str::contains("먹을 거예요"));
}

#[test]
fn guide_unknown_topic_fails() {
    baeum()
        .args(["guide", "grammar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown guide topic"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_romanization_quit_immediately() {
    baeum()
        .args(["play", "romanization"])
        .write_stdin(":quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Romanized word:"))
        .stdout(predicate::str::contains(
            "Final score: 0 correct out of 0 attempts",
        ));
}

#[test]
fn play_romanization_grades_a_wrong_answer() {
    // No romanized word maps to plain ASCII "zzz", so this submission is
    // guaranteed incorrect regardless of the seeded pick.
    baeum()
        .args(["play", "romanization", "--seed", "7"])
        .write_stdin("zzz\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect."))
        .stdout(predicate::str::contains(
            "Final score: 0 correct out of 1 attempts",
        ));
}

#[test]
fn play_romanization_empty_submission_is_graded() {
    baeum()
        .args(["play", "romanization"])
        .write_stdin("\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Final score: 0 correct out of 1 attempts",
        ));
}

#[test]
fn play_vocab_rejects_non_numeric_selection() {
    baeum()
        .args(["play", "vocab"])
        .write_stdin("abc\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("pick a number"))
        .stdout(predicate::str::contains(
            "Final score: 0 correct out of 0 attempts",
        ));
}

#[test]
fn play_vocab_rejects_out_of_range_selection() {
    baeum()
        .args(["play", "vocab"])
        .write_stdin("9\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("out of range"))
        .stdout(predicate::str::contains(
            "Final score: 0 correct out of 0 attempts",
        ));
}

#[test]
fn play_race_empty_input_is_a_no_op() {
    baeum()
        .args(["play", "race"])
        .write_stdin("\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Score: 0 correct out of 0 attempts",
        ));
}

#[test]
fn play_race_starts_in_requested_mode() {
    baeum()
        .args(["play", "race", "--mode", "hard"])
        .write_stdin(":quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Hard]"));
}

#[test]
fn play_race_mode_switch() {
    baeum()
        .args(["play", "race"])
        .write_stdin(":mode hard\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Easy]"))
        .stdout(predicate::str::contains("[Hard]"));
}

#[test]
fn play_tense_shows_three_numbered_choices() {
    baeum()
        .args(["play", "tense"])
        .write_stdin(":quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1."))
        .stdout(predicate::str::contains("3."))
        .stdout(predicate::str::contains("4.").not());
}

#[test]
fn play_tense_grades_a_selection() {
    // Any of the three options is a graded submission; exactly one attempt
    // must be recorded whatever the outcome.
    baeum()
        .args(["play", "tense", "--seed", "3"])
        .write_stdin("1\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("out of 1 attempts"));
}

#[test]
fn play_unknown_drill_fails() {
    baeum()
        .args(["play", "chess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown drill"));
}

#[test]
fn play_session_is_reproducible_with_a_seed() {
    let run = |seed: &str| -> String {
        let output = baeum()
            .args(["play", "vocab", "--seed", seed])
            .write_stdin(":next\n:next\n:quit\n")
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };

    assert_eq!(run("11"), run("11"));
}
