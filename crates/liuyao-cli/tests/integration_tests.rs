//! End-to-end tests for the `liuyao` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn liuyao() -> Command {
    let mut cmd = Command::cargo_bin("liuyao").unwrap();
    // Isolate from the caller's environment.
    cmd.env_remove("LIUYAO_TEXTS_DIR");
    cmd.env_remove("LIUYAO__TEXTS__DATA_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ── Basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    liuyao()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cast"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_manifest() {
    liuyao()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    liuyao().assert().failure().code(2);
}

// ── cast coins ────────────────────────────────────────────────────────────────

#[test]
fn seeded_coin_cast_is_reproducible() {
    let first = liuyao()
        .args(["cast", "coins", "--seed", "42"])
        .assert()
        .success();
    let first_stdout = first.get_output().stdout.clone();

    liuyao()
        .args(["cast", "coins", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::eq(first_stdout));
}

#[test]
fn scripted_throws_produce_the_expected_hexagrams() {
    // Bottom line first: old yang, then two young yang, then three young
    // yin.  Source 泰 (11), one moving line at the bottom, transformed 临.
    liuyao()
        .args([
            "cast", "coins", "--throws", "333", "233", "233", "223", "223", "223",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("地天泰"))
        .stdout(predicate::str::contains("地泽临"))
        .stdout(predicate::str::contains("初九"));
}

#[test]
fn malformed_throw_is_a_user_error() {
    liuyao()
        .args([
            "cast", "coins", "--throws", "333", "233", "233", "223", "223", "991",
        ])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn seed_and_throws_conflict() {
    liuyao()
        .args([
            "cast", "coins", "--seed", "7", "--throws", "333", "233", "233", "223", "223", "223",
        ])
        .assert()
        .failure()
        .code(2);
}

// ── cast numbers ──────────────────────────────────────────────────────────────

#[test]
fn number_cast_resolves_the_moving_line() {
    // 385 → lower 乾, 812 → upper 震 (大壮), 204 → sixth line moves (大有).
    liuyao()
        .args(["cast", "numbers", "385", "812", "204"])
        .assert()
        .success()
        .stdout(predicate::str::contains("雷天大壮"))
        .stdout(predicate::str::contains("火天大有"))
        .stdout(predicate::str::contains("上六"));
}

#[test]
fn number_cast_json_is_parseable() {
    let output = liuyao()
        .args([
            "cast",
            "numbers",
            "385",
            "812",
            "204",
            "--output-format",
            "json",
        ])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).expect("stdout must be JSON");
    assert_eq!(value["source"]["number"], 34);
    assert_eq!(value["transformed"]["number"], 14);
    assert_eq!(value["ruling"]["line_name"], "上六");
}

#[test]
fn out_of_range_number_is_rejected() {
    liuyao()
        .args(["cast", "numbers", "0", "1", "1"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn numbers_require_exactly_three_values() {
    liuyao()
        .args(["cast", "numbers", "385", "812"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn random_number_cast_announces_the_draw() {
    liuyao()
        .args(["cast", "numbers", "--random", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drawn numbers"));
}

// ── show ──────────────────────────────────────────────────────────────────────

#[test]
fn show_by_number_prints_full_texts() {
    liuyao()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("乾为天"))
        .stdout(predicate::str::contains("元，亨，利，贞"))
        .stdout(predicate::str::contains("用九"));
}

#[test]
fn show_by_key_finds_the_same_hexagram() {
    liuyao()
        .args(["show", "111010"])
        .assert()
        .success()
        .stdout(predicate::str::contains("需"));
}

#[test]
fn show_unknown_selector_exits_not_found() {
    liuyao()
        .args(["show", "65"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("65"));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_json_holds_all_sixty_four() {
    let output = liuyao()
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).expect("stdout must be JSON");
    let items = value.as_array().expect("JSON array");
    assert_eq!(items.len(), 64);
    assert_eq!(items[0]["number"], 1);
    assert_eq!(items[63]["number"], 64);
}

#[test]
fn list_csv_has_a_header_row() {
    liuyao()
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("number,key,name,full_name"));
}

#[test]
fn list_survives_quiet_mode() {
    // Machine formats bypass the quiet switch.
    liuyao()
        .args(["--quiet", "list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("乾"));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_path_prints_a_location() {
    liuyao()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn missing_explicit_config_file_is_a_config_error() {
    liuyao()
        .args(["--config", "/nonexistent/liuyao.toml", "config", "list"])
        .assert()
        .failure()
        .code(4);
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn bash_completions_mention_the_binary() {
    liuyao()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("liuyao"));
}
