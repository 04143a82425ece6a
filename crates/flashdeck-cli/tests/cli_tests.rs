//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A `flashdeck` invocation isolated inside `dir`: no config file, no
/// environment overrides, storage under `dir/store`.
fn flashdeck(dir: &Path) -> Command {
    let mut cmd = flashdeck_without_storage_flag(dir);
    cmd.arg("--storage").arg(dir.join("store"));
    cmd
}

/// Like [`flashdeck`], but the storage directory comes from config or env.
fn flashdeck_without_storage_flag(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("flashdeck").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("FLASHDECK_REMOTE_URL")
        .env_remove("FLASHDECK_STORAGE_DIR")
        .env_remove("FLASHDECK_TEST_UNSET_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn stored_deck(dir: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(dir.join("store/flashcards_v1.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn seed_store(dir: &Path, body: &str) {
    std::fs::create_dir_all(dir.join("store")).unwrap();
    std::fs::write(dir.join("store/flashcards_v1.json"), body).unwrap();
}

#[test]
fn study_starts_on_builtin_deck() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .arg("study")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loading..."))
        .stdout(predicate::str::contains("[#1] Mi a JavaScript?"))
        .stdout(predicate::str::contains("1 / 12"));
}

#[test]
fn study_judgment_is_persisted() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .arg("study")
        .write_stdin("f\nx\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[3 pts]"));

    let deck = stored_deck(dir.path());
    assert_eq!(deck.as_array().unwrap().len(), 12);
    assert_eq!(deck[0]["points"], 2);
    assert_eq!(deck[1]["points"], 1);
}

#[test]
fn persisted_deck_survives_restart() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), r#"[{"question":"Q","answer":"A","points":5}]"#);

    flashdeck(dir.path())
        .arg("study")
        .write_stdin("n\np\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[#1] Q"))
        .stdout(predicate::str::contains("Stopped at card 1 / 1."));

    assert_eq!(stored_deck(dir.path())[0]["points"], 6);
}

#[test]
fn restart_keeps_scores() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .arg("study")
        .write_stdin("n\ny\nr\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stopped at card 1 / 12."));

    assert_eq!(stored_deck(dir.path())[1]["points"], 2);
}

#[test]
fn list_shows_deck_and_origin() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mi a JavaScript?"))
        .stdout(predicate::str::contains("12 cards from builtin"));

    // The builtin deck was written back, so the next run reads storage.
    flashdeck(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 cards from storage"));
}

#[test]
fn corrupt_store_falls_back() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), "{not json");

    flashdeck(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 cards from builtin"))
        .stderr(predicate::str::contains("persisted deck is malformed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn corrupt_store_uses_remote_deck() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), "{not json");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"question": "Q2", "answer": "A2", "points": 0}
        ])))
        .mount(&server)
        .await;

    flashdeck(dir.path())
        .arg("--remote")
        .arg(server.uri())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Q2"))
        .stdout(predicate::str::contains("1 cards from remote"));
}

#[tokio::test(flavor = "multi_thread")]
async fn no_remote_flag_skips_fetch() {
    let dir = TempDir::new().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"question": "Q2", "answer": "A2", "points": 0}
        ])))
        .expect(0)
        .mount(&server)
        .await;

    std::fs::write(
        dir.path().join("flashdeck.toml"),
        format!("remote_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    flashdeck(dir.path())
        .arg("--no-remote")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 cards from builtin"));
}

#[tokio::test(flavor = "multi_thread")]
async fn remote_url_env_var_overrides_config() {
    let dir = TempDir::new().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"question": "From env", "answer": "A", "points": 1}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    std::fs::write(
        dir.path().join("flashdeck.toml"),
        "remote_url = \"http://127.0.0.1:1\"\n",
    )
    .unwrap();

    flashdeck(dir.path())
        .env("FLASHDECK_REMOTE_URL", server.uri())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("From env"))
        .stdout(predicate::str::contains("1 cards from remote"));
}

#[test]
fn storage_dir_env_var_overrides_config() {
    let dir = TempDir::new().unwrap();
    let from_env = dir.path().join("env-store");

    std::fs::write(
        dir.path().join("flashdeck.toml"),
        format!("storage_dir = \"{}\"\n", dir.path().join("toml-store").display()),
    )
    .unwrap();

    flashdeck_without_storage_flag(dir.path())
        .env("FLASHDECK_STORAGE_DIR", &from_env)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 cards from builtin"));

    assert!(from_env.join("flashcards_v1.json").exists());
    assert!(!dir.path().join("toml-store").exists());
}

#[test]
fn storage_flag_beats_storage_dir_env_var() {
    let dir = TempDir::new().unwrap();
    let from_env = dir.path().join("env-store");

    flashdeck(dir.path())
        .env("FLASHDECK_STORAGE_DIR", &from_env)
        .arg("list")
        .assert()
        .success();

    assert!(dir.path().join("store/flashcards_v1.json").exists());
    assert!(!from_env.exists());
}

#[test]
fn unset_variable_in_remote_url_means_no_remote() {
    let dir = TempDir::new().unwrap();

    std::fs::write(
        dir.path().join("flashdeck.toml"),
        "remote_url = \"${FLASHDECK_TEST_UNSET_URL}\"\n",
    )
    .unwrap();

    flashdeck(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 cards from builtin"));
}

#[tokio::test(flavor = "multi_thread")]
async fn remote_url_expands_variables() {
    let dir = TempDir::new().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"question": "Expanded", "answer": "A", "points": 0}
        ])))
        .mount(&server)
        .await;

    std::fs::write(
        dir.path().join("flashdeck.toml"),
        "remote_url = \"${FLASHDECK_TEST_HOST}\"\n",
    )
    .unwrap();

    flashdeck(dir.path())
        .env("FLASHDECK_TEST_HOST", server.uri())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cards from remote"));
}

#[test]
fn path_like_storage_key_is_rejected() {
    let dir = TempDir::new().unwrap();

    std::fs::write(
        dir.path().join("flashdeck.toml"),
        "storage_key = \"../escape\"\n",
    )
    .unwrap();

    flashdeck(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("storage_key"));

    assert!(!dir.path().join("escape.json").exists());
}

#[test]
fn reset_removes_persisted_deck() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path(), r#"[{"question":"Q","answer":"A","points":5}]"#);

    flashdeck(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed persisted deck"));

    assert!(!dir.path().join("store/flashcards_v1.json").exists());

    flashdeck(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("No persisted deck"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created flashdeck.toml"))
        .stdout(predicate::str::contains("Created cards.json"));

    let cards: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("cards.json")).unwrap())
            .unwrap();
    assert_eq!(cards.as_array().unwrap().len(), 12);

    // The generated config is valid.
    flashdeck(dir.path())
        .arg("list")
        .assert()
        .success();
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path()).arg("init").assert().success();

    flashdeck(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .arg("--config")
        .arg("nonexistent.toml")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal flashcard trainer"));
}
