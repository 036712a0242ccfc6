//! Integration tests for the tsync CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture, load_fixture, serve_subtitles, temp_fixture};

/// Command with colors off and a config path that does not exist.
fn tsync(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tsync"));
    cmd.env("NO_COLOR", "1")
        .env("TSYNC_CONFIG", config_dir.join("config.toml"))
        .env_remove("TSYNC_LOG");
    for var in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run tsync and capture output
fn run_tsync(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = tsync(config_dir)
        .args(args)
        .output()
        .expect("Failed to execute tsync");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

const ENGLISH_TRANSCRIPT: &str =
    "Welcome to the lecture.\n\nToday we talk about\nscheduling.\n\nLet's begin.\n\n";

// ============================================================================
// Usage
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let cfg = TempDir::new().unwrap();
    tsync(cfg.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tracks"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("follow"));
}

#[test]
fn tracks_without_source_is_usage_error() {
    let cfg = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_tsync(cfg.path(), &["tracks"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required"));
}

#[test]
fn stream_and_files_conflict() {
    let cfg = TempDir::new().unwrap();
    let en = fixture("en.vtt");
    let (_stdout, stderr, exit_code) =
        run_tsync(cfg.path(), &["tracks", "--stream", "1", path_str(&en)]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn completions_generate_script() {
    let cfg = TempDir::new().unwrap();
    tsync(cfg.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tsync"));
}

// ============================================================================
// tracks
// ============================================================================

#[test]
fn tracks_lists_local_files_in_order() {
    let cfg = TempDir::new().unwrap();
    let en = fixture("en.vtt");
    let de = fixture("de.srt");
    let (stdout, _stderr, exit_code) =
        run_tsync(cfg.path(), &["tracks", path_str(&en), path_str(&de)]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
English      captions       3 cues  00:15
Deutsch      captions       2 cues  00:09
");
}

#[test]
fn tracks_json_reports_counts() {
    let cfg = TempDir::new().unwrap();
    let en = fixture("en.vtt");
    let (stdout, _stderr, exit_code) = run_tsync(cfg.path(), &["tracks", "--json", path_str(&en)]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value[0]["label"], "English");
    assert_eq!(value[0]["kind"], "captions");
    assert_eq!(value[0]["cues"], 3);
    assert_eq!(value[0]["duration"], 15.0);
}

#[test]
fn tracks_unparsable_file_exits_1() {
    let cfg = TempDir::new().unwrap();
    let broken = fixture("broken.vtt");
    let (_stdout, stderr, exit_code) = run_tsync(cfg.path(), &["tracks", path_str(&broken)]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("WEBVTT"));
}

// ============================================================================
// export
// ============================================================================

#[test]
fn export_writes_transcript_of_preferred_track() {
    let cfg = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let en = fixture("en.vtt");
    let de = fixture("de.srt");

    let (stdout, _stderr, exit_code) = run_tsync(
        cfg.path(),
        &[
            "export",
            path_str(&de),
            path_str(&en),
            "-o",
            path_str(out.path()),
        ],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("transcript.txt"));
    assert!(stdout.contains("from English"));
    let written = fs::read_to_string(out.path().join("transcript.txt")).unwrap();
    assert_eq!(written, ENGLISH_TRANSCRIPT);
}

#[test]
fn export_honours_label_flag() {
    let cfg = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let en = fixture("en.vtt");
    let de = fixture("de.srt");

    let (_stdout, _stderr, exit_code) = run_tsync(
        cfg.path(),
        &[
            "export",
            path_str(&en),
            path_str(&de),
            "--label",
            "Deutsch",
            "-o",
            path_str(out.path()),
        ],
    );

    assert_eq!(exit_code, 0);
    let written = fs::read_to_string(out.path().join("transcript.txt")).unwrap();
    assert_eq!(
        written,
        "Willkommen zur Vorlesung.\n\nHeute geht es um Scheduling.\n\n"
    );
}

#[test]
fn export_unknown_label_falls_back_to_first_caption_track() {
    let cfg = TempDir::new().unwrap();
    let (dir, en) = temp_fixture("en.vtt");

    let (stdout, _stderr, exit_code) = run_tsync(
        cfg.path(),
        &[
            "export",
            path_str(&en),
            "--label",
            "Klingon",
            "-o",
            path_str(dir.path()),
        ],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("from English"));
    let written = fs::read_to_string(dir.path().join("transcript.txt")).unwrap();
    assert_eq!(written, ENGLISH_TRANSCRIPT);
}

#[test]
fn export_uses_configured_directory() {
    let cfg = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(
        cfg.path().join("config.toml"),
        format!("[export]\ndirectory = {:?}\n", path_str(out.path())),
    )
    .unwrap();
    let en = fixture("en.vtt");

    let (_stdout, _stderr, exit_code) = run_tsync(cfg.path(), &["export", path_str(&en)]);

    assert_eq!(exit_code, 0);
    assert!(out.path().join("transcript.txt").exists());
}

#[test]
fn export_missing_file_exits_1_with_path() {
    let cfg = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_tsync(cfg.path(), &["export", "/nonexistent/en.vtt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("/nonexistent/en.vtt"));
}

// ============================================================================
// Streams
// ============================================================================

fn stream_config(cfg: &Path, base_url: &str) {
    fs::write(
        cfg.join("config.toml"),
        format!("[source]\nbase_url = \"{}\"\ntimeout_secs = 5\n", base_url),
    )
    .unwrap();
}

#[test]
fn stream_tracks_only_include_offered_languages() {
    let base = serve_subtitles(vec![(
        "/api/stream/7/subtitles/en".to_string(),
        load_fixture("en.vtt"),
    )]);
    let cfg = TempDir::new().unwrap();
    stream_config(cfg.path(), &base);

    let (stdout, _stderr, exit_code) = run_tsync(cfg.path(), &["tracks", "--stream", "7"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("English"));
    assert!(!stdout.contains("Deutsch"));
}

#[test]
fn stream_without_subtitles_fails_export() {
    let base = serve_subtitles(Vec::new());
    let cfg = TempDir::new().unwrap();
    stream_config(cfg.path(), &base);

    let (_stdout, stderr, exit_code) = run_tsync(cfg.path(), &["export", "--stream", "9"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No subtitles available for stream 9"));
}

#[test]
fn fetch_saves_one_file_per_language() {
    let en = load_fixture("en.vtt");
    let base = serve_subtitles(vec![
        ("/api/stream/3/subtitles/en".to_string(), en.clone()),
        (
            "/api/stream/3/subtitles/de".to_string(),
            "WEBVTT\n\n00:01.000 --> 00:02.000\nHallo\n".to_string(),
        ),
    ]);
    let cfg = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    stream_config(cfg.path(), &base);

    let (stdout, _stderr, exit_code) =
        run_tsync(cfg.path(), &["fetch", "3", "-o", path_str(out.path())]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Saved"));
    assert_eq!(fs::read_to_string(out.path().join("en.vtt")).unwrap(), en);
    assert!(out.path().join("de.vtt").exists());
}

#[test]
fn fetch_with_nothing_offered_is_not_an_error() {
    let base = serve_subtitles(Vec::new());
    let cfg = TempDir::new().unwrap();
    stream_config(cfg.path(), &base);

    tsync(cfg.path())
        .args(["fetch", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No subtitles available for stream 4"));
}

// ============================================================================
// follow
// ============================================================================

#[test]
fn follow_prints_active_cue_and_stops_at_end() {
    let cfg = TempDir::new().unwrap();
    let en = fixture("en.vtt");

    let (stdout, _stderr, exit_code) = run_tsync(
        cfg.path(),
        &["follow", path_str(&en), "--start", "13", "--speed", "8"],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("-- transcript: 3 cues --"));
    assert!(stdout.contains("[00:12] Let's begin."));
    assert!(stdout.trim_end().ends_with("-- stopped --"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_follows_env_override() {
    let cfg = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_tsync(cfg.path(), &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), path_str(&cfg.path().join("config.toml")));
}

#[test]
fn config_init_then_show() {
    let cfg = TempDir::new().unwrap();

    let (_stdout, _stderr, exit_code) = run_tsync(cfg.path(), &["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(cfg.path().join("config.toml").exists());

    let (stdout, _stderr, exit_code) = run_tsync(cfg.path(), &["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[source]"));
    assert!(stdout.contains("min_gap_ms = 1000"));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let cfg = TempDir::new().unwrap();
    fs::write(cfg.path().join("config.toml"), "# mine\n").unwrap();

    let (_stdout, stderr, exit_code) = run_tsync(cfg.path(), &["config", "init"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"));

    let (_stdout, _stderr, exit_code) = run_tsync(cfg.path(), &["config", "init", "--force"]);
    assert_eq!(exit_code, 0);
    let content = fs::read_to_string(cfg.path().join("config.toml")).unwrap();
    assert!(content.contains("[sync]"));
}
