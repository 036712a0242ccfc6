//! Subtitle source against a local HTTP server

use std::time::Duration;

use tsync::player::{ClockPlayer, Player};
use tsync::source::{default_languages, HttpTransport, Language, SubtitleSource, Transport};

use crate::helpers::{load_fixture, serve_subtitles};

fn source(base: &str) -> SubtitleSource {
    let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
    SubtitleSource::new(base, Box::new(transport))
}

#[test]
fn http_transport_reports_status_and_body() {
    let base = serve_subtitles(vec![(
        "/api/stream/1/subtitles/en".to_string(),
        "WEBVTT\n".to_string(),
    )]);
    let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();

    let found = transport
        .get(&format!("{}/api/stream/1/subtitles/en", base))
        .unwrap();
    assert_eq!(found.status, 200);
    assert_eq!(found.body, "WEBVTT\n");

    let missing = transport
        .get(&format!("{}/api/stream/1/subtitles/de", base))
        .unwrap();
    assert_eq!(missing.status, 404);
    assert!(!missing.is_success());
}

#[test]
fn unreachable_host_is_a_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let transport = HttpTransport::new(Duration::from_secs(1)).unwrap();
    assert!(transport.get(&format!("http://127.0.0.1:{}/", port)).is_err());
}

#[test]
fn offered_languages_become_labelled_tracks() {
    let base = serve_subtitles(vec![
        ("/api/stream/42/subtitles/de".to_string(), load_fixture("en.vtt")),
        ("/api/stream/42/subtitles/en".to_string(), load_fixture("en.vtt")),
    ]);

    let tracks = source(&base).tracks(42);

    let labels: Vec<&str> = tracks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["English", "Deutsch"]);
    assert_eq!(tracks[1].language.as_deref(), Some("de"));
}

#[test]
fn unparsable_language_is_skipped() {
    let base = serve_subtitles(vec![
        ("/api/stream/5/subtitles/en".to_string(), "not vtt".to_string()),
        ("/api/stream/5/subtitles/de".to_string(), load_fixture("en.vtt")),
    ]);

    let tracks = source(&base).tracks(5);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].label, "Deutsch");
}

#[test]
fn load_into_registers_tracks_on_player() {
    let base = serve_subtitles(vec![(
        "/api/stream/8/subtitles/en".to_string(),
        load_fixture("en.vtt"),
    )]);
    let player = ClockPlayer::new(Vec::new());

    assert!(source(&base).load_into(&player, 8));
    assert_eq!(player.text_tracks().len(), 1);
    assert!(!source(&base).load_into(&player, 9));
    assert_eq!(player.text_tracks().len(), 1);
}

#[test]
fn configured_languages_replace_defaults() {
    let base = serve_subtitles(vec![(
        "/api/stream/2/subtitles/fr".to_string(),
        load_fixture("en.vtt"),
    )]);
    let languages = vec![Language::new("fr", "Français")];
    assert_ne!(languages, default_languages());

    let tracks = source(&base).with_languages(languages).tracks(2);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].label, "Français");
}
