//! `tsync tracks`: list subtitle tracks

use anyhow::Result;
use serde::Serialize;

use tsync::cli::TrackArgs;
use tsync::cue::{format_timestamp, Track};
use tsync::theme::current_theme;
use tsync::Config;

use super::resolve_tracks;

#[derive(Debug, Serialize)]
struct TrackSummary<'a> {
    label: &'a str,
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    cues: usize,
    duration: f64,
}

impl<'a> From<&'a Track> for TrackSummary<'a> {
    fn from(track: &'a Track) -> Self {
        Self {
            label: &track.label,
            kind: track.kind.as_str(),
            language: track.language.as_deref(),
            cues: track.len(),
            duration: track.duration(),
        }
    }
}

/// One line per track: label, kind, cue count and duration.
pub fn format_track_line(track: &Track) -> String {
    format!(
        "{:<12} {:<10} {:>5} cues  {}",
        track.label,
        track.kind,
        track.len(),
        format_timestamp(track.duration())
    )
}

pub fn handle(args: &TrackArgs, json: bool, config: &Config) -> Result<()> {
    let tracks = resolve_tracks(args, config)?;

    if json {
        let summaries: Vec<TrackSummary> = tracks.iter().map(TrackSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let theme = current_theme();
    for track in &tracks {
        println!("{}", theme.primary_text(&format_track_line(track)));
    }
    Ok(())
}
