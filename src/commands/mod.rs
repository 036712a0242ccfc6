//! Subcommand handlers

pub mod config;
pub mod export;
pub mod fetch;
pub mod follow;
pub mod tracks;

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use tsync::cli::TrackArgs;
use tsync::cue::Track;
use tsync::source::{HttpTransport, Language, SubtitleSource};
use tsync::Config;

/// Build the subtitle source from the `[source]` config section.
pub fn subtitle_source(config: &Config) -> Result<SubtitleSource> {
    let transport = HttpTransport::new(config.source.timeout())
        .context("Failed to set up HTTP client")?;
    Ok(
        SubtitleSource::new(&config.source.base_url, Box::new(transport))
            .with_languages(config.source.languages.clone()),
    )
}

/// Load the tracks named by `args`, in order.
pub fn resolve_tracks(args: &TrackArgs, config: &Config) -> Result<Vec<Track>> {
    if let Some(stream_id) = args.stream {
        let tracks = subtitle_source(config)?.tracks(stream_id);
        if tracks.is_empty() {
            bail!("No subtitles available for stream {}", stream_id);
        }
        return Ok(tracks);
    }

    args.files
        .iter()
        .map(|path| {
            let label = label_for_file(path, &config.source.languages);
            Track::load(path, label).map_err(anyhow::Error::from)
        })
        .collect()
}

/// Track label for a local file: the language label if the file stem is a
/// configured language code, otherwise the stem itself.
pub fn label_for_file(path: &Path, languages: &[Language]) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("subtitles");

    languages
        .iter()
        .find(|lang| lang.id.eq_ignore_ascii_case(stem))
        .map(|lang| lang.label.clone())
        .unwrap_or_else(|| stem.to_string())
}

/// Longest track, used as the playable duration.
pub fn tracks_duration(tracks: &[Track]) -> Option<Duration> {
    let secs = tracks.iter().map(Track::duration).fold(0.0, f64::max);
    (secs > 0.0).then(|| Duration::from_secs_f64(secs))
}
