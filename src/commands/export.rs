//! `tsync export`: write transcript.txt

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use humansize::{format_size, BINARY};

use tsync::cli::TrackArgs;
use tsync::player::ClockPlayer;
use tsync::theme::current_theme;
use tsync::transcript::{select_track, TranscriptSync};
use tsync::Config;

use super::resolve_tracks;

pub fn handle(
    args: &TrackArgs,
    label: Option<&str>,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let tracks = resolve_tracks(args, config)?;
    let label = label.unwrap_or(&config.sync.selected_label);

    let source_label = select_track(&tracks, label).map(|t| t.label.clone());
    let player = Arc::new(ClockPlayer::new(tracks));
    let sync = TranscriptSync::new(Some(player)).with_selected_label(label);

    let dir = output.unwrap_or_else(|| config.export.directory_or_cwd());
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    let path = sync.download(&dir)?;
    let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    let theme = current_theme();
    let from = source_label.as_deref().unwrap_or("no caption track");
    println!(
        "{}",
        theme.success_text(&format!(
            "Wrote {} ({}, from {})",
            path.display(),
            format_size(size, BINARY),
            from
        ))
    );
    Ok(())
}
