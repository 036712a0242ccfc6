//! `tsync follow`: drive the synchronizer from a wall-clock player

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use terminal_size::{terminal_size, Width};

use tsync::cli::TrackArgs;
use tsync::player::{ClockPlayer, Player};
use tsync::theme::current_theme;
use tsync::transcript::{run_sync_loop, StopHandle, TerminalTarget, TranscriptSync};
use tsync::Config;

use super::{resolve_tracks, tracks_duration};

/// Registry key of the terminal view.
const TERMINAL_KEY: &str = "transcript-terminal";

#[cfg(not(tarpaulin_include))]
pub fn handle(
    args: &TrackArgs,
    label: Option<&str>,
    start: f64,
    speed: f64,
    config: &Config,
) -> Result<()> {
    let tracks = resolve_tracks(args, config)?;
    let duration = tracks_duration(&tracks);
    let label = label.unwrap_or(&config.sync.selected_label);

    let mut player = ClockPlayer::new(tracks);
    if let Some(duration) = duration {
        player = player.with_duration(duration.as_secs_f64());
    }
    let player = Arc::new(player);
    player.seek(start);
    player.set_speed(speed);

    let theme = current_theme();
    let mut target = TerminalTarget::new(io::stdout(), theme.clone());
    if let Some((Width(cols), _)) = terminal_size() {
        target = target.with_width(cols as usize);
    }

    let mut sync = TranscriptSync::new(Some(player.clone()))
        .with_selected_label(label)
        .with_min_gap(config.sync.min_gap());
    sync.initialize(TERMINAL_KEY, Box::new(target));

    let stop = StopHandle::new();
    let ctrlc_stop = stop.clone();
    ctrlc::set_handler(move || ctrlc_stop.stop()).context("Failed to set Ctrl-C handler")?;

    player.play();
    run_sync_loop(&mut sync, config.sync.interval(), &stop, |_, outcome| {
        tracing::debug!(?outcome, "tick");
        if player.paused() {
            stop.stop();
        }
    });

    println!("{}", theme.secondary_text("-- stopped --"));
    Ok(())
}
