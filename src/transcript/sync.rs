//! The transcript synchronizer.
//!
//! Each sync cycle reads the player's position and text tracks, publishes the
//! selected track's cues to the bound render target and marks the cue under
//! the playhead. Failures never surface as errors: a cycle either does its
//! work or is skipped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use super::error::ExportError;
use super::lookup::{active_cue, fetch_cues, transcript_text};
use super::registry::{Binding, Registry};
use super::render::{CueKey, RenderTarget, ScrollOptions};
use crate::cue::Cue;
use crate::player::SharedPlayer;

/// Minimum real time between two sync cycles.
pub const MIN_SYNC_GAP: Duration = Duration::from_secs(1);

/// Track label preferred when none is configured.
pub const DEFAULT_TRACK_LABEL: &str = "English";

/// File name used by [`TranscriptSync::download`].
pub const TRANSCRIPT_FILENAME: &str = "transcript.txt";

/// Why a call to [`TranscriptSync::tick`] did no work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No render target bound, or the binding was evicted
    Detached,
    /// Target exists but is not in a visible container
    Hidden,
    /// No player instance yet
    NoPlayer,
    Paused,
    /// Last sync was less than the minimum gap ago
    TooSoon,
}

/// Result of one call to [`TranscriptSync::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Skipped(SkipReason),
    Synced {
        /// Number of cues published
        cues: usize,
        /// Row that was marked active, if any
        active: Option<CueKey>,
    },
}

/// Keeps a render target in step with a player's playback position.
pub struct TranscriptSync {
    player: Option<SharedPlayer>,
    binding: Option<Binding>,
    cues: Arc<[Cue]>,
    last_sync: Option<Instant>,
    selected_label: String,
    min_gap: Duration,
}

impl TranscriptSync {
    /// Create an unbound synchronizer for `player`.
    pub fn new(player: Option<SharedPlayer>) -> Self {
        Self {
            player,
            binding: None,
            cues: Arc::from(Vec::new()),
            last_sync: None,
            selected_label: DEFAULT_TRACK_LABEL.to_string(),
            min_gap: MIN_SYNC_GAP,
        }
    }

    pub fn with_selected_label(mut self, label: impl Into<String>) -> Self {
        self.selected_label = label.into();
        self
    }

    pub fn with_min_gap(mut self, min_gap: Duration) -> Self {
        self.min_gap = min_gap;
        self
    }

    /// Bind `target` under `key` in the process-wide registry.
    pub fn initialize(&mut self, key: &str, target: Box<dyn RenderTarget>) -> Binding {
        self.initialize_in(Registry::global(), key, target)
    }

    /// Bind `target` under `key` in `registry`.
    ///
    /// A binding already registered for `key` is unsubscribed first, whether
    /// it belongs to this synchronizer or another one. The binding this
    /// synchronizer held before, under any key, is released.
    pub fn initialize_in(
        &mut self,
        registry: &Registry,
        key: &str,
        target: Box<dyn RenderTarget>,
    ) -> Binding {
        if let Some(previous) = self.binding.take() {
            previous.release();
        }
        let binding = registry.bind(key, target);
        self.binding = Some(binding.clone());
        binding
    }

    /// Swap in a new player instance (or none).
    pub fn reset(&mut self, player: Option<SharedPlayer>) {
        self.player = player;
    }

    pub fn selected_label(&self) -> &str {
        &self.selected_label
    }

    pub fn set_selected_label(&mut self, label: impl Into<String>) {
        self.selected_label = label.into();
    }

    /// Cue list published by the last sync.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn last_sync(&self) -> Option<Instant> {
        self.last_sync
    }

    /// Run one sync cycle against the current clock.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_at(Instant::now())
    }

    /// Run one sync cycle as if the clock read `now`.
    pub fn tick_at(&mut self, now: Instant) -> TickOutcome {
        let binding = match &self.binding {
            Some(binding) if binding.is_live() => binding,
            _ => return TickOutcome::Skipped(SkipReason::Detached),
        };
        if !binding.is_visible() {
            return TickOutcome::Skipped(SkipReason::Hidden);
        }

        let player = match &self.player {
            Some(player) => Arc::clone(player),
            None => return TickOutcome::Skipped(SkipReason::NoPlayer),
        };
        if player.paused() {
            return TickOutcome::Skipped(SkipReason::Paused);
        }

        if let Some(last) = self.last_sync {
            if now.saturating_duration_since(last) < self.min_gap {
                return TickOutcome::Skipped(SkipReason::TooSoon);
            }
        }
        self.last_sync = Some(now);
        debug!("Syncing transcript...");

        let current_time = player.current_time();
        let cues = fetch_cues(&player.text_tracks(), &self.selected_label);
        self.publish(cues);
        let active = self.highlight(current_time);

        TickOutcome::Synced {
            cues: self.cues.len(),
            active,
        }
    }

    /// Replace the held cue list and send it to the render target in full.
    pub fn publish(&mut self, cues: Arc<[Cue]>) {
        self.cues = cues;
        if let Some(binding) = &self.binding {
            let cues = &self.cues;
            binding.with_target(|target| target.update(cues));
        }
    }

    /// Publish a cue list pushed from outside the sync cycle.
    pub fn on_update(&mut self, cues: Vec<Cue>) {
        self.publish(cues.into());
    }

    /// Mark the first cue containing `time` and scroll it into view.
    ///
    /// Every existing marker is cleared first. Returns the marked row, or
    /// `None` if no cue contains `time`, the row is missing, or the target
    /// is detached.
    pub fn highlight(&mut self, time: f64) -> Option<CueKey> {
        let binding = self.binding.as_ref()?;
        let active = active_cue(&self.cues, time).map(CueKey::of);

        binding
            .with_target(|target| {
                target.clear_highlights();
                let key = active?;
                if !target.mark(key) {
                    return None;
                }
                target.scroll_into_view(key, ScrollOptions::default());
                Some(key)
            })
            .flatten()
    }

    /// Flattened text of the selected (or fallback) track.
    pub fn transcript_text(&self) -> Result<String, ExportError> {
        let player = self.player.as_ref().ok_or(ExportError::NoPlayer)?;
        let cues = fetch_cues(&player.text_tracks(), &self.selected_label);
        Ok(transcript_text(&cues))
    }

    /// Write the transcript to `transcript.txt` inside `dir`.
    pub fn download(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let text = self.transcript_text()?;
        let path = dir.join(TRANSCRIPT_FILENAME);
        fs::write(&path, text).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "transcript written");
        Ok(path)
    }
}

impl Drop for TranscriptSync {
    fn drop(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.release();
        }
    }
}
