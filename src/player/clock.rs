//! Wall-clock driven player.
//!
//! Playback position advances with real time while playing, scaled by the
//! playback speed. Pausing freezes the position; resuming restarts the wall
//! clock from the frozen position.

use std::sync::Mutex;
use std::time::Instant;

use super::Player;
use crate::cue::Track;

#[derive(Debug)]
struct ClockState {
    /// Whether playback is paused
    paused: bool,
    /// Playback speed multiplier (1.0 = normal)
    speed: f64,
    /// Wall clock time when playback started/resumed
    start_time: Instant,
    /// Position at `start_time`, in seconds
    time_offset: f64,
    /// Registered text tracks
    tracks: Vec<Track>,
}

impl ClockState {
    fn position(&self, duration: Option<f64>) -> f64 {
        let position = if self.paused {
            self.time_offset
        } else {
            self.time_offset + self.start_time.elapsed().as_secs_f64() * self.speed
        };
        match duration {
            Some(d) => position.min(d),
            None => position,
        }
    }
}

/// A player whose position is derived from the system clock.
#[derive(Debug)]
pub struct ClockPlayer {
    state: Mutex<ClockState>,
    duration: Option<f64>,
}

impl ClockPlayer {
    /// Create a paused player at position 0 with the given tracks.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            state: Mutex::new(ClockState {
                paused: true,
                speed: 1.0,
                start_time: Instant::now(),
                time_offset: 0.0,
                tracks,
            }),
            duration: None,
        }
    }

    /// Stop the clock at `duration` seconds.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration.max(0.0));
        self
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut ClockState) -> R) -> R {
        let mut guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    /// Start or resume playback.
    pub fn play(&self) {
        let duration = self.duration;
        self.with_state(|state| {
            if state.paused {
                state.time_offset = state.position(duration);
                state.start_time = Instant::now();
                state.paused = false;
            }
        });
    }

    /// Pause playback, freezing the current position.
    pub fn pause(&self) {
        let duration = self.duration;
        self.with_state(|state| {
            if !state.paused {
                state.time_offset = state.position(duration);
                state.paused = true;
            }
        });
    }

    /// Toggle between playing and paused.
    pub fn toggle_pause(&self) {
        if self.paused() {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Jump to `time` seconds, clamped to the playable range.
    pub fn seek(&self, time: f64) {
        let mut target = time.max(0.0);
        if let Some(d) = self.duration {
            target = target.min(d);
        }
        self.with_state(|state| {
            state.time_offset = target;
            state.start_time = Instant::now();
        });
    }

    /// Set the playback speed, clamped to 0.1x..=16x.
    pub fn set_speed(&self, speed: f64) {
        let duration = self.duration;
        self.with_state(|state| {
            state.time_offset = state.position(duration);
            state.start_time = Instant::now();
            state.speed = speed.clamp(0.1, 16.0);
        });
    }

    pub fn speed(&self) -> f64 {
        self.with_state(|state| state.speed)
    }

    /// Register an additional text track after construction.
    pub fn add_text_track(&self, track: Track) {
        self.with_state(|state| state.tracks.push(track));
    }

    /// Whether the clock has reached the configured duration.
    pub fn ended(&self) -> bool {
        match self.duration {
            Some(d) => self.current_time() >= d,
            None => false,
        }
    }
}

impl Player for ClockPlayer {
    fn paused(&self) -> bool {
        let ended = self.ended();
        self.with_state(|state| state.paused) || ended
    }

    fn current_time(&self) -> f64 {
        let duration = self.duration;
        self.with_state(|state| state.position(duration))
    }

    fn text_tracks(&self) -> Vec<Track> {
        self.with_state(|state| state.tracks.clone())
    }
}
