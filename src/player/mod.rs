//! Video player abstraction
//!
//! The synchronizer only ever reads from a player: whether it is paused,
//! where playback currently is, and which text tracks are loaded. Anything
//! implementing [`Player`] can drive it.
//!
//! - `clock`: [`ClockPlayer`], a wall-clock driven player used by the CLI

mod clock;

use std::sync::Arc;

use crate::cue::Track;

pub use clock::ClockPlayer;

/// Read-only view of a video player.
pub trait Player: Send + Sync {
    /// Whether playback is paused.
    fn paused(&self) -> bool;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Text tracks currently registered with the player, in order.
    fn text_tracks(&self) -> Vec<Track>;
}

/// Player handle shared between the synchronizer and its owner.
pub type SharedPlayer = Arc<dyn Player>;
