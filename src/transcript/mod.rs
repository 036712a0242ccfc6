//! Transcript synchronization
//!
//! Keeps a rendered transcript consistent with the playback position of a
//! [`Player`](crate::player::Player).
//!
//! # Architecture
//!
//! - `lookup`: track selection, active cue search, text flattening
//! - `render`: the [`RenderTarget`] trait, row keys and the channel target
//! - `terminal`: a line-printing render target for the CLI
//! - `registry`: process-wide key -> binding map with eviction on rebind
//! - `sync`: [`TranscriptSync`], one sync cycle per `tick`
//! - `runner`: fixed-period loop driving `tick` on its own thread
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::{mpsc, Arc};
//! use tsync::cue::Track;
//! use tsync::player::ClockPlayer;
//! use tsync::transcript::{ChannelTarget, SyncLoop, TranscriptSync, SYNC_INTERVAL};
//!
//! let track = Track::load("en.vtt", "English").unwrap();
//! let player = Arc::new(ClockPlayer::new(vec![track]));
//! player.play();
//!
//! let (tx, rx) = mpsc::channel();
//! let mut sync = TranscriptSync::new(Some(player));
//! sync.initialize("transcript-desktop", Box::new(ChannelTarget::new(tx)));
//!
//! let sync_loop = SyncLoop::spawn(sync, SYNC_INTERVAL, |_, _| {});
//! for event in rx.iter().take(10) {
//!     println!("{:?}", event);
//! }
//! sync_loop.stop().unwrap();
//! ```

mod error;
pub mod lookup;
mod registry;
mod render;
mod runner;
mod sync;
mod terminal;

pub use error::ExportError;
pub use lookup::{active_cue, fetch_cues, select_track, transcript_text};
pub use registry::{Binding, Registry};
pub use render::{
    ChannelTarget, CueKey, RenderEvent, RenderTarget, ScrollBehavior, ScrollBlock, ScrollOptions,
    Visibility,
};
pub use runner::{run_sync_loop, StopHandle, SyncLoop, SYNC_INTERVAL};
pub use sync::{
    SkipReason, TickOutcome, TranscriptSync, DEFAULT_TRACK_LABEL, MIN_SYNC_GAP,
    TRANSCRIPT_FILENAME,
};
pub use terminal::TerminalTarget;
