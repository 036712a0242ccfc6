//! tsync - keep a lecture transcript in step with video playback
//!
//! - [`cue`]: cues, tracks and WebVTT/SRT parsing
//! - [`player`]: the read-only player interface and a wall-clock player
//! - [`transcript`]: the synchronizer, its render targets and binding registry
//! - [`source`]: probing the lecture platform for subtitle tracks
//! - [`config`]: the TOML configuration file

pub mod cli;
pub mod config;
pub mod cue;
pub mod player;
pub mod source;
pub mod theme;
pub mod transcript;

pub use config::Config;
