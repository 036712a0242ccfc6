//! Subtitle parsing errors.

use std::path::PathBuf;

/// Errors that can occur while reading a subtitle file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing WEBVTT signature")]
    MissingSignature,

    #[error("Invalid timestamp '{value}' on line {line}")]
    InvalidTimestamp { value: String, line: usize },

    #[error("Cue timing line must contain '-->' (line {line})")]
    MissingArrow { line: usize },

    #[error("Cue on line {line} ends before it starts")]
    EndBeforeStart { line: usize },
}
