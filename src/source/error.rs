//! Subtitle source errors.

use crate::cue::ParseError;

/// Errors that can occur while fetching subtitle tracks.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Subtitle request failed: {0}")]
    Transport(String),

    #[error("Invalid subtitles for language '{language}': {source}")]
    Parse {
        language: String,
        #[source]
        source: ParseError,
    },
}
