//! Transcript export errors.

use std::path::PathBuf;

/// Errors that can occur while exporting a transcript.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No player available to read text tracks from")]
    NoPlayer,

    #[error("Failed to write transcript to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
