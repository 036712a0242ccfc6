//! Cue and track types plus subtitle file parsers.
//!
//! A [`Track`] is what a player exposes through its text track list: a kind,
//! a label and an ordered list of [`Cue`]s. Tracks share their cues through
//! an `Arc<[Cue]>`, so handing a cue list to the synchronizer for a sync
//! cycle never copies the cue text.
//!
//! Two on-disk formats are understood:
//! - WebVTT (what the lecture subtitle endpoint serves), see [`parse_vtt`]
//! - SRT, see [`parse_srt`]

mod error;
mod srt;
mod timestamp;
mod vtt;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use error::ParseError;
pub use srt::parse_srt;
pub use timestamp::{format_timestamp, parse_timestamp};
pub use vtt::parse_vtt;

/// A time-bounded span of caption text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Start of the cue in seconds
    pub start_time: f64,
    /// End of the cue in seconds
    pub end_time: f64,
    /// Cue payload, lines joined with `\n`
    pub text: String,
}

impl Cue {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }

    /// Whether `time` lies within the cue, both ends inclusive.
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time <= self.end_time
    }
}

/// Kind of a text track, mirroring the HTML text track kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Captions,
    Subtitles,
    Descriptions,
    Chapters,
    Metadata,
}

impl TrackKind {
    /// Captions and subtitles carry the spoken text of the lecture.
    pub fn is_transcript(&self) -> bool {
        matches!(self, TrackKind::Captions | TrackKind::Subtitles)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::Captions => "captions",
            TrackKind::Subtitles => "subtitles",
            TrackKind::Descriptions => "descriptions",
            TrackKind::Chapters => "chapters",
            TrackKind::Metadata => "metadata",
        }
    }
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A named, kinded, ordered sequence of cues.
#[derive(Debug, Clone)]
pub struct Track {
    pub kind: TrackKind,
    pub label: String,
    /// Language code the track was registered for (e.g. `en`)
    pub language: Option<String>,
    cues: Arc<[Cue]>,
}

impl Track {
    pub fn new(kind: TrackKind, label: impl Into<String>, cues: Vec<Cue>) -> Self {
        Self {
            kind,
            label: label.into(),
            language: None,
            cues: cues.into(),
        }
    }

    pub fn captions(label: impl Into<String>, cues: Vec<Cue>) -> Self {
        Self::new(TrackKind::Captions, label, cues)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Shared handle to the cue list.
    pub fn shared_cues(&self) -> Arc<[Cue]> {
        Arc::clone(&self.cues)
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Latest cue end time, 0 for an empty track.
    pub fn duration(&self) -> f64 {
        self.cues
            .iter()
            .map(|cue| cue.end_time)
            .fold(0.0, f64::max)
    }

    /// Load a caption track from a `.vtt` or `.srt` file.
    ///
    /// The format is chosen by extension; anything that is not `.srt`
    /// is read as WebVTT.
    pub fn load<P: AsRef<Path>>(path: P, label: impl Into<String>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_srt = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("srt"));

        let cues = if is_srt {
            parse_srt(&content)?
        } else {
            parse_vtt(&content)?
        };

        Ok(Self::captions(label, cues))
    }
}
