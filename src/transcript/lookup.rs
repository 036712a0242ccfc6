//! Track lookup and transcript flattening.
//!
//! Both operations pick exactly one track: the first caption/subtitle track
//! labelled `selected_label` that has cues, otherwise the first
//! caption/subtitle track of any label that has cues.

use std::sync::Arc;

use crate::cue::{Cue, Track};

/// Pick the track a transcript is drawn from.
pub fn select_track<'a>(tracks: &'a [Track], selected_label: &str) -> Option<&'a Track> {
    let transcript_tracks = || {
        tracks
            .iter()
            .filter(|track| track.kind.is_transcript() && !track.is_empty())
    };

    transcript_tracks()
        .find(|track| track.label == selected_label)
        .or_else(|| transcript_tracks().next())
}

/// Cues of the selected track, or of the fallback track, or nothing.
///
/// Pure lookup: the tracks are only read.
pub fn fetch_cues(tracks: &[Track], selected_label: &str) -> Arc<[Cue]> {
    match select_track(tracks, selected_label) {
        Some(track) => track.shared_cues(),
        None => Arc::from(Vec::new()),
    }
}

/// Flatten cue texts, each followed by a blank line.
pub fn transcript_text(cues: &[Cue]) -> String {
    let mut text = String::with_capacity(cues.iter().map(|c| c.text.len() + 2).sum());
    for cue in cues {
        text.push_str(&cue.text);
        text.push_str("\n\n");
    }
    text
}

/// First cue containing `time`, in track order.
pub fn active_cue(cues: &[Cue], time: f64) -> Option<&Cue> {
    cues.iter().find(|cue| cue.contains(time))
}
