//! Subtitle track source
//!
//! Each stream offers subtitles per language at
//! `{base_url}/api/stream/{stream_id}/subtitles/{code}`. A language is offered
//! exactly when that request succeeds; anything else (non-success status,
//! network failure, unparsable body) means no track is registered for it.
//! Nothing is retried.

mod error;
mod transport;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cue::{parse_vtt, Track, TrackKind};
use crate::player::ClockPlayer;

pub use error::SourceError;
pub use transport::{HttpTransport, Response, Transport};

/// A subtitle language the source probes for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Code used in the endpoint path (e.g. `en`)
    pub id: String,
    /// Track label shown to users (e.g. `English`)
    pub label: String,
}

impl Language {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Languages offered by the lecture platform.
pub fn default_languages() -> Vec<Language> {
    vec![Language::new("en", "English"), Language::new("de", "Deutsch")]
}

/// Raw subtitle document for one language.
#[derive(Debug, Clone)]
pub struct Subtitle {
    pub language: Language,
    pub body: String,
}

impl Subtitle {
    /// Parse the body into a captions track labelled with the language label.
    pub fn to_track(&self) -> Result<Track, SourceError> {
        let cues = parse_vtt(&self.body).map_err(|source| SourceError::Parse {
            language: self.language.id.clone(),
            source,
        })?;
        Ok(Track::new(TrackKind::Captions, &self.language.label, cues)
            .with_language(&self.language.id))
    }
}

/// Probes the subtitle endpoint of a stream for each configured language.
pub struct SubtitleSource {
    base_url: String,
    languages: Vec<Language>,
    transport: Box<dyn Transport>,
}

impl SubtitleSource {
    pub fn new(base_url: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            languages: default_languages(),
            transport,
        }
    }

    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = languages;
        self
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Endpoint for one (stream, language) pair.
    pub fn url(&self, stream_id: u64, code: &str) -> String {
        format!(
            "{}/api/stream/{}/subtitles/{}",
            self.base_url, stream_id, code
        )
    }

    /// Raw documents for every language the stream offers, in language order.
    pub fn available(&self, stream_id: u64) -> Vec<Subtitle> {
        let mut found = Vec::new();
        for language in &self.languages {
            let url = self.url(stream_id, &language.id);
            match self.transport.get(&url) {
                Ok(response) if response.is_success() => {
                    debug!(stream_id, language = %language.id, "subtitles available");
                    found.push(Subtitle {
                        language: language.clone(),
                        body: response.body,
                    });
                }
                Ok(response) => {
                    debug!(
                        stream_id,
                        language = %language.id,
                        status = response.status,
                        "subtitles not offered"
                    );
                }
                Err(e) => {
                    warn!(stream_id, language = %language.id, error = %e, "subtitle request failed");
                }
            }
        }
        found
    }

    /// Captions tracks for every language the stream offers.
    pub fn tracks(&self, stream_id: u64) -> Vec<Track> {
        self.available(stream_id)
            .iter()
            .filter_map(|subtitle| match subtitle.to_track() {
                Ok(track) => Some(track),
                Err(e) => {
                    warn!(stream_id, error = %e, "skipping unparsable subtitles");
                    None
                }
            })
            .collect()
    }

    /// Register every offered track with `player`.
    ///
    /// Returns true if at least one track was registered, i.e. a transcript
    /// is available for the stream.
    pub fn load_into(&self, player: &ClockPlayer, stream_id: u64) -> bool {
        let tracks = self.tracks(stream_id);
        let any = !tracks.is_empty();
        for track in tracks {
            player.add_text_track(track);
        }
        any
    }
}
