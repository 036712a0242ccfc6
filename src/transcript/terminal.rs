//! Line-oriented terminal render target.
//!
//! Prints one line per newly active cue: `[mm:ss] text`, truncated to the
//! terminal width. A redraw (`update`) with a different cue count prints a
//! short summary line. Scrolling is implicit in the terminal.

use std::io::Write;
use std::sync::Arc;

use unicode_width::UnicodeWidthChar;

use super::render::{CueKey, RenderTarget, ScrollOptions};
use crate::cue::{format_timestamp, Cue};
use crate::theme::Theme;

pub struct TerminalTarget<W: Write + Send> {
    out: W,
    theme: Theme,
    width: Option<usize>,
    rows: Arc<[Cue]>,
    active: Option<CueKey>,
    last_printed: Option<CueKey>,
}

impl<W: Write + Send> TerminalTarget<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            width: None,
            rows: Arc::from(Vec::new()),
            active: None,
            last_printed: None,
        }
    }

    /// Truncate printed lines to `width` columns.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn active(&self) -> Option<CueKey> {
        self.active
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_cue(&mut self, cue: &Cue) {
        let stamp = format!("[{}]", format_timestamp(cue.start_time));
        let text = cue.text.replace('\n', " ");
        let text = match self.width {
            Some(width) => truncate(&text, width.saturating_sub(stamp.len() + 1)),
            None => text,
        };
        // Write errors (closed pipe) are not fatal for a display
        let _ = writeln!(
            self.out,
            "{} {}",
            self.theme.secondary_text(&stamp),
            self.theme.accent_text(&text)
        );
        let _ = self.out.flush();
    }
}

impl<W: Write + Send> RenderTarget for TerminalTarget<W> {
    fn is_visible(&self) -> bool {
        true
    }

    fn update(&mut self, cues: &Arc<[Cue]>) {
        if cues.len() != self.rows.len() {
            let line = format!("-- transcript: {} cues --", cues.len());
            let _ = writeln!(self.out, "{}", self.theme.secondary_text(&line));
        }
        self.rows = Arc::clone(cues);
    }

    fn clear_highlights(&mut self) {
        self.active = None;
    }

    fn mark(&mut self, key: CueKey) -> bool {
        let rows = Arc::clone(&self.rows);
        let Some(cue) = rows.iter().find(|cue| CueKey::of(cue) == key) else {
            return false;
        };
        self.active = Some(key);
        if self.last_printed != Some(key) {
            self.last_printed = Some(key);
            self.print_cue(cue);
        }
        true
    }

    fn scroll_into_view(&mut self, _key: CueKey, _options: ScrollOptions) {}
}

/// Cut `text` to at most `max` display columns, ending in `…` if cut.
fn truncate(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
