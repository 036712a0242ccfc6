//! Render targets for the transcript view.
//!
//! A render target owns the displayed cue rows. The synchronizer pushes the
//! full cue list with [`RenderTarget::update`] and the target redraws from it;
//! rows are keyed by their cue's start time so the active one can be marked.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::cue::Cue;

/// Row key: the exact start time of a cue.
///
/// Compares the bit pattern of the `f64`, so two rows match only if their
/// start times are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CueKey(u64);

impl CueKey {
    pub fn new(start_time: f64) -> Self {
        Self(start_time.to_bits())
    }

    pub fn of(cue: &Cue) -> Self {
        Self::new(cue.start_time)
    }

    pub fn start_time(&self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// How scrolling to a row should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Where the row should end up in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Center,
        }
    }
}

/// A view that displays transcript rows.
pub trait RenderTarget: Send {
    /// Whether the target is attached to a visible container.
    fn is_visible(&self) -> bool;

    /// Replace all rows with the given cue list.
    fn update(&mut self, cues: &Arc<[Cue]>);

    /// Remove the highlight marker from every row.
    fn clear_highlights(&mut self);

    /// Mark the row with `key` as active. Returns false if no such row exists.
    fn mark(&mut self, key: CueKey) -> bool;

    /// Bring the row with `key` into view.
    fn scroll_into_view(&mut self, key: CueKey, options: ScrollOptions);
}

/// Notifications emitted by a [`ChannelTarget`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// Full cue list to redraw from
    Update(Arc<[Cue]>),
    ClearHighlights,
    Mark(CueKey),
    ScrollIntoView(CueKey, ScrollOptions),
}

/// Visibility flag shared between a [`ChannelTarget`] and the view that
/// receives its events.
///
/// The view flips it when its container is hidden or shown; the next sync
/// cycle sees the change.
#[derive(Debug, Clone)]
pub struct Visibility(Arc<AtomicBool>);

impl Visibility {
    fn new(visible: bool) -> Self {
        Self(Arc::new(AtomicBool::new(visible)))
    }

    pub fn set(&self, visible: bool) {
        self.0.store(visible, Ordering::SeqCst);
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Render target that forwards every notification over a channel.
///
/// The receiving side is the actual view. Rows are tracked locally so
/// [`RenderTarget::mark`] can report whether a row exists.
pub struct ChannelTarget {
    tx: Sender<RenderEvent>,
    rows: Vec<CueKey>,
    visible: Visibility,
}

impl ChannelTarget {
    pub fn new(tx: Sender<RenderEvent>) -> Self {
        Self {
            tx,
            rows: Vec::new(),
            visible: Visibility::new(true),
        }
    }

    /// Handle the receiving view keeps to report hide/show after binding.
    pub fn visibility(&self) -> Visibility {
        self.visible.clone()
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    fn send(&self, event: RenderEvent) {
        // Ignore send errors (the view may already be gone)
        let _ = self.tx.send(event);
    }
}

impl RenderTarget for ChannelTarget {
    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn update(&mut self, cues: &Arc<[Cue]>) {
        self.rows = cues.iter().map(CueKey::of).collect();
        self.send(RenderEvent::Update(Arc::clone(cues)));
    }

    fn clear_highlights(&mut self) {
        self.send(RenderEvent::ClearHighlights);
    }

    fn mark(&mut self, key: CueKey) -> bool {
        if !self.rows.contains(&key) {
            return false;
        }
        self.send(RenderEvent::Mark(key));
        true
    }

    fn scroll_into_view(&mut self, key: CueKey, options: ScrollOptions) {
        self.send(RenderEvent::ScrollIntoView(key, options));
    }
}
