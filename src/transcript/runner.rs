//! Fixed-period sync loop
//!
//! Ticks a [`TranscriptSync`] on a dedicated thread until stopped. The
//! synchronizer's own minimum-gap guard still applies, so a late wakeup
//! followed by an early one never syncs twice within the gap.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::sync::{TickOutcome, TranscriptSync};

/// Default period between ticks.
pub const SYNC_INTERVAL: Duration = Duration::from_secs(1);

/// Longest single sleep, so a stop request is noticed promptly.
const POLL_SLICE: Duration = Duration::from_millis(50);

/// Cloneable flag that ends a running sync loop.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Tick `sync` every `interval` on the current thread until `stop` is set.
///
/// `on_tick` sees every outcome, skipped ones included.
pub fn run_sync_loop(
    sync: &mut TranscriptSync,
    interval: Duration,
    stop: &StopHandle,
    mut on_tick: impl FnMut(&TranscriptSync, &TickOutcome),
) {
    let mut next = Instant::now();
    while !stop.is_stopped() {
        let outcome = sync.tick();
        on_tick(sync, &outcome);

        next += interval;
        let now = Instant::now();
        if next < now {
            // Fell behind; skip missed periods instead of bursting
            next = now;
        }
        while !stop.is_stopped() {
            let remaining = next.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            thread::sleep(remaining.min(POLL_SLICE));
        }
    }
}

/// A sync loop running on its own thread.
pub struct SyncLoop {
    stop: StopHandle,
    handle: JoinHandle<TranscriptSync>,
}

impl SyncLoop {
    /// Move `sync` onto a new thread and start ticking it.
    pub fn spawn<F>(mut sync: TranscriptSync, interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(&TranscriptSync, &TickOutcome) + Send + 'static,
    {
        let stop = StopHandle::new();
        let thread_stop = stop.clone();
        let handle = thread::spawn(move || {
            run_sync_loop(&mut sync, interval, &thread_stop, &mut on_tick);
            sync
        });
        Self { stop, handle }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Stop the loop and hand the synchronizer back.
    pub fn stop(self) -> thread::Result<TranscriptSync> {
        self.stop.stop();
        self.handle.join()
    }
}
