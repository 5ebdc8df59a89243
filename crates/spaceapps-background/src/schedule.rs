//! Frame scheduling for the host event loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared flag that stops a frame chain from re-scheduling itself.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Holds at most one pending frame request.
///
/// Every frame step asks for exactly one successor; asking again while a
/// request is pending is a no-op, so requests never pile up.
#[derive(Debug)]
pub struct FrameScheduler {
    /// Delay between a request and its frame.
    interval: Duration,
    /// Deadline of the pending request.
    pending: Option<Instant>,
    token: CancellationToken,
}

impl FrameScheduler {
    pub fn new(interval: Duration, token: CancellationToken) -> Self {
        Self {
            interval,
            pending: None,
            token,
        }
    }

    /// Request the next frame one interval from `now`.
    ///
    /// Returns `false` when a request is already pending or the token has
    /// been cancelled.
    pub fn request_frame(&mut self, now: Instant) -> bool {
        self.schedule(now + self.interval)
    }

    /// Request a frame due immediately.
    pub fn request_immediate(&mut self, now: Instant) -> bool {
        self.schedule(now)
    }

    fn schedule(&mut self, due: Instant) -> bool {
        if self.token.is_cancelled() {
            self.pending = None;
            return false;
        }
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(due);
        true
    }

    /// Consume the pending request if it is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.token.is_cancelled() {
            self.pending = None;
            return false;
        }
        match self.pending {
            Some(due) if now >= due => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// How long the host may wait before the pending frame is due.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|due| due.saturating_duration_since(now))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Change the interval used by subsequent requests.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Cancel the token and drop the pending request.
    pub fn cancel(&mut self) {
        self.token.cancel();
        self.pending = None;
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}
