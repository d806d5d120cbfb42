// File: crates/indicator-core/src/throttle.rs
// Summary: Resize throttle: leading-edge fire, intermediate events coalesced into one trailing run.

use std::time::{Duration, Instant};

use tracing::trace;

/// Throttles resize widths. Events inside the interval replace a single pending width.
#[derive(Clone, Debug)]
pub struct ResizeThrottle {
    interval: Duration,
    last_run: Option<Instant>,
    pending: Option<f32>,
}

impl ResizeThrottle {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last_run: None, pending: None }
    }

    /// Record a resize to `width` at `now`; true when it should run immediately.
    /// Otherwise the width is kept for [`Self::take_trailing`].
    pub fn hit(&mut self, now: Instant, width: f32) -> bool {
        if self.ready(now) {
            self.last_run = Some(now);
            self.pending = None;
            true
        } else {
            trace!(width, "resize coalesced");
            self.pending = Some(width);
            false
        }
    }

    /// The coalesced width, once, when one is owed and the interval has passed.
    pub fn take_trailing(&mut self, now: Instant) -> Option<f32> {
        if self.pending.is_some() && self.ready(now) {
            self.last_run = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    fn ready(&self, now: Instant) -> bool {
        match self.last_run {
            None => true,
            Some(t) => now.saturating_duration_since(t) >= self.interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_runs_once_then_trails_once_with_latest_width() {
        let t0 = Instant::now();
        let mut th = ResizeThrottle::new(Duration::from_millis(250));
        assert!(th.hit(t0, 1000.0));
        assert!(!th.hit(t0 + Duration::from_millis(10), 900.0));
        assert!(!th.hit(t0 + Duration::from_millis(100), 500.0));
        assert_eq!(th.take_trailing(t0 + Duration::from_millis(200)), None);
        assert_eq!(th.take_trailing(t0 + Duration::from_millis(250)), Some(500.0));
        assert_eq!(th.take_trailing(t0 + Duration::from_millis(600)), None);
    }

    #[test]
    fn leading_run_drops_a_stale_pending_width() {
        let t0 = Instant::now();
        let mut th = ResizeThrottle::new(Duration::from_millis(250));
        assert!(th.hit(t0, 800.0));
        assert!(!th.hit(t0 + Duration::from_millis(50), 700.0));
        assert!(th.hit(t0 + Duration::from_millis(400), 650.0));
        assert_eq!(th.take_trailing(t0 + Duration::from_millis(900)), None);
    }
}
