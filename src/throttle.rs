//! Trailing-edge rate limiter for resize signals.
//!
//! The first signal arms a deadline one cooldown away; signals arriving
//! while the deadline is pending are dropped, not queued. The caller pumps
//! [`Throttle::due`] and performs the work when it fires, sampling whatever
//! geometry is current at that moment. The engine therefore reflects the
//! last geometry observed after the cooldown elapses, never an intermediate
//! size.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default)]
pub struct Throttle {
    deadline: Option<Instant>,
}

impl Throttle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a signal. Returns `true` when the signal armed a new
    /// deadline, `false` when it fell into an existing cooldown and was
    /// dropped.
    pub fn signal(&mut self, now: Instant, cooldown: Duration) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + cooldown);
        true
    }

    /// True once the armed deadline has elapsed. Clears the deadline so the
    /// next signal starts a fresh cooldown.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: Duration = Duration::from_millis(200);

    #[test]
    fn burst_of_signals_arms_once() {
        let mut throttle = Throttle::new();
        let start = Instant::now();

        assert!(throttle.signal(start, COOLDOWN));
        assert!(!throttle.signal(start + Duration::from_millis(10), COOLDOWN));
        assert!(!throttle.signal(start + Duration::from_millis(20), COOLDOWN));

        assert!(!throttle.due(start + Duration::from_millis(199)));
        assert!(throttle.due(start + COOLDOWN));
        // The deadline was consumed; nothing further is due.
        assert!(!throttle.due(start + Duration::from_millis(400)));
    }

    #[test]
    fn rearms_after_firing() {
        let mut throttle = Throttle::new();
        let start = Instant::now();

        assert!(throttle.signal(start, COOLDOWN));
        assert!(throttle.due(start + COOLDOWN));
        assert!(throttle.signal(start + Duration::from_millis(300), COOLDOWN));
        assert!(throttle.pending());
        assert!(throttle.due(start + Duration::from_millis(500)));
    }

    #[test]
    fn idle_throttle_is_never_due() {
        let mut throttle = Throttle::new();
        assert!(!throttle.pending());
        assert!(!throttle.due(Instant::now()));
    }
}
