use std::time::{Duration, Instant};

/// Yields whole seconds elapsed between polls. A ticker belongs to the view
/// that polls it; dropping the view stops it, and `reset` restarts it when the
/// state that drives it changes.
#[derive(Debug, Clone)]
pub struct SecondTicker {
    last: Instant,
}

impl SecondTicker {
    pub fn start(now: Instant) -> Self {
        SecondTicker { last: now }
    }

    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }

    /// Number of one-second ticks since the last poll. Sub-second remainders
    /// carry over to the next poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let ticks = elapsed.as_secs() as u32;
        self.last += Duration::from_secs(u64::from(ticks));
        ticks
    }

    /// Time left until the next tick, used to schedule a repaint.
    pub fn until_next(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        Duration::from_secs(1).saturating_sub(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_yields_whole_seconds() {
        let t0 = Instant::now();
        let mut ticker = SecondTicker::start(t0);
        assert_eq!(ticker.poll(t0 + Duration::from_millis(999)), 0);
        assert_eq!(ticker.poll(t0 + Duration::from_millis(1500)), 1);
        assert_eq!(ticker.poll(t0 + Duration::from_millis(2000)), 1);
        assert_eq!(ticker.poll(t0 + Duration::from_millis(5100)), 3);
    }

    #[test]
    fn test_reset_discards_partial_second() {
        let t0 = Instant::now();
        let mut ticker = SecondTicker::start(t0);
        ticker.reset(t0 + Duration::from_millis(900));
        assert_eq!(ticker.poll(t0 + Duration::from_millis(1800)), 0);
        assert_eq!(ticker.poll(t0 + Duration::from_millis(1900)), 1);
    }

    #[test]
    fn test_until_next() {
        let t0 = Instant::now();
        let ticker = SecondTicker::start(t0);
        assert_eq!(ticker.until_next(t0 + Duration::from_millis(250)), Duration::from_millis(750));
        assert_eq!(ticker.until_next(t0 + Duration::from_secs(3)), Duration::ZERO);
    }
}
