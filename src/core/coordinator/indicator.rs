use std::time::{Duration, Instant};

/// Timed activity light for recent receive/transmit traffic.
///
/// The light holds a one-shot deadline instead of a live timer: `light`
/// (re)arms the deadline, `tick` observes expiry. Lit and armed are the
/// same state; the only ways back to unlit are expiry or `unlight`.
#[derive(Debug, Clone)]
pub struct ActivityIndicator {
    deadline: Option<Instant>,
    hold: Duration,
}

impl ActivityIndicator {
    pub fn new(hold: Duration) -> Self {
        Self {
            deadline: None,
            hold,
        }
    }

    /// Light the indicator, restarting the hold period. A pending expiry
    /// is cancelled by the restart.
    pub fn light(&mut self, now: Instant) {
        self.deadline = Some(now + self.hold);
    }

    /// Turn the indicator off and cancel any pending expiry.
    pub fn unlight(&mut self) {
        self.deadline = None;
    }

    /// Expire the deadline if it has passed. Returns true if the light
    /// turned off on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_lit(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unlit() {
        let indicator = ActivityIndicator::new(Duration::from_millis(100));
        assert!(!indicator.is_lit());
    }

    #[test]
    fn test_light_and_expire() {
        let mut indicator = ActivityIndicator::new(Duration::from_millis(100));
        let start = Instant::now();

        indicator.light(start);
        assert!(indicator.is_lit());

        // Still within the hold period
        assert!(!indicator.tick(start + Duration::from_millis(99)));
        assert!(indicator.is_lit());

        // Past the hold period
        assert!(indicator.tick(start + Duration::from_millis(100)));
        assert!(!indicator.is_lit());
    }

    #[test]
    fn test_relight_restarts_hold() {
        let mut indicator = ActivityIndicator::new(Duration::from_millis(100));
        let start = Instant::now();

        indicator.light(start);
        indicator.light(start + Duration::from_millis(80));

        // The original deadline would have passed, the restarted one has not
        assert!(!indicator.tick(start + Duration::from_millis(120)));
        assert!(indicator.is_lit());

        assert!(indicator.tick(start + Duration::from_millis(180)));
        assert!(!indicator.is_lit());
    }

    #[test]
    fn test_unlight_cancels_deadline() {
        let mut indicator = ActivityIndicator::new(Duration::from_millis(100));
        let start = Instant::now();

        indicator.light(start);
        indicator.unlight();
        assert!(!indicator.is_lit());
        assert!(!indicator.tick(start + Duration::from_millis(200)));
    }
}
