//! Host-driven clock holding at most one pending step

use std::time::Duration;

/// Shortest delay a step can be scheduled with. Keeps a chain of zero
/// delays from spinning forever inside a single `advance`.
pub(crate) const MIN_STEP: Duration = Duration::from_millis(1);

/// Virtual clock advanced by the host, with a single cancelable continuation.
///
/// Scheduling replaces the pending continuation, so an older one can never
/// fire after a newer one was scheduled or after `cancel`. Time saturates at
/// `Duration::MAX`; a continuation pushed that far never comes due.
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    now: Duration,
    /// Due time of the pending continuation
    pending: Option<Duration>,
}

impl Timeline {
    /// Absolute time `elapsed` from now; saturates instead of overflowing
    pub(crate) fn deadline_after(&self, elapsed: Duration) -> Duration {
        self.now.saturating_add(elapsed)
    }

    /// Replace the pending continuation with one due after `delay`
    pub(crate) fn schedule(&mut self, delay: Duration) {
        self.pending = Some(self.deadline_after(delay.max(MIN_STEP)));
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    pub(crate) fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn time_until_next(&self) -> Option<Duration> {
        self.pending
            .filter(|due| *due != Duration::MAX)
            .map(|due| due.saturating_sub(self.now))
    }

    /// Take the pending continuation if it is due by `deadline`.
    ///
    /// The clock jumps to the continuation's due time so that whatever it
    /// schedules next is measured from there, not from the deadline.
    pub(crate) fn pop_due(&mut self, deadline: Duration) -> bool {
        match self.pending {
            Some(due) if due <= deadline && due != Duration::MAX => {
                self.pending = None;
                self.now = self.now.max(due);
                true
            }
            _ => false,
        }
    }

    /// Move the clock to `deadline` once every due step has run
    pub(crate) fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_due_respects_deadline() {
        let mut timeline = Timeline::default();
        timeline.schedule(Duration::from_millis(10));
        assert!(!timeline.pop_due(Duration::from_millis(9)));
        assert!(timeline.pop_due(Duration::from_millis(10)));
        assert_eq!(timeline.deadline_after(Duration::ZERO), Duration::from_millis(10));
        assert!(!timeline.is_scheduled());
    }

    #[test]
    fn test_cancel_clears_pending() {
        let mut timeline = Timeline::default();
        timeline.schedule(Duration::from_millis(5));
        timeline.cancel();
        assert!(!timeline.is_scheduled());
        assert_eq!(timeline.time_until_next(), None);
        assert!(!timeline.pop_due(Duration::from_secs(1)));
    }

    #[test]
    fn test_zero_delay_is_clamped() {
        let mut timeline = Timeline::default();
        timeline.schedule(Duration::ZERO);
        assert_eq!(timeline.time_until_next(), Some(MIN_STEP));
    }

    #[test]
    fn test_huge_delays_saturate() {
        let mut timeline = Timeline::default();
        timeline.settle(Duration::from_secs(1));
        timeline.schedule(Duration::from_secs(2));

        let deadline = timeline.deadline_after(Duration::MAX);
        assert_eq!(deadline, Duration::MAX);
        assert!(timeline.pop_due(deadline));
        assert_eq!(timeline.deadline_after(Duration::ZERO), Duration::from_secs(3));

        // Out of clock: stays pending but never fires
        timeline.schedule(Duration::MAX);
        assert!(timeline.is_scheduled());
        assert_eq!(timeline.time_until_next(), None);
        assert!(!timeline.pop_due(deadline));
        timeline.settle(deadline);
        timeline.schedule(Duration::from_millis(5));
        assert!(!timeline.pop_due(deadline));
    }
}
