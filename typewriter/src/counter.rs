//! Number that counts up to a target with an ease-out curve

use std::time::Duration;

use crate::target::DisplayTarget;

/// Animates `0 ..= target` over a fixed duration.
///
/// Frame driven rather than step driven: the host calls [`Counter::advance`]
/// once per frame and the counter renders whatever value the curve gives.
#[derive(Debug)]
pub struct Counter<T: DisplayTarget> {
    target: T,
    goal: u64,
    duration: Duration,
    /// `None` until started
    elapsed: Option<Duration>,
    value: u64,
}

impl<T: DisplayTarget> Counter<T> {
    pub fn new(target: T, goal: u64) -> Self {
        Self::with_duration(target, goal, Duration::from_millis(2000))
    }

    pub fn with_duration(target: T, goal: u64, duration: Duration) -> Self {
        Self {
            target,
            goal,
            duration,
            elapsed: None,
            value: 0,
        }
    }

    /// Start counting; later calls are ignored
    pub fn start(&mut self) {
        if self.elapsed.is_some() {
            return;
        }
        self.elapsed = Some(Duration::ZERO);
        self.render();
    }

    pub fn advance(&mut self, delta: Duration) {
        let Some(elapsed) = self.elapsed else {
            return;
        };
        if self.is_complete() {
            return;
        }
        self.elapsed = Some(elapsed + delta);
        self.render();
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_started(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        match self.elapsed {
            None => 0.0,
            Some(_) if self.duration.is_zero() => 1.0,
            Some(elapsed) => (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0),
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    fn render(&mut self) {
        let progress = self.progress();
        self.value = if progress >= 1.0 {
            self.goal
        } else {
            (self.goal as f64 * ease_out_quart(progress)).floor() as u64
        };
        self.target.set_text(&self.value.to_string());
    }
}

fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_eases_to_goal() {
        let mut counter = Counter::with_duration(String::new(), 100, Duration::from_millis(1000));
        counter.advance(Duration::from_millis(500));
        assert!(!counter.is_started());
        assert_eq!(counter.target(), "");

        counter.start();
        assert_eq!(counter.target(), "0");

        counter.advance(Duration::from_millis(500));
        // 1 - 0.5^4 = 0.9375
        assert_eq!(counter.value(), 93);
        assert_eq!(counter.target(), "93");

        counter.advance(Duration::from_millis(600));
        assert!(counter.is_complete());
        assert_eq!(counter.value(), 100);
        assert_eq!(counter.target(), "100");
    }

    #[test]
    fn test_counter_is_monotonic() {
        let mut counter = Counter::new(String::new(), 250);
        counter.start();
        let mut last = 0;
        while !counter.is_complete() {
            counter.advance(Duration::from_millis(16));
            assert!(counter.value() >= last);
            last = counter.value();
        }
        assert_eq!(last, 250);
    }

    #[test]
    fn test_zero_duration_jumps_to_goal() {
        let mut counter = Counter::with_duration(String::new(), 42, Duration::ZERO);
        counter.start();
        assert_eq!(counter.value(), 42);
        assert!(counter.is_complete());
    }
}
