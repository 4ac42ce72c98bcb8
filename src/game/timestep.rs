//! Fixed-timestep accumulator: elapsed wall time is converted into a whole
//! number of logic updates, the remainder carries over to the next call.

use std::time::Duration;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step_nanos: u64,
    pending_nanos: u64,
}

impl FixedTimestep {
    /// Rates above one update per nanosecond are clamped to a 1ns step.
    pub fn new(updates_per_second: u32) -> Self {
        let ups = u64::from(updates_per_second.max(1));
        Self {
            step_nanos: (NANOS_PER_SECOND / ups).max(1),
            pending_nanos: 0,
        }
    }

    pub fn step(&self) -> Duration {
        Duration::from_nanos(self.step_nanos)
    }

    /// Accumulate `elapsed` and return how many updates are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let elapsed = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.pending_nanos = self.pending_nanos.saturating_add(elapsed);

        let due = self.pending_nanos / self.step_nanos;
        self.pending_nanos %= self.step_nanos;
        u32::try_from(due).unwrap_or(u32::MAX)
    }

    /// Fraction of a step accumulated but not yet consumed, in `[0, 1)`.
    pub fn pending(&self) -> f64 {
        self.pending_nanos as f64 / self.step_nanos as f64
    }

    pub fn reset(&mut self) {
        self.pending_nanos = 0;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_length() {
        assert_eq!(FixedTimestep::new(60).step(), Duration::from_nanos(16_666_666));
        assert_eq!(FixedTimestep::new(1).step(), Duration::from_secs(1));
    }

    #[test]
    fn test_whole_steps() {
        let mut timestep = FixedTimestep::new(60);
        let step = timestep.step();
        assert_eq!(timestep.advance(step * 3), 3);
        assert_eq!(timestep.pending(), 0.0);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut timestep = FixedTimestep::new(60);
        let half = timestep.step() / 2;
        assert_eq!(timestep.advance(half), 0);
        assert!(timestep.pending() > 0.49 && timestep.pending() < 0.51);
        assert_eq!(timestep.advance(half), 1);
        assert!(timestep.pending() < 1.0);
    }

    #[test]
    fn test_one_second_is_ups_updates() {
        let mut timestep = FixedTimestep::new(60);
        let mut updates = 0;
        for _ in 0..100 {
            updates += timestep.advance(Duration::from_millis(10));
        }
        assert_eq!(updates, 60);
    }

    #[test]
    fn test_rate_above_nanosecond_resolution() {
        let mut timestep = FixedTimestep::new(2_000_000_000);
        assert_eq!(timestep.step(), Duration::from_nanos(1));
        assert_eq!(timestep.advance(Duration::from_millis(1)), 1_000_000);
        assert_eq!(timestep.pending(), 0.0);
    }

    #[test]
    fn test_reset_drops_pending() {
        let mut timestep = FixedTimestep::new(10);
        timestep.advance(Duration::from_millis(50));
        timestep.reset();
        assert_eq!(timestep.advance(Duration::from_millis(50)), 0);
    }
}
