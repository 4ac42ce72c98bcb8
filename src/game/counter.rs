use std::time::{Duration, Instant};

/// UPS/FPS measured over the last completed interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub ups: u32,
    pub fps: u32,
}

impl LoopStats {
    /// 視窗標題，例如 `Game UPS: 60 FPS: 1234`
    pub fn title(&self, base: &str) -> String {
        format!("{} UPS: {} FPS: {}", base, self.ups, self.fps)
    }
}

#[derive(Debug, Clone)]
pub struct FrameCounter {
    interval: Duration,
    last_reset: Instant,
    updates: u32,
    frames: u32,
}

impl FrameCounter {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_reset: now,
            updates: 0,
            frames: 0,
        }
    }

    pub fn update(&mut self) {
        self.updates = self.updates.wrapping_add(1);
    }

    pub fn frame(&mut self) {
        self.frames = self.frames.wrapping_add(1);
    }

    /// Returns the counters and starts a new interval once more than
    /// `interval` has passed since the previous reset.
    pub fn tick(&mut self, now: Instant) -> Option<LoopStats> {
        if now.saturating_duration_since(self.last_reset) <= self.interval {
            return None;
        }

        let stats = LoopStats {
            ups: self.updates,
            fps: self.frames,
        };
        self.updates = 0;
        self.frames = 0;
        self.last_reset = now;
        Some(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_stats_within_interval() {
        let start = Instant::now();
        let mut counter = FrameCounter::new(Duration::from_secs(1), start);
        counter.update();
        counter.frame();
        assert_eq!(counter.tick(start + Duration::from_millis(500)), None);
        assert_eq!(counter.tick(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_reports_and_resets() {
        let start = Instant::now();
        let mut counter = FrameCounter::new(Duration::from_secs(1), start);
        for _ in 0..60 {
            counter.update();
        }
        for _ in 0..240 {
            counter.frame();
        }

        let later = start + Duration::from_millis(1001);
        assert_eq!(counter.tick(later), Some(LoopStats { ups: 60, fps: 240 }));

        counter.frame();
        let next = later + Duration::from_millis(1001);
        assert_eq!(counter.tick(next), Some(LoopStats { ups: 0, fps: 1 }));
    }

    #[test]
    fn test_title_format() {
        let stats = LoopStats { ups: 60, fps: 300 };
        assert_eq!(stats.title("Game"), "Game UPS: 60 FPS: 300");
    }
}
