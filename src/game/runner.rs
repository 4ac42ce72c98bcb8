/*
遊戲迴圈執行緒
==============
單一背景執行緒以固定步長更新邏輯，並統計每秒更新數與幀數
*/

use log::{debug, error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::counter::{FrameCounter, LoopStats};
use super::timestep::FixedTimestep;
use crate::config::TimingConfig;
use crate::error::{Error, Result};

const THREAD_NAME: &str = "graphics";

/// 執行緒結束時回傳的累計數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopTotals {
    pub updates: u64,
    pub frames: u64,
}

/// 遊戲迴圈驅動器
pub struct Game {
    timing: TimingConfig,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<LoopTotals>>,
    stats: Option<Receiver<LoopStats>>,
}

impl Game {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
            stats: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// 啟動背景執行緒；已在執行時不做任何事
    pub fn start(&mut self) -> Result<()> {
        if self.worker.is_some() {
            warn!("遊戲迴圈已在執行");
            return Ok(());
        }

        self.running.store(true, Ordering::SeqCst);
        let (tx, rx) = mpsc::channel();
        let running = Arc::clone(&self.running);
        let timing = self.timing.clone();

        let spawned = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || run_loop(&running, &timing, &tx));

        match spawned {
            Ok(handle) => {
                self.worker = Some(handle);
                self.stats = Some(rx);
                info!(
                    "遊戲迴圈啟動: {} UPS, 最高 FPS {:?}",
                    self.timing.updates_per_second, self.timing.max_fps
                );
                Ok(())
            }
            Err(e) => {
                self.running.store(false, Ordering::SeqCst);
                Err(Error::Io(e))
            }
        }
    }

    /// 清除執行旗標並等待執行緒結束
    pub fn stop(&mut self) -> Result<LoopTotals> {
        self.running.store(false, Ordering::SeqCst);

        let Some(handle) = self.worker.take() else {
            debug!("遊戲迴圈未在執行");
            return Ok(LoopTotals::default());
        };

        match handle.join() {
            Ok(totals) => {
                info!(
                    "遊戲迴圈結束: 共 {} 次更新, {} 幀",
                    totals.updates, totals.frames
                );
                Ok(totals)
            }
            Err(_) => {
                error!("遊戲迴圈執行緒異常結束");
                Err(Error::ThreadJoin)
            }
        }
    }

    /// 取出最新一筆統計，較舊的會被丟棄
    pub fn latest_stats(&self) -> Option<LoopStats> {
        self.stats.as_ref()?.try_iter().last()
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        if self.worker.is_some() {
            let _ = self.stop();
        }
    }
}

fn run_loop(running: &AtomicBool, timing: &TimingConfig, stats: &Sender<LoopStats>) -> LoopTotals {
    let mut timestep = FixedTimestep::new(timing.updates_per_second);
    let frame_budget = timing
        .max_fps
        .filter(|&fps| fps > 0)
        .map(|fps| Duration::from_secs(1) / fps);

    let start = Instant::now();
    let mut counter = FrameCounter::new(Duration::from_millis(timing.stats_interval_ms), start);
    let mut last_update = start;
    let mut totals = LoopTotals::default();

    while running.load(Ordering::SeqCst) {
        let loop_start = Instant::now();
        let due = timestep.advance(loop_start.duration_since(last_update));
        last_update = loop_start;

        for _ in 0..due {
            counter.update();
            totals.updates += 1;
        }

        counter.frame();
        totals.frames += 1;

        if let Some(snapshot) = counter.tick(Instant::now()) {
            debug!("UPS: {} FPS: {}", snapshot.ups, snapshot.fps);
            // 接收端已關閉時只是沒人看統計
            let _ = stats.send(snapshot);
        }

        match frame_budget {
            Some(budget) => {
                let spent = loop_start.elapsed();
                if spent < budget {
                    thread::sleep(budget - spent);
                }
            }
            None => thread::yield_now(),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_timing() -> TimingConfig {
        TimingConfig {
            updates_per_second: 1000,
            max_fps: Some(500),
            stats_interval_ms: 10,
        }
    }

    #[test]
    fn test_start_and_stop() {
        let mut game = Game::new(fast_timing());
        assert!(!game.is_running());

        game.start().unwrap();
        assert!(game.is_running());
        thread::sleep(Duration::from_millis(100));

        let totals = game.stop().unwrap();
        assert!(!game.is_running());
        assert!(totals.updates > 0);
        assert!(totals.frames > 0);
    }

    #[test]
    fn test_stats_are_published() {
        let mut game = Game::new(fast_timing());
        game.start().unwrap();
        thread::sleep(Duration::from_millis(100));

        let stats = game.latest_stats();
        game.stop().unwrap();
        assert!(stats.is_some());
    }

    #[test]
    fn test_stop_without_start() {
        let mut game = Game::new(TimingConfig::default());
        assert_eq!(game.stop().unwrap(), LoopTotals::default());
        assert_eq!(game.latest_stats(), None);
    }

    #[test]
    fn test_double_start_keeps_one_worker() {
        let mut game = Game::new(fast_timing());
        game.start().unwrap();
        game.start().unwrap();
        game.stop().unwrap();
        assert_eq!(game.stop().unwrap(), LoopTotals::default());
    }

    #[test]
    fn test_drop_stops_worker() {
        let running = {
            let mut game = Game::new(fast_timing());
            game.start().unwrap();
            Arc::clone(&game.running)
        };
        assert!(!running.load(Ordering::SeqCst));
    }
}
