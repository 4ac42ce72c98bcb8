pub mod counter;
pub mod display;
pub mod runner;
pub mod timestep;

pub use counter::{FrameCounter, LoopStats};
pub use display::Display;
pub use runner::{Game, LoopTotals};
pub use timestep::FixedTimestep;

use log::debug;

use crate::config::Config;
use crate::error::Result;

/// 開啟視窗並執行遊戲迴圈，直到視窗被關閉
pub fn run(config: &Config) -> Result<LoopTotals> {
    let mut display = Display::new(&config.window)?;
    let mut game = Game::new(config.timing.clone());
    game.start()?;

    while display.is_open() {
        if let Some(stats) = game.latest_stats() {
            let title = stats.title(&config.window.title);
            debug!("{}", title);
            display.set_title(&title);
        }
        display.present()?;
    }

    game.stop()
}
