// 2D 遊戲骨架：精靈表載入、精靈裁切、固定步長遊戲迴圈
pub mod config;
pub mod error;
pub mod game;
pub mod graphics;
pub mod utils;

pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::game::{Game, LoopStats, LoopTotals};
pub use crate::graphics::{Sprite, SpriteSheet};
pub use crate::utils::FileLogger;
