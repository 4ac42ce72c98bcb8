pub mod assets;
pub mod system;
pub mod timing;
pub mod window;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub use assets::{AssetsConfig, SheetConfig};
pub use system::{LogLevel, SystemConfig};
pub use timing::TimingConfig;
pub use window::WindowConfig;

/// 固定步長以奈秒計，超過此值步長會變成零
pub const MAX_UPDATES_PER_SECOND: u32 = 1_000_000_000;

/// 精靈表單邊上限（像素）
pub const MAX_SHEET_DIMENSION: usize = 16_384;

/// 全局配置結構
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    pub assets: AssetsConfig,
    pub system: SystemConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 檔案載入配置，缺少的欄位使用預設值
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// 檢查無法運作的數值
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::Config(format!(
                "視窗尺寸 {}x{} 不可為零",
                self.window.width, self.window.height
            )));
        }
        let ups = self.timing.updates_per_second;
        if ups == 0 || ups > MAX_UPDATES_PER_SECOND {
            return Err(Error::Config(format!(
                "updates_per_second 必須介於 1 到 {}，目前為 {}",
                MAX_UPDATES_PER_SECOND, ups
            )));
        }
        if self.timing.max_fps == Some(0) {
            return Err(Error::Config("max_fps 必須大於零".to_string()));
        }
        if self.timing.stats_interval_ms == 0 {
            return Err(Error::Config("stats_interval_ms 必須大於零".to_string()));
        }
        if let Some(sheet) = &self.assets.sheet {
            if sheet.sprite_side == 0 {
                return Err(Error::Config("sprite_side 必須大於零".to_string()));
            }
            if sheet.width > MAX_SHEET_DIMENSION || sheet.height > MAX_SHEET_DIMENSION {
                return Err(Error::Config(format!(
                    "精靈表尺寸 {}x{} 超過上限 {}",
                    sheet.width, sheet.height, MAX_SHEET_DIMENSION
                )));
            }
        }
        Ok(())
    }
}

/// 配置構建器
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::new(),
        }
    }

    pub fn window_config(mut self, config: WindowConfig) -> Self {
        self.config.window = config;
        self
    }

    pub fn timing_config(mut self, config: TimingConfig) -> Self {
        self.config.timing = config;
        self
    }

    pub fn assets_config(mut self, config: AssetsConfig) -> Self {
        self.config.assets = config;
        self
    }

    pub fn system_config(mut self, config: SystemConfig) -> Self {
        self.config.system = config;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
