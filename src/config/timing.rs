use serde::{Deserialize, Serialize};

/// 遊戲迴圈計時配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// 每秒邏輯更新次數 (UPS)
    pub updates_per_second: u32,
    /// 每秒最多渲染幀數，`None` 表示不限制
    pub max_fps: Option<u32>,
    /// 統計 UPS/FPS 的時間窗（毫秒）
    pub stats_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            updates_per_second: 60,
            max_fps: None,
            stats_interval_ms: 1000,
        }
    }
}
