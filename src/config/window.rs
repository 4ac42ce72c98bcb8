use serde::{Deserialize, Serialize};

/// 視窗相關配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: String::from("Game"),
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}
