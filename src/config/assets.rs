use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 啟動時載入的精靈表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
    /// 單一精靈的邊長（像素）
    pub sprite_side: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub sheet: Option<SheetConfig>,
}
