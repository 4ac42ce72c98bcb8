use std::io;
use thiserror::Error;

/// 遊戲骨架的錯誤類型
#[derive(Error, Debug)]
pub enum Error {
    /// IO 錯誤
    #[error("IO 錯誤: {0}")]
    Io(#[from] io::Error),

    /// 圖片解碼錯誤
    #[error("圖片解碼錯誤: {0}")]
    Image(#[from] image::ImageError),

    /// 設定檔解析錯誤
    #[error("設定檔解析錯誤: {0}")]
    Json(#[from] serde_json::Error),

    /// 圖片比要求的精靈表尺寸小
    #[error("精靈表圖片只有 {actual_width}x{actual_height}，要求 {width}x{height}")]
    SheetTooSmall {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// 像素緩衝長度與寬高不符
    #[error("像素緩衝有 {actual} 個像素，應為 {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// 寬高相乘超出可定址範圍
    #[error("精靈表尺寸 {width}x{height} 過大")]
    SheetSize { width: usize, height: usize },

    #[error("精靈邊長必須大於零")]
    InvalidSpriteSize,

    /// 精靈超出精靈表範圍
    #[error("{side}px 精靈 (欄 {column}, 列 {row}) 超出 {sheet_width}x{sheet_height} 精靈表")]
    SpriteOutOfBounds {
        side: usize,
        column: usize,
        row: usize,
        sheet_width: usize,
        sheet_height: usize,
    },

    /// 視窗建立或更新失敗
    #[error("視窗錯誤: {0}")]
    Window(String),

    /// 遊戲迴圈執行緒異常結束
    #[error("遊戲迴圈執行緒異常結束")]
    ThreadJoin,

    /// 日誌系統已被初始化
    #[error("日誌系統已初始化: {0}")]
    LoggerInit(#[from] log::SetLoggerError),

    /// 設定值無效
    #[error("設定值無效: {0}")]
    Config(String),
}

impl From<minifb::Error> for Error {
    fn from(err: minifb::Error) -> Self {
        Error::Window(err.to_string())
    }
}

/// 結果類型
pub type Result<T> = std::result::Result<T, Error>;
