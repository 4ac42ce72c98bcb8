use log::info;
use minifb::{Key, Window, WindowOptions};
use std::time::Duration;

use crate::config::WindowConfig;
use crate::error::Result;

// 主執行緒的畫面刷新間隔
const PRESENT_INTERVAL: Duration = Duration::from_micros(16_600);

/// 固定大小的視窗，目前只顯示空白畫面
pub struct Display {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl Display {
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let options = WindowOptions {
            resize: config.resizable,
            ..WindowOptions::default()
        };
        let mut window = Window::new(&config.title, config.width, config.height, options)?;
        #[allow(deprecated)]
        window.limit_update_rate(Some(PRESENT_INTERVAL));

        info!("視窗建立成功: {}x{}", config.width, config.height);
        Ok(Self {
            window,
            buffer: vec![0; config.width * config.height],
            width: config.width,
            height: config.height,
        })
    }

    /// 視窗被關閉或按下 Escape 後回傳 false
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    pub fn present(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}
