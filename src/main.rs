// 遊戲骨架 - 主程式

use anyhow::Context;
use log::{info, warn};

use pixel_game::config::{Config, SheetConfig};
use pixel_game::graphics::{Sprite, SpriteSheet};
use pixel_game::{game, FileLogger};

fn main() -> anyhow::Result<()> {
    // 處理命令行參數
    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => {
            Config::load(path).with_context(|| format!("無法載入設定檔 '{}'", path))?
        }
        None => Config::default(),
    };

    FileLogger::init(&config.system).context("無法初始化日誌")?;
    info!("遊戲啟動中...");

    if let Some(sheet) = &config.assets.sheet {
        load_sheet(sheet);
    }

    let totals = game::run(&config).context("遊戲迴圈錯誤")?;
    info!("遊戲結束: 共 {} 次更新, {} 幀", totals.updates, totals.frames);
    log::logger().flush();
    Ok(())
}

fn load_sheet(sheet: &SheetConfig) {
    let sheet_pixels = SpriteSheet::load_or_blank(&sheet.path, sheet.width, sheet.height);
    match Sprite::new(sheet.sprite_side, 0, 0, &sheet_pixels) {
        Ok(sprite) => info!(
            "精靈 (0, 0): {}x{} 像素, 第一個像素 0x{:08X}",
            sprite.side(),
            sprite.side(),
            sprite.pixel(0, 0).unwrap_or(0)
        ),
        Err(e) => warn!("無法裁切精靈: {}", e),
    }
    info!(
        "精靈表共 {}x{} 格",
        sheet_pixels.columns(sheet.sprite_side),
        sheet_pixels.rows(sheet.sprite_side)
    );
}
