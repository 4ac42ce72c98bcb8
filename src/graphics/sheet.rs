/*
精靈表
======
把整張圖片解碼成一維像素陣列，之後的精靈裁切直接讀這個陣列
*/

use log::{debug, error, info};
use std::path::Path;

use super::sprite::Sprite;
use crate::error::{Error, Result};

/// 解碼後的精靈表，像素為 0xAARRGGBB，按列 (row-major) 排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl SpriteSheet {
    /// 載入圖片並複製左上角 `width x height` 的區域
    pub fn load<P: AsRef<Path>>(path: P, width: usize, height: usize) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgba8();
        let (actual_width, actual_height) = (image.width() as usize, image.height() as usize);

        if actual_width < width || actual_height < height {
            return Err(Error::SheetTooSmall {
                width,
                height,
                actual_width,
                actual_height,
            });
        }

        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let [r, g, b, a] = image.get_pixel(x as u32, y as u32).0;
                pixels.push(pack_argb(r, g, b, a));
            }
        }

        info!(
            "載入精靈表 {} ({}x{}, 圖片 {}x{})",
            path.display(),
            width,
            height,
            actual_width,
            actual_height
        );
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// 載入失敗時只記錄錯誤，回傳全零（透明黑）的精靈表
    pub fn load_or_blank<P: AsRef<Path>>(path: P, width: usize, height: usize) -> Self {
        let path = path.as_ref();
        match Self::load(path, width, height) {
            Ok(sheet) => sheet,
            Err(e) => {
                error!("無法載入精靈表 {}: {}", path.display(), e);
                Self::blank(width, height).unwrap_or_else(|e| {
                    error!("{}，改用空精靈表", e);
                    Self::empty()
                })
            }
        }
    }

    /// 全零的精靈表；寬高相乘溢位時回傳錯誤
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// 0x0 的精靈表
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// 取得特定位置的像素，超出範圍回傳 None
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[x + y * self.width])
        } else {
            None
        }
    }

    /// 橫向能放下幾個完整的精靈
    pub fn columns(&self, side: usize) -> usize {
        if side == 0 {
            0
        } else {
            self.width / side
        }
    }

    pub fn rows(&self, side: usize) -> usize {
        if side == 0 {
            0
        } else {
            self.height / side
        }
    }

    /// 逐列裁出所有完整的格子
    pub fn sprites(&self, side: usize) -> Result<Vec<Sprite>> {
        if side == 0 {
            return Err(Error::InvalidSpriteSize);
        }
        let (columns, rows) = (self.columns(side), self.rows(side));
        debug!("裁切 {}x{} 個 {}px 精靈", columns, rows, side);

        let mut sprites = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for column in 0..columns {
                sprites.push(Sprite::new(side, column, row, self)?);
            }
        }
        Ok(sprites)
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or(Error::SheetSize { width, height })
}

/// RGBA 分量打包成 0xAARRGGBB
pub fn pack_argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: usize, height: usize) -> SpriteSheet {
        let pixels = (0..(width * height) as u32).collect();
        SpriteSheet::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_pack_argb() {
        assert_eq!(pack_argb(0x12, 0x34, 0x56, 0xFF), 0xFF123456);
        assert_eq!(pack_argb(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_from_pixels_checks_length() {
        let result = SpriteSheet::from_pixels(4, 4, vec![0; 15]);
        assert!(matches!(
            result,
            Err(Error::BufferSize {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_pixel_lookup() {
        let sheet = numbered(8, 4);
        assert_eq!(sheet.pixel(0, 0), Some(0));
        assert_eq!(sheet.pixel(3, 2), Some(19));
        assert_eq!(sheet.pixel(8, 0), None);
        assert_eq!(sheet.pixel(0, 4), None);
    }

    #[test]
    fn test_grid_size() {
        let sheet = numbered(10, 7);
        assert_eq!(sheet.columns(3), 3);
        assert_eq!(sheet.rows(3), 2);
        assert_eq!(sheet.columns(0), 0);
    }

    #[test]
    fn test_sprites_in_row_order() {
        let sheet = numbered(4, 4);
        let sprites = sheet.sprites(2).unwrap();
        assert_eq!(sprites.len(), 4);
        assert_eq!((sprites[1].x(), sprites[1].y()), (2, 0));
        assert_eq!((sprites[2].x(), sprites[2].y()), (0, 2));
        assert_eq!(sprites[3].pixels(), &[10, 11, 14, 15]);
    }

    #[test]
    fn test_oversized_dimensions() {
        assert!(matches!(
            SpriteSheet::blank(usize::MAX, 2),
            Err(Error::SheetSize { height: 2, .. })
        ));
        assert!(matches!(
            SpriteSheet::from_pixels(usize::MAX, 2, vec![0; 4]),
            Err(Error::SheetSize { .. })
        ));
    }

    #[test]
    fn test_load_missing_oversized_file_is_empty() {
        let sheet = SpriteSheet::load_or_blank("no/such.png", usize::MAX, 2);
        assert_eq!(sheet, SpriteSheet::empty());
        assert!(sheet.pixels().is_empty());
    }

    #[test]
    fn test_load_missing_file_is_blank() {
        let sheet = SpriteSheet::load_or_blank("does/not/exist.png", 16, 8);
        assert_eq!(sheet.width(), 16);
        assert_eq!(sheet.height(), 8);
        assert!(sheet.pixels().iter().all(|&p| p == 0));
    }
}
