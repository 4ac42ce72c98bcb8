use std::fmt;

use super::sheet::SpriteSheet;
use crate::error::{Error, Result};

/// 從精靈表裁出的正方形圖塊
#[derive(Clone, PartialEq, Eq)]
pub struct Sprite {
    /// 邊長（像素）
    side: usize,
    /// 在精靈表中的像素位置
    x: usize,
    y: usize,
    /// side * side 個像素，row-major
    pixels: Vec<u32>,
}

impl Sprite {
    /// 裁出第 `column` 欄、第 `row` 列的精靈
    pub fn new(side: usize, column: usize, row: usize, sheet: &SpriteSheet) -> Result<Self> {
        if side == 0 {
            return Err(Error::InvalidSpriteSize);
        }

        let out_of_bounds = || Error::SpriteOutOfBounds {
            side,
            column,
            row,
            sheet_width: sheet.width(),
            sheet_height: sheet.height(),
        };
        let x = column.checked_mul(side).ok_or_else(out_of_bounds)?;
        let y = row.checked_mul(side).ok_or_else(out_of_bounds)?;
        let x_end = x.checked_add(side).ok_or_else(out_of_bounds)?;
        let y_end = y.checked_add(side).ok_or_else(out_of_bounds)?;
        if x_end > sheet.width() || y_end > sheet.height() {
            return Err(out_of_bounds());
        }

        let source = sheet.pixels();
        let mut pixels = vec![0; side * side];
        for py in 0..side {
            let start = x + (y + py) * sheet.width();
            pixels[py * side..(py + 1) * side].copy_from_slice(&source[start..start + side]);
        }

        Ok(Self { side, x, y, pixels })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.side && y < self.side {
            Some(self.pixels[x + y * self.side])
        } else {
            None
        }
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("side", &self.side)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("pixels", &format_args!("[{} pixels]", self.pixels.len()))
            .finish()
    }
}
