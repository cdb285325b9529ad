//! Dense one-bit pixel grids and their ink bounds

use serde::Serialize;

/// Smallest rectangle enclosing every set pixel of a raster.
///
/// All four edges are inclusive row/column indices, row 0 being the top
/// scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl BoundingBox {
    /// A box covering exactly one pixel.
    pub fn pixel(row: usize, column: usize) -> Self {
        Self {
            top: row,
            left: column,
            bottom: row,
            right: column,
        }
    }

    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Grow the box so it also covers (`row`, `column`).
    pub fn include(&mut self, row: usize, column: usize) {
        self.top = self.top.min(row);
        self.left = self.left.min(column);
        self.bottom = self.bottom.max(row);
        self.right = self.right.max(column);
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        (self.top..=self.bottom).contains(&row) && (self.left..=self.right).contains(&column)
    }
}

/// A width x height grid of pixels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRaster {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl GlyphRaster {
    /// Create a raster with every pixel clear.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width && self.pixels[row * self.width + column]
    }

    /// OR `value` into the pixel at (`row`, `column`).
    ///
    /// Returns `false` without touching the grid when the position lies
    /// outside the raster.
    pub fn set(&mut self, row: usize, column: usize, value: bool) -> bool {
        if row >= self.height || column >= self.width {
            return false;
        }
        self.pixels[row * self.width + column] |= value;
        true
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.pixels[row * self.width..(row + 1) * self.width]
    }

    /// Bounds of all set pixels, or `None` for a blank raster.
    pub fn ink_bounds(&self) -> Option<BoundingBox> {
        let mut bounds: Option<BoundingBox> = None;
        for row in 0..self.height {
            for (column, &pixel) in self.row(row).iter().enumerate() {
                if !pixel {
                    continue;
                }
                match bounds.as_mut() {
                    Some(bounds) => bounds.include(row, column),
                    None => bounds = Some(BoundingBox::pixel(row, column)),
                }
            }
        }
        bounds
    }

    /// Pack one row into bytes, most significant bit first, with the last
    /// byte padded on the right with zero bits.
    pub fn packed_row(&self, row: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; self.width.div_ceil(8)];
        for (column, &pixel) in self.row(row).iter().enumerate() {
            if pixel {
                bytes[column / 8] |= 0x80 >> (column % 8);
            }
        }
        bytes
    }
}
