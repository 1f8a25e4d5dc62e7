//! Indexed-color canvas and clipped axis spans
//!
//! The canvas owns a fixed-size grid of palette indices. It stores and
//! copies indices without ever interpreting them; palette resolution and
//! transfer to a physical display belong to the caller.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Palette index stored per pixel.
/// The alias is the single place the index width is chosen.
pub type ColorIndex = u8;

/// Fixed-size grid of color indices for software rasterization.
/// All shape primitives render into this; the display side reads it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<ColorIndex>,
}

impl Canvas {
    /// Create a canvas with every pixel set to index 0
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Offset of pixel (x, y) in the row-major grid
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Set a single pixel. Out-of-range writes are discarded, so unclipped
    /// algorithm paths can hand geometry straight through.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: ColorIndex) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.data[idx] = color;
        }
    }

    /// Read a pixel (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<ColorIndex> {
        if self.in_bounds(x, y) {
            Some(self.data[self.pixel_index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Fill the whole canvas with one index
    pub fn clear(&mut self, color: ColorIndex) {
        self.data.fill(color);
    }

    /// Raw index data for the display side to read out
    pub fn data(&self) -> &[ColorIndex] {
        &self.data
    }

    // ========================================================================
    // Clipped axis spans
    // The only primitives that clip. Everything that emits spans builds on
    // them and gets clipping for free.
    // ========================================================================

    /// Draw a horizontal run between x0 and x1 at row y, in either order.
    /// The run is clamped to the canvas; fully off-canvas runs are no-ops.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: ColorIndex) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let start = x0.max(0);
        let end = x1.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        // Compute starting index once, then step right
        let mut idx = self.pixel_index(start as u32, y as u32);
        let count = (end - start + 1) as usize;
        for _ in 0..count {
            self.data[idx] = color;
            idx += 1;
        }
    }

    /// Draw a vertical run between y0 and y1 at column x, in either order.
    /// Same clipping policy as `hline`.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: ColorIndex) {
        if x < 0 || x >= self.width as i32 {
            return;
        }
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let start = y0.max(0);
        let end = y1.min(self.height as i32 - 1);
        if start > end {
            return;
        }

        let stride = self.width as usize;
        let mut idx = self.pixel_index(x as u32, start as u32);
        let count = (end - start + 1) as usize;
        for _ in 0..count {
            self.data[idx] = color;
            idx += stride;
        }
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Save the canvas (dimensions plus pixel state) to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load a canvas snapshot from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let canvas: Self = serde_json::from_str(&json).map_err(|e| e.to_string())?;
        if canvas.data.len() != (canvas.width * canvas.height) as usize {
            return Err(format!(
                "snapshot holds {} pixels, expected {}x{}",
                canvas.data.len(),
                canvas.width,
                canvas.height
            ));
        }
        Ok(canvas)
    }
}
