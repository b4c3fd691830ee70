//! Fixed-size RGBA drawing surface
//!
//! A canvas is filled once at creation, then mutated by rectangle and label
//! draws. Its dimensions never change after `new`.

use ab_glyph::{Font, PxScale};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use std::path::Path;

use crate::error::{AssetError, AssetResult};

/// Axis-aligned rectangle with inclusive pixel bounds on every edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Inverted bounds describe an empty rectangle
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    pub fn width(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.right.abs_diff(self.left).saturating_add(1)
        }
    }

    pub fn height(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.bottom.abs_diff(self.top).saturating_add(1)
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a canvas uniformly filled with `background`
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Fill `rect` with `color`. Empty rectangles draw nothing; anything
    /// outside the canvas is clipped.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgba<u8>) {
        let max_x = i32::try_from(self.width()).unwrap_or(i32::MAX) - 1;
        let max_y = i32::try_from(self.height()).unwrap_or(i32::MAX) - 1;
        let clipped = PixelRect::new(
            rect.left.max(0),
            rect.top.max(0),
            rect.right.min(max_x),
            rect.bottom.min(max_y),
        );
        if clipped.is_empty() {
            return;
        }
        let area = Rect::at(clipped.left, clipped.top).of_size(clipped.width(), clipped.height());
        draw_filled_rect_mut(&mut self.image, area, color);
    }

    /// Draw `text` with its top-left layout origin at (x, y). No measuring
    /// or centering happens here.
    pub fn draw_label(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Rgba<u8>,
        font: &impl Font,
        size_px: f32,
    ) {
        draw_text_mut(&mut self.image, color, x, y, PxScale::from(size_px), font, text);
    }

    /// Encode as PNG, replacing any existing file at `path`
    pub fn save_png(&self, path: &Path) -> AssetResult<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| AssetError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}
