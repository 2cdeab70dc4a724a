use crate::math::*;
use image::GenericImageView;
use serde::{Deserialize, Serialize};

/// A rectangle of a texture in normalized UV space that generated texture coordinates are
/// squeezed into. The default region covers the whole texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureRegion {
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
}

impl TextureRegion {
    pub const FULL: TextureRegion = TextureRegion::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(start_x: f32, start_y: f32, end_x: f32, end_y: f32) -> Self {
        Self { start_x, start_y, end_x, end_y }
    }

    pub fn start(&self) -> Vec2 {
        Vec2::new(self.start_x, self.start_y)
    }

    pub fn end(&self) -> Vec2 {
        Vec2::new(self.end_x, self.end_y)
    }

    /// Maps a coordinate from `[0, 1]` into this region.
    pub fn map(&self, uv: Vec2) -> Vec2 {
        Vec2::new(
            self.start_x + uv.x * (self.end_x - self.start_x),
            self.start_y + uv.y * (self.end_y - self.start_y),
        )
    }

    pub fn is_finite(&self) -> bool {
        [self.start_x, self.start_y, self.end_x, self.end_y].iter().all(|v| v.is_finite())
    }

    /// Region of a `texture_width` x `texture_height` texture given in pixels, with (0, 0) at the
    /// bottom left. The rectangle is clamped to the texture. Returns None for an empty texture.
    pub fn from_pixels(
        texture_width: u32,
        texture_height: u32,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Option<TextureRegion> {
        if texture_width == 0 || texture_height == 0 {
            return None;
        }
        let width = width.min(texture_width);
        let height = height.min(texture_height);
        let x = x.unsigned_abs().min(texture_width);
        let y = y.unsigned_abs().min(texture_height);

        // origin and size may each reach the texture size, their sum needs the wider type
        let tw = texture_width as f64;
        let th = texture_height as f64;
        Some(TextureRegion::new(
            (x as f64 / tw) as f32,
            (y as f64 / th) as f32,
            ((x as u64 + width as u64) as f64 / tw) as f32,
            ((y as u64 + height as u64) as f64 / th) as f32,
        ))
    }

    /// Same as [`TextureRegion::from_pixels`], taking the texture size from `image`.
    pub fn from_image<I: GenericImageView>(image: &I, x: i32, y: i32, width: u32, height: u32) -> Option<TextureRegion> {
        let (tw, th) = image.dimensions();
        Self::from_pixels(tw, th, x, y, width, height)
    }
}

impl Default for TextureRegion {
    fn default() -> Self {
        Self::FULL
    }
}
