//! Drawing surface abstraction
//!
//! All coordinates are in surface pixels. The frame renderer only talks to
//! this trait, so the same scene paints onto a browser canvas, a software
//! raster or a recorder.

use glam::Vec2;

use super::paint::{BlendMode, Paint};

pub trait Surface {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Blend mode used by every following fill
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint);

    /// Fill a disc
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Fill a closed polygon (non-zero winding)
    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint);

    /// Surface size as a vector
    fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }
}
