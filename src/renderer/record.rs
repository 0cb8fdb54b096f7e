//! Recording surface
//!
//! Keeps every call as a display list instead of shading pixels. Handy for
//! checking what a frame draws without caring how it rasterizes.

use glam::Vec2;

use super::paint::{BlendMode, Paint};
use super::surface::Surface;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Blend(BlendMode),
    Rect { origin: Vec2, size: Vec2, paint: Paint },
    Circle { center: Vec2, radius: f32, paint: Paint },
    Polygon { points: Vec<Vec2>, paint: Paint },
}

impl DrawOp {
    pub fn paint(&self) -> Option<&Paint> {
        match self {
            DrawOp::Blend(_) => None,
            DrawOp::Rect { paint, .. }
            | DrawOp::Circle { paint, .. }
            | DrawOp::Polygon { paint, .. } => Some(paint),
        }
    }
}

/// Surface that records calls in order
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    width: u32,
    height: u32,
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Number of fills using a radial gradient
    pub fn radial_fills(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| op.paint().is_some_and(Paint::is_radial))
            .count()
    }

    /// Recorded polygons, in draw order
    pub fn polygons(&self) -> impl Iterator<Item = (&[Vec2], &Paint)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Polygon { points, paint } => Some((points.as_slice(), paint)),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.ops.push(DrawOp::Blend(mode));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        self.ops.push(DrawOp::Rect {
            origin,
            size,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            paint: paint.clone(),
        });
    }
}
