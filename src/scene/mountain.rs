//! Mountain geometry
//!
//! A mountain is an isosceles triangle standing on the bottom edge of the
//! canvas, with a smaller snow triangle sharing its apex.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{MOUNTAIN_SLOPE, SNOW_LINE};

/// Triangle with a horizontal base below its apex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub left: Vec2,
    pub apex: Vec2,
    pub right: Vec2,
}

impl Triangle {
    /// Triangle under `apex` with its base on `base_y`
    pub fn from_apex(apex: Vec2, base_y: f32) -> Self {
        let half_width = (base_y - apex.y) / MOUNTAIN_SLOPE;
        Self {
            left: Vec2::new(apex.x - half_width, base_y),
            apex,
            right: Vec2::new(apex.x + half_width, base_y),
        }
    }

    /// Vertices in draw order (left, apex, right)
    #[inline]
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.left, self.apex, self.right]
    }

    #[inline]
    pub fn base_y(&self) -> f32 {
        self.left.y
    }

    pub fn half_width(&self) -> f32 {
        (self.right.x - self.left.x) / 2.0
    }
}

/// Rock triangle plus its snow cap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mountain {
    pub rock: Triangle,
    pub snow: Triangle,
}

impl Mountain {
    /// Build a mountain peaking at `center` with its base on the bottom edge
    pub fn new(center: Vec2) -> Self {
        Self {
            rock: Triangle::from_apex(center, 1.0),
            snow: Triangle::from_apex(center, snow_line(center.y)),
        }
    }

    #[inline]
    pub fn peak(&self) -> Vec2 {
        self.rock.apex
    }
}

/// Base of the snow cap for a peak at `peak_y`
#[inline]
pub fn snow_line(peak_y: f32) -> f32 {
    1.0 - (1.0 - peak_y) * SNOW_LINE
}

/// Peak positions: one per horizontal bucket, jittered, in the band [0.5, 0.75)
pub fn random_centers<R: Rng>(count: usize, rng: &mut R) -> Vec<Vec2> {
    let n = count as f32;
    (0..count)
        .map(|i| {
            let x = (rng.random::<f32>() / 2.0 + i as f32 + 0.25) / n;
            let y = (rng.random::<f32>() + 2.0) / 4.0;
            Vec2::new(x, y)
        })
        .collect()
}

/// Mountains in paint order: descending y
pub fn in_paint_order(centers: &[Vec2]) -> Vec<Mountain> {
    let mut sorted = centers.to_vec();
    sorted.sort_by(|a, b| b.y.total_cmp(&a.y));
    sorted.into_iter().map(Mountain::new).collect()
}
