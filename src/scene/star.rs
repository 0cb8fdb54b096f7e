//! Star field
//!
//! Candidates are scattered radially around a pivot; anything that lands
//! off-canvas is dropped rather than resampled.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{STAR_RADIUS_BASE, STAR_RADIUS_SCALE};
use crate::from_angle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub center: Vec2,
    /// Random size factor in [0, 1)
    pub size_multiplier: f32,
}

impl Star {
    /// Disc radius in pixels
    #[inline]
    pub fn radius_px(&self) -> f32 {
        self.size_multiplier * STAR_RADIUS_SCALE + STAR_RADIUS_BASE
    }
}

/// Distance from `pivot` to the farthest canvas corner
pub fn max_magnitude(pivot: Vec2) -> f32 {
    pivot.max(Vec2::ONE - pivot).length()
}

/// Strictly inside the unit square
#[inline]
pub fn in_unit_square(p: Vec2) -> bool {
    p.x > 0.0 && p.x < 1.0 && p.y > 0.0 && p.y < 1.0
}

/// Sample `candidates` stars around `pivot`, keeping those on the canvas
pub fn scatter<R: Rng>(candidates: usize, pivot: Vec2, rng: &mut R) -> Vec<Star> {
    let max_mag = max_magnitude(pivot);

    let centers: Vec<Vec2> = (0..candidates)
        .map(|_| {
            let magnitude = rng.random::<f32>() * max_mag;
            let angle = rng.random::<f32>() * TAU;
            pivot + from_angle(angle, magnitude)
        })
        .filter(|&c| in_unit_square(c))
        .collect();

    centers
        .into_iter()
        .map(|center| Star {
            center,
            size_multiplier: rng.random(),
        })
        .collect()
}
