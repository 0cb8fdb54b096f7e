//! Nightscape - a procedural night landscape
//!
//! Core modules:
//! - `scene`: One-shot randomized generation (mountains, stars, aurora path)
//! - `renderer`: Drawing surfaces and the per-frame painter
//! - `animation`: Frame loop with an injectable clock and scheduler
//! - `settings`: Data-driven scene tuning
//! - `export`: PNG output of rendered frames

pub mod animation;
pub mod clock;
pub mod error;
pub mod export;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use animation::{Animation, FrameBudget, FrameInfo, Scheduler};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use renderer::{FrameRenderer, Raster, Surface};
pub use scene::Scene;
pub use settings::SceneSettings;

use glam::Vec2;

/// Scene constants
pub mod consts {
    /// Number of mountains in the default scene
    pub const MOUNTAIN_COUNT: usize = 5;
    /// Star candidates sampled before the unit-square filter
    pub const STAR_CANDIDATES: usize = 400;

    /// Mountain base half-width divisor (half-width = height / 1.3)
    pub const MOUNTAIN_SLOPE: f32 = 1.3;
    /// Fraction of the mountain height that stays bare rock below the snow
    pub const SNOW_LINE: f32 = 0.8;

    /// Star disc radius in pixels: size_multiplier * SCALE + BASE
    pub const STAR_RADIUS_BASE: f32 = 3.0;
    pub const STAR_RADIUS_SCALE: f32 = 3.0;

    /// Lightness (percent) of the first mountain, darkened per index
    pub const MOUNTAIN_LIGHTNESS: f32 = 25.0;
    pub const MOUNTAIN_LIGHTNESS_STEP: f32 = 3.0;

    /// Aurora anchors are raised by up to this much above their mountain
    pub const AURORA_ANCHOR_JITTER: f32 = 1.0 / 15.0;
    /// Aurora path y-remap: y' = OFFSET + y * SCALE
    pub const AURORA_BAND_OFFSET: f32 = 0.1;
    pub const AURORA_BAND_SCALE: f32 = 0.5;
    /// Gradient stop where the aurora reaches full color
    pub const AURORA_PEAK_STOP: f32 = 0.2;
}

/// Build a vector of the given magnitude pointing at `angle` (radians)
#[inline]
pub fn from_angle(angle: f32, magnitude: f32) -> Vec2 {
    Vec2::from_angle(angle) * magnitude
}

/// Rotate `point` around `pivot` by `angle` radians
#[inline]
pub fn rotate_about(point: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    pivot + Vec2::from_angle(angle).rotate(point - pivot)
}

/// Convert a normalized [0,1] point to surface pixels
#[inline]
pub fn to_pixels(point: Vec2, width: u32, height: u32) -> Vec2 {
    Vec2::new(point.x * width as f32, point.y * height as f32)
}
