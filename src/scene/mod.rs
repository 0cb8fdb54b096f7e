//! Scene generation
//!
//! Runs once before the first frame and produces plain immutable data:
//! - Pure: no rendering or platform dependencies
//! - Seeded RNG only
//! - Paint order fixed at generation time

pub mod aurora;
pub mod layout;
pub mod mountain;
pub mod star;

pub use aurora::{AuroraPath, sky_band};
pub use layout::Scene;
pub use mountain::{Mountain, Triangle, in_paint_order, random_centers, snow_line};
pub use star::{Star, in_unit_square, max_magnitude, scatter};
