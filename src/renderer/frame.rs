//! Per-frame painter
//!
//! Paints sky, stars, mountains and the aurora ribbon for one point in time.
//! Holds no state between frames: the same scene, time and surface size
//! always produce the same output.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use noise::{NoiseFn, Simplex};

use super::paint::{BlendMode, Color, ColorStop, LinearGradient, Paint, RadialGradient};
use super::surface::Surface;
use crate::consts::{AURORA_PEAK_STOP, MOUNTAIN_LIGHTNESS, MOUNTAIN_LIGHTNESS_STEP};
use crate::scene::Scene;
use crate::settings::SceneSettings;
use crate::{rotate_about, to_pixels};

/// Fill color of the mountain drawn `index`-th (later = darker)
pub fn mountain_shade(index: usize) -> Color {
    let lightness = MOUNTAIN_LIGHTNESS - index as f32 * MOUNTAIN_LIGHTNESS_STEP;
    Color::from_hsl(0.0, 0.0, lightness / 100.0)
}

/// One quad of the aurora ribbon, in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonQuad {
    pub corners: [Vec2; 4],
    pub gradient: LinearGradient,
}

pub struct FrameRenderer {
    scene: Scene,
    noise: Simplex,
    background: Color,
    aurora_color: Color,
    aurora_amplitude: f32,
    aurora_height: f32,
    aurora_time_scale: f64,
}

impl FrameRenderer {
    pub fn new(scene: Scene, settings: &SceneSettings) -> Self {
        let noise = Simplex::new(scene.noise_seed);
        Self {
            scene,
            noise,
            background: settings.background_color(),
            aurora_color: settings.aurora_peak_color(),
            aurora_amplitude: settings.aurora_amplitude,
            aurora_height: settings.aurora_height,
            aurora_time_scale: settings.aurora_time_scale,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Paint one full frame at `elapsed` seconds since start
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, elapsed: f64) {
        self.draw_sky(surface);
        self.draw_stars(surface);
        self.draw_mountains(surface);
        self.draw_aurora(surface, elapsed);
    }

    fn draw_sky<S: Surface + ?Sized>(&self, surface: &mut S) {
        let size = surface.size();
        surface.set_blend_mode(BlendMode::SourceOver);
        surface.fill_rect(Vec2::ZERO, size, &Paint::Solid(self.background));
    }

    /// Stars glow additively so overlaps brighten
    fn draw_stars<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_blend_mode(BlendMode::Lighten);
        let (w, h) = (surface.width(), surface.height());

        for star in &self.scene.stars {
            let center = to_pixels(star.center, w, h);
            let radius = star.radius_px();
            let paint = Paint::Radial(RadialGradient::new(
                center,
                0.0,
                radius,
                vec![
                    ColorStop::new(0.0, Color::WHITE),
                    ColorStop::new(1.0, self.background),
                ],
            ));
            surface.fill_circle(center, radius, &paint);
        }
    }

    /// Rock then snow per mountain, so the cap always lands on top
    fn draw_mountains<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_blend_mode(BlendMode::SourceOver);
        let (w, h) = (surface.width(), surface.height());
        let snow = Paint::Solid(Color::WHITE);

        for (i, mountain) in self.scene.mountains.iter().enumerate() {
            let rock = mountain.rock.vertices().map(|v| to_pixels(v, w, h));
            surface.fill_polygon(&rock, &Paint::Solid(mountain_shade(i)));

            let cap = mountain.snow.vertices().map(|v| to_pixels(v, w, h));
            surface.fill_polygon(&cap, &snow);
        }
    }

    fn draw_aurora<S: Surface + ?Sized>(&self, surface: &mut S, elapsed: f64) {
        for quad in self.aurora_quads(surface.width(), surface.height(), elapsed) {
            surface.fill_polygon(&quad.corners, &Paint::Linear(quad.gradient));
        }
    }

    /// Noise-displaced y for path point `index`
    pub fn displaced_y(&self, y: f32, index: usize, elapsed: f64) -> f32 {
        let t = elapsed * self.aurora_time_scale;
        let n = self.noise.get([y as f64 + index as f64, t]) as f32;
        y + n * self.aurora_amplitude
    }

    /// Ribbon quads for the given surface size and time
    pub fn aurora_quads(&self, width: u32, height: u32, elapsed: f64) -> Vec<RibbonQuad> {
        let ribbon = self.aurora_height * height as f32;
        let lift = Vec2::new(0.0, ribbon);
        let stops = vec![
            ColorStop::new(0.0, Color::TRANSPARENT),
            ColorStop::new(AURORA_PEAK_STOP, self.aurora_color),
            ColorStop::new(1.0, Color::TRANSPARENT),
        ];

        self.scene
            .aurora
            .segments()
            .map(|(i, a, b)| {
                let prev = to_pixels(Vec2::new(a.x, self.displaced_y(a.y, i - 1, elapsed)), width, height);
                // One extra pixel so neighbouring quads overlap without seams
                let curr = to_pixels(Vec2::new(b.x, self.displaced_y(b.y, i, elapsed)), width, height)
                    + Vec2::X;

                // Gradient runs from the segment midpoint along its upward normal
                let start = prev.lerp(curr, 0.5);
                let normal = (start - rotate_about(prev, start, -FRAC_PI_2)).normalize_or_zero();
                let end = start + normal * ribbon;

                RibbonQuad {
                    corners: [prev, curr, curr - lift, prev - lift],
                    gradient: LinearGradient::new(start, end, stops.clone()),
                }
            })
            .collect()
    }
}
