//! Software raster surface
//!
//! Samples each pixel at its center (no anti-aliasing) and composites with
//! the separable blend formula, so output is exact and repeatable.

use glam::Vec2;

use super::paint::{BlendMode, Color, Paint};
use super::surface::Surface;

/// In-memory RGBA pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    blend: BlendMode,
}

impl Raster {
    /// Create a fully transparent raster
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width as usize) * (height as usize)],
            blend: BlendMode::SourceOver,
        }
    }

    /// Pixel at (x, y); None when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Row-major pixels
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    /// Row-major RGBA8 bytes
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    /// Resize, clearing contents
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self {
            blend: self.blend,
            ..Self::new(width, height)
        };
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Composite `src` onto the pixel at (x, y) with the current blend mode
    fn composite(&mut self, x: u32, y: u32, src: Color) {
        if src.a <= 0.0 {
            return;
        }
        let idx = self.index(x, y);
        if src.a >= 1.0 && self.blend == BlendMode::SourceOver {
            self.pixels[idx] = src;
            return;
        }
        let dst = self.pixels[idx];
        let (sa, ba) = (src.a, dst.a);
        let ao = sa + ba * (1.0 - sa);
        if ao <= 0.0 {
            return;
        }

        let blend = self.blend;
        let mix = |cs: f32, cb: f32| {
            let co = sa * (1.0 - ba) * cs + sa * ba * blend.blend_channel(cb, cs) + (1.0 - sa) * ba * cb;
            co / ao
        };
        let out = Color::rgba(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), ao);
        self.pixels[idx] = out;
    }

    /// Shade every pixel in `[min, max)` whose center satisfies `inside`
    fn fill_where<F>(&mut self, min: Vec2, max: Vec2, paint: &Paint, inside: F)
    where
        F: Fn(Vec2) -> bool,
    {
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(self.width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if !inside(p) {
                    continue;
                }
                if let Some(color) = paint.color_at(p) {
                    self.composite(x, y, color);
                }
            }
        }
    }
}

impl Surface for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        let min = origin.min(origin + size);
        let max = origin.max(origin + size);
        self.fill_where(min, max, paint, |p| {
            p.x >= min.x && p.x < max.x && p.y >= min.y && p.y < max.y
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if radius <= 0.0 {
            return;
        }
        let r_sq = radius * radius;
        self.fill_where(center - radius, center + radius, paint, |p| {
            p.distance_squared(center) <= r_sq
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        let (min, max) = points
            .iter()
            .fold((points[0], points[0]), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        self.fill_where(min, max, paint, |p| winding_number(points, p) != 0);
    }
}

/// Signed crossing test of `p` against edge a->b (>0 when p is left of it)
#[inline]
fn is_left(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Winding number of a closed polygon around `p`
fn winding_number(points: &[Vec2], p: Vec2) -> i32 {
    let mut wn = 0;
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && is_left(a, b, p) < 0.0 {
            wn -= 1;
        }
    }
    wn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::paint::{ColorStop, RadialGradient};

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    #[test]
    fn test_fill_rect_covers_pixels() {
        let mut raster = Raster::new(4, 4);
        raster.fill_rect(Vec2::ZERO, Vec2::new(2.0, 4.0), &Paint::Solid(RED));

        assert_eq!(raster.pixel(0, 0), Some(RED));
        assert_eq!(raster.pixel(1, 3), Some(RED));
        assert_eq!(raster.pixel(2, 0), Some(Color::TRANSPARENT));
        assert_eq!(raster.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut raster = Raster::new(10, 10);
        let triangle = [Vec2::new(0.0, 10.0), Vec2::new(5.0, 0.0), Vec2::new(10.0, 10.0)];
        raster.fill_polygon(&triangle, &Paint::Solid(RED));

        // Near the bottom middle: inside
        assert_eq!(raster.pixel(5, 9), Some(RED));
        // Top corners: outside
        assert_eq!(raster.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(raster.pixel(9, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_polygon_winding_order_does_not_matter() {
        let mut cw = Raster::new(8, 8);
        let mut ccw = Raster::new(8, 8);
        let quad = [
            Vec2::new(1.0, 1.0),
            Vec2::new(7.0, 1.0),
            Vec2::new(7.0, 6.0),
            Vec2::new(1.0, 6.0),
        ];
        let mut reversed = quad;
        reversed.reverse();

        cw.fill_polygon(&quad, &Paint::Solid(BLUE));
        ccw.fill_polygon(&reversed, &Paint::Solid(BLUE));
        assert_eq!(cw, ccw);
        assert_eq!(cw.pixel(3, 3), Some(BLUE));
    }

    #[test]
    fn test_source_over_replaces_opaque() {
        let mut raster = Raster::new(2, 2);
        raster.fill_rect(Vec2::ZERO, Vec2::splat(2.0), &Paint::Solid(RED));
        raster.fill_rect(Vec2::ZERO, Vec2::splat(2.0), &Paint::Solid(BLUE));
        assert_eq!(raster.pixel(1, 1), Some(BLUE));
    }

    #[test]
    fn test_source_over_half_alpha() {
        let mut raster = Raster::new(1, 1);
        raster.fill_rect(Vec2::ZERO, Vec2::ONE, &Paint::Solid(Color::BLACK));
        raster.fill_rect(Vec2::ZERO, Vec2::ONE, &Paint::Solid(Color::WHITE.with_alpha(0.5)));
        let c = raster.pixel(0, 0).unwrap();
        assert!((c.r - 0.5).abs() < 1e-6);
        assert!((c.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lighten_never_darkens() {
        let mut raster = Raster::new(1, 1);
        raster.fill_rect(Vec2::ZERO, Vec2::ONE, &Paint::Solid(Color::rgb(0.2, 0.8, 0.4)));
        raster.set_blend_mode(BlendMode::Lighten);
        raster.fill_rect(Vec2::ZERO, Vec2::ONE, &Paint::Solid(Color::rgb(0.5, 0.1, 0.4)));

        let c = raster.pixel(0, 0).unwrap();
        assert!((c.r - 0.5).abs() < 1e-6);
        assert!((c.g - 0.8).abs() < 1e-6);
        assert!((c.b - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_fill_circle_radial_gradient() {
        let mut raster = Raster::new(11, 11);
        raster.fill_rect(Vec2::ZERO, Vec2::splat(11.0), &Paint::Solid(Color::BLACK));
        let center = Vec2::splat(5.5);
        let paint = Paint::Radial(RadialGradient::new(
            center,
            0.0,
            4.0,
            vec![ColorStop::new(0.0, Color::WHITE), ColorStop::new(1.0, Color::BLACK)],
        ));
        raster.fill_circle(center, 4.0, &paint);

        assert_eq!(raster.pixel(5, 5), Some(Color::WHITE));
        let edge = raster.pixel(7, 5).unwrap();
        assert!(edge.r > 0.0 && edge.r < 1.0);
        assert_eq!(raster.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_out_of_bounds_fill_is_clipped() {
        let mut raster = Raster::new(3, 3);
        raster.fill_rect(Vec2::splat(-10.0), Vec2::splat(50.0), &Paint::Solid(RED));
        raster.fill_polygon(
            &[Vec2::new(-5.0, -5.0), Vec2::new(20.0, -5.0), Vec2::new(-5.0, 20.0)],
            &Paint::Solid(BLUE),
        );
        raster.fill_circle(Vec2::splat(100.0), 5.0, &Paint::Solid(Color::WHITE));
        assert!(raster.pixels().iter().all(|&c| c == RED || c == BLUE));
    }

    #[test]
    fn test_to_rgba8_layout() {
        let mut raster = Raster::new(2, 1);
        raster.fill_rect(Vec2::new(1.0, 0.0), Vec2::ONE, &Paint::Solid(RED));
        assert_eq!(raster.to_rgba8(), vec![0, 0, 0, 0, 255, 0, 0, 255]);
    }
}
