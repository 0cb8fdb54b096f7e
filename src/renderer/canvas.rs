//! Browser canvas surface
//!
//! Forwards fills to a `CanvasRenderingContext2d`. Canvas calls that fail
//! are logged and skipped; the rest of the frame still draws.

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::paint::{BlendMode, ColorStop, Paint};
use super::surface::Surface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) -> Result<(), JsValue> {
        for stop in stops {
            gradient.add_color_stop(stop.offset, &stop.color.to_css())?;
        }
        Ok(())
    }

    /// Set the context fill style from a paint
    fn apply_paint(&self, paint: &Paint) -> Result<(), JsValue> {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear(linear) => {
                let gradient = self.ctx.create_linear_gradient(
                    linear.start.x as f64,
                    linear.start.y as f64,
                    linear.end.x as f64,
                    linear.end.y as f64,
                );
                Self::add_stops(&gradient, &linear.stops)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial(radial) => {
                let (cx, cy) = (radial.center.x as f64, radial.center.y as f64);
                let gradient = self.ctx.create_radial_gradient(
                    cx,
                    cy,
                    radial.inner_radius as f64,
                    cx,
                    cy,
                    radial.outer_radius as f64,
                )?;
                Self::add_stops(&gradient, &radial.stops)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn try_fill_circle(&self, center: Vec2, radius: f32, paint: &Paint) -> Result<(), JsValue> {
        self.apply_paint(paint)?;
        self.ctx.begin_path();
        self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.fill();
        Ok(())
    }

    fn try_fill_polygon(&self, points: &[Vec2], paint: &Paint) -> Result<(), JsValue> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.apply_paint(paint)?;
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        if let Err(e) = self.ctx.set_global_composite_operation(mode.as_str()) {
            log::warn!("Failed to set blend mode {}: {:?}", mode.as_str(), e);
        }
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        match self.apply_paint(paint) {
            Ok(()) => self.ctx.fill_rect(
                origin.x as f64,
                origin.y as f64,
                size.x as f64,
                size.y as f64,
            ),
            Err(e) => log::warn!("Rect fill error: {:?}", e),
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if let Err(e) = self.try_fill_circle(center, radius, paint) {
            log::warn!("Circle fill error: {:?}", e);
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        if let Err(e) = self.try_fill_polygon(points, paint) {
            log::warn!("Polygon fill error: {:?}", e);
        }
    }
}
