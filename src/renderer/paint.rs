//! Colors, gradients and blend modes shared by every surface

use glam::Vec2;

/// Straight-alpha RGBA color, channels in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Parse `#rrggbb` or `#rgb`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).ok();
        let unit = |v: u8| v as f32 / 255.0;

        match digits.len() {
            6 => Some(Self::rgb(
                unit(byte(&digits[0..2])?),
                unit(byte(&digits[2..4])?),
                unit(byte(&digits[4..6])?),
            )),
            3 => {
                // #abc == #aabbcc
                let expand = |i: usize| byte(&digits[i..i + 1]).map(|v| unit(v * 17));
                Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => None,
        }
    }

    /// HSL to RGB (hue in degrees, saturation/lightness in 0.0-1.0)
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let l = l.clamp(0.0, 1.0);
        let s = s.clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::rgb(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h.rem_euclid(360.0) / 360.0;

        Self::rgb(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Premultiplied channels
    #[inline]
    pub fn premultiplied(self) -> [f32; 4] {
        [self.r * self.a, self.g * self.a, self.b * self.a, self.a]
    }

    /// Back from premultiplied channels
    #[inline]
    pub fn from_premultiplied([r, g, b, a]: [f32; 4]) -> Self {
        if a <= 0.0 {
            return Self::TRANSPARENT;
        }
        Self::rgba(r / a, g / a, b / a, a)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// CSS `rgba()` string for canvas fill styles
    pub fn to_css(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({},{},{},{})", r, g, b, self.a.clamp(0.0, 1.0))
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Compositing mode for subsequent fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Normal alpha compositing
    #[default]
    SourceOver,
    /// Per-channel max: overlapping fills brighten instead of occluding
    Lighten,
}

impl BlendMode {
    /// Canvas `globalCompositeOperation` name
    pub fn as_str(&self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Lighten => "lighten",
        }
    }

    /// Separable blend function B(backdrop, source) for one channel
    #[inline]
    pub fn blend_channel(&self, backdrop: f32, source: f32) -> f32 {
        match self {
            BlendMode::SourceOver => source,
            BlendMode::Lighten => backdrop.max(source),
        }
    }
}

/// A gradient color stop at `offset` in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Sample ordered stops at `t`, interpolating in premultiplied space
fn sample_stops(stops: &[ColorStop], t: f32) -> Color {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.color;
            }
            let u = (t - a.offset) / span;
            let pa = a.color.premultiplied();
            let pb = b.color.premultiplied();
            let mixed = std::array::from_fn(|i| pa[i] + (pb[i] - pa[i]) * u);
            return Color::from_premultiplied(mixed);
        }
    }
    last.color
}

/// Linear gradient along `start -> end`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Color at `p`, or None when the gradient is degenerate (start == end)
    pub fn color_at(&self, p: Vec2) -> Option<Color> {
        let axis = self.end - self.start;
        let len_sq = axis.length_squared();
        if len_sq <= f32::EPSILON {
            return None;
        }
        let t = ((p - self.start).dot(axis) / len_sq).clamp(0.0, 1.0);
        Some(sample_stops(&self.stops, t))
    }
}

/// Radial gradient between two concentric circles
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, inner_radius: f32, outer_radius: f32, stops: Vec<ColorStop>) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            stops,
        }
    }

    pub fn color_at(&self, p: Vec2) -> Option<Color> {
        let span = self.outer_radius - self.inner_radius;
        if span <= 0.0 {
            return None;
        }
        let t = ((p.distance(self.center) - self.inner_radius) / span).clamp(0.0, 1.0);
        Some(sample_stops(&self.stops, t))
    }
}

/// Fill style for a surface operation
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    /// Color at pixel-space point `p`; None means "paint nothing here"
    #[inline]
    pub fn color_at(&self, p: Vec2) -> Option<Color> {
        match self {
            Paint::Solid(color) => Some(*color),
            Paint::Linear(gradient) => gradient.color_at(p),
            Paint::Radial(gradient) => gradient.color_at(p),
        }
    }

    pub fn is_radial(&self) -> bool {
        matches!(self, Paint::Radial(_))
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}
