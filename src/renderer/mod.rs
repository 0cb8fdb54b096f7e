//! Rendering module
//!
//! The frame painter draws through the `Surface` trait; the software raster
//! and recorder work everywhere, the canvas surface only in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;
pub mod paint;
pub mod raster;
pub mod record;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use frame::{FrameRenderer, RibbonQuad, mountain_shade};
pub use paint::{BlendMode, Color, ColorStop, LinearGradient, Paint, RadialGradient};
pub use raster::Raster;
pub use record::{DrawOp, Recorder};
pub use surface::Surface;
