//! Animation loop
//!
//! Each frame paints the scene at "now minus start". Who decides whether
//! another frame follows is pluggable: the browser's requestAnimationFrame,
//! a fixed frame budget, or any closure.

use crate::clock::Clock;
use crate::renderer::{FrameRenderer, Surface};

/// What was drawn in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Zero-based frame number
    pub index: u64,
    /// Seconds since the animation started
    pub elapsed: f64,
}

/// Decides whether another frame runs after `frame` was painted on `surface`
pub trait Scheduler<S: ?Sized> {
    fn next_frame(&mut self, frame: &FrameInfo, surface: &S) -> bool;
}

impl<S, F> Scheduler<S> for F
where
    S: ?Sized,
    F: FnMut(&FrameInfo, &S) -> bool,
{
    fn next_frame(&mut self, frame: &FrameInfo, surface: &S) -> bool {
        self(frame, surface)
    }
}

/// Stop after a fixed number of frames (at least one always runs)
#[derive(Debug, Clone, Copy)]
pub struct FrameBudget {
    frames: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self { frames }
    }
}

impl<S: ?Sized> Scheduler<S> for FrameBudget {
    fn next_frame(&mut self, _frame: &FrameInfo, _surface: &S) -> bool {
        self.frames = self.frames.saturating_sub(1);
        self.frames > 0
    }
}

pub struct Animation<C: Clock> {
    renderer: FrameRenderer,
    clock: C,
    start: f64,
    frames: u64,
}

impl<C: Clock> Animation<C> {
    /// Start the animation; elapsed time counts from now
    pub fn new(renderer: FrameRenderer, clock: C) -> Self {
        let start = clock.now();
        Self {
            renderer,
            clock,
            start,
            frames: 0,
        }
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Seconds since start
    pub fn elapsed(&self) -> f64 {
        (self.clock.now() - self.start).max(0.0)
    }

    /// Paint one frame at the current time
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameInfo {
        let info = FrameInfo {
            index: self.frames,
            elapsed: self.elapsed(),
        };
        self.renderer.draw(surface, info.elapsed);
        self.frames += 1;
        info
    }

    /// Paint frames until the scheduler declines; returns frames drawn
    pub fn run<S, F>(&mut self, surface: &mut S, mut scheduler: F) -> u64
    where
        S: Surface + ?Sized,
        F: Scheduler<S>,
    {
        let first = self.frames;
        loop {
            let info = self.frame(surface);
            log::trace!("Frame {} at {:.3}s", info.index, info.elapsed);
            if !scheduler.next_frame(&info, surface) {
                break;
            }
        }
        self.frames - first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::renderer::Raster;
    use crate::scene::Scene;
    use crate::settings::SceneSettings;

    fn animation(clock: ManualClock) -> Animation<ManualClock> {
        let settings = SceneSettings::default();
        let renderer = FrameRenderer::new(Scene::from_seed(&settings, 77), &settings);
        Animation::new(renderer, clock)
    }

    #[test]
    fn test_elapsed_counts_from_start() {
        let clock = ManualClock::new(100.0);
        let anim = animation(clock.clone());
        assert_eq!(anim.elapsed(), 0.0);
        clock.advance(2.5);
        assert_eq!(anim.elapsed(), 2.5);
    }

    #[test]
    fn test_frame_matches_direct_draw() {
        let clock = ManualClock::new(5.0);
        let mut anim = animation(clock.clone());
        clock.advance(1.25);

        let mut looped = Raster::new(80, 60);
        let info = anim.frame(&mut looped);
        assert_eq!(info, FrameInfo { index: 0, elapsed: 1.25 });

        let mut direct = Raster::new(80, 60);
        anim.renderer().draw(&mut direct, 1.25);
        assert_eq!(looped, direct);
    }

    #[test]
    fn test_frame_budget() {
        let mut anim = animation(ManualClock::new(0.0));
        let mut raster = Raster::new(16, 16);
        assert_eq!(anim.run(&mut raster, FrameBudget::new(3)), 3);
        assert_eq!(anim.frames(), 3);

        // Budgets count their own frames, not the animation's
        assert_eq!(anim.run(&mut raster, FrameBudget::new(2)), 2);
        assert_eq!(anim.frames(), 5);

        // A zero budget still paints the current frame
        assert_eq!(anim.run(&mut raster, FrameBudget::new(0)), 1);
    }

    #[test]
    fn test_closure_scheduler_steps_clock() {
        let clock = ManualClock::new(0.0);
        let mut anim = animation(clock.clone());
        let mut raster = Raster::new(16, 16);
        let mut seen = Vec::new();

        let drawn = anim.run(&mut raster, |frame: &FrameInfo, _: &Raster| {
            seen.push(frame.elapsed);
            clock.advance(0.5);
            frame.index < 3
        });

        assert_eq!(drawn, 4);
        assert_eq!(seen, vec![0.0, 0.5, 1.0, 1.5]);
    }
}
