//! Aurora control path
//!
//! The ribbon follows the mountain peaks, lifted into the upper sky band and
//! pinned to both canvas edges.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{AURORA_ANCHOR_JITTER, AURORA_BAND_OFFSET, AURORA_BAND_SCALE};

/// Anchor height used when there are no mountains to follow
pub const DEFAULT_HORIZON: f32 = 0.75;

/// Map a landscape y into the aurora's sky band
#[inline]
pub fn sky_band(y: f32) -> f32 {
    AURORA_BAND_OFFSET + y * AURORA_BAND_SCALE
}

/// Control points sorted by ascending x, spanning x = 0 to x = 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuroraPath {
    points: Vec<Vec2>,
}

impl AuroraPath {
    /// Path through the given mountain peaks plus two jittered edge anchors
    pub fn from_peaks<R: Rng>(peaks: &[Vec2], rng: &mut R) -> Self {
        let mut sorted = peaks.to_vec();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

        let left_y = sorted.first().map_or(DEFAULT_HORIZON, |p| p.y);
        let right_y = sorted.last().map_or(DEFAULT_HORIZON, |p| p.y);
        let left = Vec2::new(0.0, left_y - rng.random::<f32>() * AURORA_ANCHOR_JITTER);
        let right = Vec2::new(1.0, right_y - rng.random::<f32>() * AURORA_ANCHOR_JITTER);

        let points = std::iter::once(left)
            .chain(sorted)
            .chain(std::iter::once(right))
            .map(|p| Vec2::new(p.x, sky_band(p.y)))
            .collect();

        Self { points }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs as (index of the second point, previous, current)
    pub fn segments(&self) -> impl Iterator<Item = (usize, Vec2, Vec2)> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .map(|(i, pair)| (i + 1, pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_path_is_sorted_and_spans_canvas() {
        let mut rng = Pcg32::seed_from_u64(3);
        let peaks = [
            Vec2::new(0.7, 0.6),
            Vec2::new(0.1, 0.7),
            Vec2::new(0.5, 0.55),
        ];
        let path = AuroraPath::from_peaks(&peaks, &mut rng);
        let xs: Vec<f32> = path.points().iter().map(|p| p.x).collect();

        assert_eq!(xs, vec![0.0, 0.1, 0.5, 0.7, 1.0]);
        // Interior points are remapped into the sky band
        assert!((path.points()[1].y - (0.1 + 0.7 / 2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_anchors_follow_edge_peaks() {
        let mut rng = Pcg32::seed_from_u64(11);
        let peaks = [Vec2::new(0.2, 0.7), Vec2::new(0.8, 0.5)];
        let path = AuroraPath::from_peaks(&peaks, &mut rng);
        let first = path.points()[0];
        let last = path.points()[path.len() - 1];

        // Raised by at most 1/15 before remapping (halved after)
        assert!(first.y <= sky_band(0.7) && first.y >= sky_band(0.7 - 1.0 / 15.0));
        assert!(last.y <= sky_band(0.5) && last.y >= sky_band(0.5 - 1.0 / 15.0));
    }

    #[test]
    fn test_no_peaks_gives_two_anchors() {
        let mut rng = Pcg32::seed_from_u64(5);
        let path = AuroraPath::from_peaks(&[], &mut rng);
        assert_eq!(path.len(), 2);
        assert_eq!(path.points()[0].x, 0.0);
        assert_eq!(path.points()[1].x, 1.0);
        assert_eq!(path.segments().count(), 1);
    }

    #[test]
    fn test_segments_index_second_point() {
        let mut rng = Pcg32::seed_from_u64(5);
        let path = AuroraPath::from_peaks(&[Vec2::new(0.5, 0.6)], &mut rng);
        let indices: Vec<usize> = path.segments().map(|(i, _, _)| i).collect();
        assert_eq!(indices, vec![1, 2]);
    }
}
