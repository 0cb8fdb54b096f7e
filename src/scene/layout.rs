//! The generated scene
//!
//! Built once at startup, immutable afterwards. All randomness is drawn from
//! the RNG handed in, so a seed reproduces the whole scene.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aurora::AuroraPath;
use super::mountain::{self, Mountain};
use super::star::{self, Star};
use crate::settings::SceneSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Mountains in paint order
    pub mountains: Vec<Mountain>,
    pub stars: Vec<Star>,
    pub aurora: AuroraPath,
    /// Seed for the aurora's noise field
    pub noise_seed: u32,
}

impl Scene {
    /// Generate a scene from random peaks
    pub fn generate<R: Rng>(settings: &SceneSettings, rng: &mut R) -> Self {
        let peaks = mountain::random_centers(settings.mountain_count, rng);
        Self::from_peaks(settings, &peaks, rng)
    }

    /// Generate a scene around fixed mountain peaks
    pub fn from_peaks<R: Rng>(settings: &SceneSettings, peaks: &[Vec2], rng: &mut R) -> Self {
        let mountains = mountain::in_paint_order(peaks);
        let stars = star::scatter(settings.star_candidates, settings.star_pivot, rng);
        let aurora = AuroraPath::from_peaks(peaks, rng);
        let noise_seed = rng.random();

        log::info!(
            "Scene generated: {} mountains, {}/{} stars kept, {} aurora points",
            mountains.len(),
            stars.len(),
            settings.star_candidates,
            aurora.len()
        );

        Self {
            mountains,
            stars,
            aurora,
            noise_seed,
        }
    }

    /// Deterministic scene from a seed
    pub fn from_seed(settings: &SceneSettings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::generate(settings, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::star::in_unit_square;
    use proptest::prelude::*;
    use rand::RngCore;

    /// RNG stuck at its maximum output
    struct Saturated;

    impl RngCore for Saturated {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0xff);
        }
    }

    #[test]
    fn test_seed_reproduces_scene() {
        let settings = SceneSettings::default();
        let a = Scene::from_seed(&settings, 99999);
        let b = Scene::from_seed(&settings, 99999);
        assert_eq!(a, b);

        let c = Scene::from_seed(&settings, 12345);
        assert_ne!(a, c);
    }

    #[test]
    fn test_default_counts() {
        let scene = Scene::from_seed(&SceneSettings::default(), 1);
        assert_eq!(scene.mountains.len(), 5);
        // 5 peaks + 2 anchors
        assert_eq!(scene.aurora.len(), 7);
        assert!(scene.stars.len() <= 400);
    }

    #[test]
    fn test_single_peak_scene() {
        let mut rng = Pcg32::seed_from_u64(8);
        let scene = Scene::from_peaks(&SceneSettings::default(), &[Vec2::new(0.5, 0.75)], &mut rng);

        assert_eq!(scene.mountains.len(), 1);
        let m = scene.mountains[0];
        assert_eq!(m.rock.apex, Vec2::new(0.5, 0.75));
        assert!((m.rock.left - Vec2::new(0.5 - 0.25 / 1.3, 1.0)).length() < 1e-6);
        assert!((m.rock.right - Vec2::new(0.5 + 0.25 / 1.3, 1.0)).length() < 1e-6);
        assert!((m.snow.base_y() - 0.8).abs() < 1e-6);

        let xs: Vec<f32> = scene.aurora.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_saturated_rng_keeps_no_stars() {
        let scene = Scene::generate(&SceneSettings::default(), &mut Saturated);
        assert!(scene.stars.is_empty());
        assert_eq!(scene.mountains.len(), 5);
    }

    proptest! {
        #[test]
        fn prop_stars_inside_unit_square(seed in any::<u64>()) {
            let scene = Scene::from_seed(&SceneSettings::default(), seed);
            for star in &scene.stars {
                prop_assert!(in_unit_square(star.center));
            }
        }

        #[test]
        fn prop_mountains_stand_on_bottom_edge(seed in any::<u64>()) {
            let scene = Scene::from_seed(&SceneSettings::default(), seed);
            for m in &scene.mountains {
                prop_assert_eq!(m.rock.base_y(), 1.0);
                prop_assert!(m.rock.apex.y < m.rock.base_y());
                prop_assert!(m.snow.base_y() > m.rock.apex.y);
                prop_assert!(m.snow.base_y() < m.rock.base_y());
                prop_assert_eq!(m.snow.apex, m.rock.apex);
            }
            for pair in scene.mountains.windows(2) {
                prop_assert!(pair[0].peak().y >= pair[1].peak().y);
            }
        }

        #[test]
        fn prop_aurora_path_sorted(seed in any::<u64>(), count in 0usize..8) {
            let settings = SceneSettings { mountain_count: count, ..SceneSettings::default() };
            let scene = Scene::from_seed(&settings, seed);
            let points = scene.aurora.points();

            prop_assert_eq!(points.len(), count + 2);
            prop_assert_eq!(points[0].x, 0.0);
            prop_assert_eq!(points[points.len() - 1].x, 1.0);
            for pair in points.windows(2) {
                prop_assert!(pair[0].x <= pair[1].x);
            }
        }
    }
}
