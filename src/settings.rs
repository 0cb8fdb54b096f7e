//! Scene settings
//!
//! Loaded from a JSON file on native and from LocalStorage on the web.
//! Every field has a default, so partial files are fine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MOUNTAIN_COUNT, STAR_CANDIDATES};
use crate::error::{Error, Result};
use crate::renderer::Color;

pub const DEFAULT_BACKGROUND: &str = "#0c1445";
pub const DEFAULT_AURORA_COLOR: &str = "#36BA34";

/// Scene generation and animation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,

    // === Generation ===
    /// Number of mountains
    pub mountain_count: usize,
    /// Star candidates sampled before discarding those off-canvas
    pub star_candidates: usize,
    /// Point the star field is scattered around (normalized)
    pub star_pivot: Vec2,

    // === Aurora ===
    /// Vertical noise displacement (fraction of height)
    pub aurora_amplitude: f32,
    /// Ribbon height (fraction of height)
    pub aurora_height: f32,
    /// Noise time input per elapsed second
    pub aurora_time_scale: f64,

    // === Palette ===
    /// Sky color, also the outer color of every star
    pub background: String,
    /// Peak aurora color
    pub aurora_color: String,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            seed: None,

            mountain_count: MOUNTAIN_COUNT,
            star_candidates: STAR_CANDIDATES,
            star_pivot: Vec2::new(0.7, 0.3),

            aurora_amplitude: 0.05,
            aurora_height: 0.2,
            aurora_time_scale: 0.1,

            background: DEFAULT_BACKGROUND.to_string(),
            aurora_color: DEFAULT_AURORA_COLOR.to_string(),
        }
    }
}

impl SceneSettings {
    /// Settings with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate JSON settings
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the generator or renderer cannot use
    pub fn validate(&self) -> Result<()> {
        if Color::from_hex(&self.background).is_none() {
            return Err(Error::InvalidSettings(format!(
                "background is not a hex color: {:?}",
                self.background
            )));
        }
        if Color::from_hex(&self.aurora_color).is_none() {
            return Err(Error::InvalidSettings(format!(
                "aurora_color is not a hex color: {:?}",
                self.aurora_color
            )));
        }
        if !(self.aurora_height.is_finite() && self.aurora_height > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "aurora_height must be positive, got {}",
                self.aurora_height
            )));
        }
        if !(self.star_pivot.is_finite()
            && (0.0..=1.0).contains(&self.star_pivot.x)
            && (0.0..=1.0).contains(&self.star_pivot.y))
        {
            return Err(Error::InvalidSettings(format!(
                "star_pivot must lie in the unit square, got {}",
                self.star_pivot
            )));
        }
        Ok(())
    }

    pub fn background_color(&self) -> Color {
        Color::from_hex(&self.background).unwrap_or(Color::rgb(0.047, 0.078, 0.271))
    }

    pub fn aurora_peak_color(&self) -> Color {
        Color::from_hex(&self.aurora_color).unwrap_or(Color::rgb(0.212, 0.729, 0.204))
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "nightscape_settings";

    /// Load settings from LocalStorage, falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load_stored() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = SceneSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.mountain_count, 5);
        assert_eq!(settings.star_candidates, 400);
        assert_eq!(settings.background_color().to_rgba8(), [0x0c, 0x14, 0x45, 0xff]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = SceneSettings::from_json(r#"{ "seed": 7, "mountain_count": 3 }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.mountain_count, 3);
        assert_eq!(settings.star_candidates, STAR_CANDIDATES);
        assert_eq!(settings.aurora_color, DEFAULT_AURORA_COLOR);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = SceneSettings {
            star_pivot: Vec2::new(0.25, 0.5),
            ..SceneSettings::with_seed(42)
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(SceneSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = SceneSettings::from_json(r#"{ "background": "navy" }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
    }

    #[test]
    fn test_rejects_bad_aurora_height() {
        let settings = SceneSettings {
            aurora_height: 0.0,
            ..SceneSettings::default()
        };
        assert!(matches!(settings.validate(), Err(Error::InvalidSettings(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SceneSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
