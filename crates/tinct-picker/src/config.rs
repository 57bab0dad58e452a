use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinct_core::{Color, ColorError, Hex, Rect};

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::pointer::PointerColorMapper;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid picker config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid seed color: {0}")]
    Seed(#[from] ColorError),
}

/// Picker setup. Every field may be omitted from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Initial color as hex text.
    pub seed: String,
    pub history_capacity: usize,
    /// Saturation/value surface, host pixels.
    pub canvas: Rect,
    pub hue_bar: Rect,
    pub gradient_track_width: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            seed: Color::SEED.to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            canvas: Rect::new(0.0, 0.0, 228.0, 150.0),
            hue_bar: Rect::new(0.0, 160.0, 228.0, 12.0),
            gradient_track_width: 228.0,
        }
    }
}

impl PickerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PickerConfig = serde_json::from_str(json)?;
        config.seed_color()?;
        Ok(config)
    }

    pub fn seed_color(&self) -> Result<Color, ConfigError> {
        Ok(Color::from_hex(Hex::parse(&self.seed)?))
    }

    pub fn mapper(&self) -> PointerColorMapper {
        PointerColorMapper::new(self.canvas, self.hue_bar)
    }

    /// Stop/opacity track at the origin with the configured width.
    pub fn gradient_track(&self) -> Rect {
        Rect::new(0.0, 0.0, self.gradient_track_width, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let cfg = PickerConfig::from_json("{}").unwrap();
        assert_eq!(cfg, PickerConfig::default());
        assert_eq!(cfg.seed, "#3da6fb");
        assert_eq!(cfg.seed_color().unwrap().hex(), Color::SEED);
    }

    #[test]
    fn test_partial_json() {
        let cfg = PickerConfig::from_json(
            r##"{ "seed": "#f00", "history_capacity": 3, "hue_bar": { "x": 5, "y": 0, "w": 100, "h": 8 } }"##,
        )
        .unwrap();
        assert_eq!(cfg.seed_color().unwrap().hex(), Hex::from_rgb(255, 0, 0));
        assert_eq!(cfg.history_capacity, 3);
        assert_eq!(cfg.hue_bar, Rect::new(5.0, 0.0, 100.0, 8.0));
        assert_eq!(cfg.canvas, PickerConfig::default().canvas);
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        let err = PickerConfig::from_json(r#"{ "seed": "blue" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Seed(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = PickerConfig::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid picker config"));
    }

    #[test]
    fn test_serializes_back() {
        let json = serde_json::to_string(&PickerConfig::default()).unwrap();
        assert!(json.contains(r##""seed":"#3da6fb""##));
    }
}
