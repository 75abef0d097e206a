use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub world_width: f32,
    pub world_height: f32,
    pub hook_start_x: f32,
    pub hook_start_y: f32,
    pub hook_size: f32,
    pub gravity: f32,
    pub ascent_speed: f32,
    pub fish_count_min: u32,
    pub fish_count_max: u32,
    pub fish_speed_min: u32,
    pub fish_speed_max: u32,
    pub fish_spawn_margin: f32,
    pub fish_dt: f32,
    pub max_dt: f32,
    pub depth_marker_start: f32,
    pub depth_marker_spacing: f32,
    pub follow_hook: bool,
    pub camera_drift: f32,
    pub scene_name: String,
    pub next_scene: String,
    /// Fixed seed for reproducible fish layouts; random when `None`
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: Params::WORLD_WIDTH,
            world_height: Params::WORLD_HEIGHT,
            hook_start_x: Params::HOOK_START_X,
            hook_start_y: Params::HOOK_START_Y,
            hook_size: Params::HOOK_SIZE,
            gravity: Params::GRAVITY,
            ascent_speed: Params::ASCENT_SPEED,
            fish_count_min: Params::FISH_COUNT_MIN,
            fish_count_max: Params::FISH_COUNT_MAX,
            fish_speed_min: Params::FISH_SPEED_MIN,
            fish_speed_max: Params::FISH_SPEED_MAX,
            fish_spawn_margin: Params::FISH_SPAWN_MARGIN,
            fish_dt: Params::FISH_DT,
            max_dt: Params::MAX_DT,
            depth_marker_start: Params::DEPTH_MARKER_START,
            depth_marker_spacing: Params::DEPTH_MARKER_SPACING,
            follow_hook: true,
            camera_drift: Params::CAMERA_DRIFT,
            scene_name: Params::SCENE_NAME.to_string(),
            next_scene: Params::NEXT_SCENE.to_string(),
            seed: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn hook_start(&self) -> Vec2 {
        Vec2::new(self.hook_start_x, self.hook_start_y)
    }

    /// Check that the configuration describes a playable scene
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.world_width, self.world_height);
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::EmptyWorld { width, height });
        }
        if !(self.hook_size > 0.0) {
            return Err(ConfigError::NotPositive {
                what: "hook size",
                value: self.hook_size,
            });
        }
        if self.hook_size >= width || self.hook_size >= height {
            return Err(ConfigError::HookTooLarge {
                hook: self.hook_size,
                width,
                height,
            });
        }
        if self.fish_count_min > self.fish_count_max {
            return Err(ConfigError::InvertedRange {
                what: "fish count",
                min: self.fish_count_min as f32,
                max: self.fish_count_max as f32,
            });
        }
        if self.fish_speed_min > self.fish_speed_max {
            return Err(ConfigError::InvertedRange {
                what: "fish speed",
                min: self.fish_speed_min as f32,
                max: self.fish_speed_max as f32,
            });
        }
        let margin = self.fish_spawn_margin;
        if margin < 0.0 || 2.0 * margin > width || 2.0 * margin > height {
            return Err(ConfigError::MarginTooWide {
                margin,
                width,
                height,
            });
        }
        for (what, value) in [
            ("fish timestep", self.fish_dt),
            ("max frame timestep", self.max_dt),
            ("ascent speed", self.ascent_speed),
            ("depth marker spacing", self.depth_marker_spacing),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { what, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.hook_start(), Vec2::new(16.0, 16.0));
        assert_eq!(config.ascent_speed, 300.0);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = Config::from_json(r#"{ "world_width": 800, "seed": 7 }"#).unwrap();
        assert_eq!(config.world_width, 800.0);
        assert_eq!(config.world_height, Params::WORLD_HEIGHT);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.next_scene, "GameOver");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_empty_world() {
        let config = Config {
            world_height: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyWorld { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_fish_count() {
        let config = Config {
            fish_count_min: 10,
            fish_count_max: 3,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { what: "fish count", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_wide_margin() {
        let config = Config {
            world_width: 80.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MarginTooWide { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_hook() {
        let config = Config {
            hook_size: 2000.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::HookTooLarge { .. })
        ));
    }
}
