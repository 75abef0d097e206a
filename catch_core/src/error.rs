use thiserror::Error;

/// Reasons a configuration cannot produce a playable scene
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("world must have a positive size, got {width}x{height}")]
    EmptyWorld { width: f32, height: f32 },

    #[error("hook size {hook} does not fit a {width}x{height} world")]
    HookTooLarge { hook: f32, width: f32, height: f32 },

    #[error("{what} range is inverted: {min} > {max}")]
    InvertedRange { what: &'static str, min: f32, max: f32 },

    #[error("spawn margin {margin} leaves no room in a {width}x{height} world")]
    MarginTooWide { margin: f32, width: f32, height: f32 },

    #[error("{what} must be positive, got {value}")]
    NotPositive { what: &'static str, value: f32 },

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}
