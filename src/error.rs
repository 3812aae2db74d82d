use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`SimulationConfig`](crate::SimulationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("field_of_view_deg {0} must be between 0 and 360")]
    FieldOfView(f32),
    #[error("world dimensions must be positive, got {width}x{height}x{depth}")]
    EmptyWorld { width: f32, height: f32, depth: f32 },
}
