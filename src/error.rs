use std::path::PathBuf;

use thiserror::Error;

/// Rejected configuration. Raised before any game state exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("window size must be non-zero, got {width}x{height}")]
    ZeroWindow { width: u32, height: u32 },

    #[error("road layout defines no lanes")]
    NoLanes,

    #[error("car capacity must be at least 1")]
    ZeroCapacity,

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("finish line y ({finish_y}) must be above the player's start ({start_y})")]
    FinishBelowStart { finish_y: f32, start_y: f32 },

    #[error("broad phase distance {distance} is below the widest possible overlap {required}")]
    BroadPhaseTooSmall { distance: f32, required: f32 },

    #[error("spawn jitter range {min}..={max} is empty")]
    EmptyJitter { min: u8, max: u8 },

    #[error("maximum difficulty {max} is below the initial difficulty {initial}")]
    DifficultyCap { initial: f32, max: f32 },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("font error: {0}")]
    Font(String),
}

impl From<String> for GameError {
    fn from(message: String) -> Self {
        GameError::Sdl(message)
    }
}

pub type RenderResult = Result<(), GameError>;
