//! Game configuration.
//!
//! Every tunable lives in [`GameConfig`], which is built once (from defaults
//! or a JSON file), validated, and handed to the game loop by value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::geometry::{LaneSet, RoadLayout};

/// Environment variable naming a config file when none is passed on the command line.
pub const CONFIG_ENV_VAR: &str = "ROAD_CROSSING_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarConfig {
    pub half_width: f32,
    pub half_height: f32,
    /// Speed at difficulty 1.0, in units per tick.
    pub base_speed: f32,
    /// How far past the window edge a car spawns and despawns.
    pub offscreen_margin: f32,
    pub collision_margin: f32,
}

impl Default for CarConfig {
    fn default() -> Self {
        CarConfig {
            half_width: CAR_HALF_WIDTH,
            half_height: CAR_HALF_HEIGHT,
            base_speed: CAR_BASE_SPEED,
            offscreen_margin: CAR_OFFSCREEN_MARGIN,
            collision_margin: CAR_COLLISION_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_y: f32,
    /// Units per tick while a direction key is held.
    pub speed: f32,
    pub half_size: f32,
    pub collision_margin: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            start_y: PLAYER_STARTING_Y,
            speed: PLAYER_SPEED,
            half_size: PLAYER_HALF_SIZE,
            collision_margin: PLAYER_COLLISION_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub total_cars_on_screen: usize,
    pub base_period_ms: u32,
    pub period_step_ms: u32,
    pub jitter_min: u8,
    pub jitter_max: u8,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        SpawnConfig {
            total_cars_on_screen: TOTAL_CARS_ON_SCREEN,
            base_period_ms: BASE_SPAWN_PERIOD_MS,
            period_step_ms: SPAWN_PERIOD_STEP_MS,
            jitter_min: SPAWN_JITTER_MIN,
            jitter_max: SPAWN_JITTER_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    pub initial: f32,
    pub step_on_win: f32,
    pub max: f32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        DifficultyConfig {
            initial: INITIAL_DIFFICULTY,
            step_on_win: DIFFICULTY_STEP_ON_WIN,
            max: MAX_DIFFICULTY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub tick_period_ms: u64,
    /// Upper bound on catch-up ticks run in a single frame.
    pub max_ticks_per_frame: u32,
    pub finish_line_y: f32,
    pub broad_phase_distance: f32,
    pub roads: RoadLayout,
    pub car: CarConfig,
    pub player: PlayerConfig,
    pub spawn: SpawnConfig,
    pub difficulty: DifficultyConfig,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    pub font_path: Option<PathBuf>,
    pub font_point_size: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            tick_period_ms: TICK_PERIOD_MS,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
            finish_line_y: FINISH_LINE_Y,
            broad_phase_distance: BROAD_PHASE_DISTANCE,
            roads: RoadLayout::default(),
            car: CarConfig::default(),
            player: PlayerConfig::default(),
            spawn: SpawnConfig::default(),
            difficulty: DifficultyConfig::default(),
            rng_seed: None,
            font_path: Some(PathBuf::from(FONT_PATH)),
            font_point_size: FONT_POINT_SIZE,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolves the config source: explicit path, then `ROAD_CROSSING_CONFIG`,
    /// then the built-in defaults.
    pub fn resolve(cli_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = cli_path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));
        match path {
            Some(path) => Self::load(&path),
            None => {
                log::info!("Using default config");
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Half the field width plus the offscreen margin: cars spawn at
    /// `±field_bound` and are removed once past it.
    pub fn field_bound(&self) -> f32 {
        self.window_width as f32 / 2.0 + self.car.offscreen_margin
    }

    /// Lowest y the player's center may reach while staying on screen.
    pub fn player_floor_y(&self) -> f32 {
        -(self.window_height as f32) / 2.0 + self.player.half_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::ZeroWindow {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if LaneSet::from_layout(&self.roads).is_empty() {
            return Err(ConfigError::NoLanes);
        }
        if self.spawn.total_cars_on_screen == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        let positive: [(&'static str, f64); 9] = [
            ("tick_period_ms", self.tick_period_ms as f64),
            ("max_ticks_per_frame", self.max_ticks_per_frame as f64),
            ("spawn.base_period_ms", self.spawn.base_period_ms as f64),
            ("car.base_speed", self.car.base_speed as f64),
            ("car.half_width", self.car.half_width as f64),
            ("car.half_height", self.car.half_height as f64),
            ("player.speed", self.player.speed as f64),
            ("player.half_size", self.player.half_size as f64),
            ("difficulty.initial", self.difficulty.initial as f64),
        ];
        for (field, value) in positive {
            if value <= 0.0 || value.is_nan() {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.finish_line_y <= self.player.start_y {
            return Err(ConfigError::FinishBelowStart {
                finish_y: self.finish_line_y,
                start_y: self.player.start_y,
            });
        }

        let required = self.player.half_size
            + self.player.collision_margin
            + self.car.half_width
            + self.car.collision_margin;
        if self.broad_phase_distance < required {
            return Err(ConfigError::BroadPhaseTooSmall {
                distance: self.broad_phase_distance,
                required,
            });
        }

        if self.spawn.jitter_min > self.spawn.jitter_max {
            return Err(ConfigError::EmptyJitter {
                min: self.spawn.jitter_min,
                max: self.spawn.jitter_max,
            });
        }

        if self.difficulty.max < self.difficulty.initial {
            return Err(ConfigError::DifficultyCap {
                initial: self.difficulty.initial,
                max: self.difficulty.max,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "rng_seed": 42, "car": { "base_speed": 5.0 } }"#).unwrap();
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.car.base_speed, 5.0);
        assert_eq!(config.car.half_width, CAR_HALF_WIDTH);
        assert_eq!(config.roads, RoadLayout::default());
    }

    #[test]
    fn rejects_zero_lanes() {
        let mut config = GameConfig::default();
        config.roads.count = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoLanes)));
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = GameConfig::from_json(r#"{ "spawn": { "total_cars_on_screen": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity));
    }

    #[test]
    fn rejects_finish_below_start() {
        let mut config = GameConfig::default();
        config.finish_line_y = config.player.start_y;
        assert!(matches!(config.validate(), Err(ConfigError::FinishBelowStart { .. })));
    }

    #[test]
    fn rejects_narrow_broad_phase() {
        let mut config = GameConfig::default();
        config.broad_phase_distance = 10.0;
        assert!(matches!(config.validate(), Err(ConfigError::BroadPhaseTooSmall { .. })));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let mut config = GameConfig::default();
        config.player.speed = 0.0;
        match config.validate() {
            Err(ConfigError::NonPositive { field, .. }) => assert_eq!(field, "player.speed"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_jitter() {
        let mut config = GameConfig::default();
        config.spawn.jitter_min = 5;
        config.spawn.jitter_max = 4;
        assert!(matches!(config.validate(), Err(ConfigError::EmptyJitter { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(GameConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GameConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn field_bound_includes_margin() {
        let config = GameConfig::default();
        assert_eq!(config.field_bound(), 440.0);
        assert_eq!(config.player_floor_y(), -385.0);
    }
}
