// Default values for `GameConfig`. Nothing reads these at runtime except
// the config defaults, so a loaded config file always wins.

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 800;
pub const TICK_PERIOD_MS: u64 = 10;
pub const MAX_TICKS_PER_FRAME: u32 = 8;

pub const TOTAL_CARS_ON_SCREEN: usize = 12;
pub const BASE_SPAWN_PERIOD_MS: u32 = 250;
pub const SPAWN_PERIOD_STEP_MS: u32 = 10;
pub const SPAWN_JITTER_MIN: u8 = 1;
pub const SPAWN_JITTER_MAX: u8 = 10;

// Cars are 40x20 and leave the field 40px past the window edge.
pub const CAR_HALF_WIDTH: f32 = 20.0;
pub const CAR_HALF_HEIGHT: f32 = 10.0;
pub const CAR_BASE_SPEED: f32 = 3.0;
pub const CAR_OFFSCREEN_MARGIN: f32 = 40.0;
pub const CAR_COLLISION_MARGIN: f32 = 1.0;

pub const PLAYER_STARTING_Y: f32 = -350.0;
pub const PLAYER_SPEED: f32 = 2.0;
pub const PLAYER_HALF_SIZE: f32 = 15.0;
pub const PLAYER_COLLISION_MARGIN: f32 = 2.0;

pub const FINISH_LINE_Y: f32 = 350.0;
pub const BROAD_PHASE_DISTANCE: f32 = 50.0;

pub const ROAD_COUNT: usize = 5;
pub const TOP_ROAD_CENTER_Y: f32 = 275.0;
pub const ROAD_SPACING: f32 = 120.0;
pub const LANE_OFFSET: f32 = 30.0;
pub const ROAD_HALF_HEIGHT: f32 = 55.0;

pub const INITIAL_DIFFICULTY: f32 = 1.0;
pub const DIFFICULTY_STEP_ON_WIN: f32 = 0.25;
pub const MAX_DIFFICULTY: f32 = 4.0;

pub const FONT_PATH: &str = "assets/fonts/font.ttf";
pub const FONT_POINT_SIZE: u16 = 28;
