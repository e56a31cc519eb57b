//! Scene constants and tuning parameters.

// --- Player ---

/// Player walk speed (points per second).
pub const PLAYER_MOVE_POINTS_PER_SEC: f64 = 250.0;

/// Number of frames in the player walk cycle.
pub const PLAYER_FRAME_COUNT: u32 = 6;

/// Seconds per player walk frame.
pub const PLAYER_FRAME_SECS: f64 = 0.1;

/// Vertical start position of the player (points).
pub const PLAYER_START_Y: f64 = 250.0;

// --- Asteroids ---

/// Number of frames in the asteroid tumble cycle.
pub const ASTEROID_FRAME_COUNT: u32 = 6;

/// Seconds per asteroid tumble frame.
pub const ASTEROID_FRAME_SECS: f64 = 0.05;

/// Nominal asteroid sprite height (points). Spawn and exit rows sit half
/// this above/below the scene edges so the sprite enters and leaves
/// fully offscreen (center-anchored).
pub const ASTEROID_HEIGHT: f64 = 60.0;

/// Seconds between asteroid spawns (fixed cadence).
pub const ASTEROID_SPAWN_INTERVAL_SECS: f64 = 5.0;

/// Fall duration lower bound (inclusive, seconds).
pub const ASTEROID_FALL_SECS_MIN: f64 = 1.0;

/// Fall duration upper bound (exclusive, seconds).
pub const ASTEROID_FALL_SECS_MAX: f64 = 3.0;

// --- Scene geometry ---

/// Default scene width (points).
pub const DEFAULT_SCENE_WIDTH: f64 = 1024.0;

/// Default scene height (points).
pub const DEFAULT_SCENE_HEIGHT: f64 = 768.0;

/// Default device width used for the playable-rect aspect ratio.
pub const DEFAULT_DEVICE_WIDTH: f64 = 375.0;

/// Default device height used for the playable-rect aspect ratio.
pub const DEFAULT_DEVICE_HEIGHT: f64 = 812.0;
