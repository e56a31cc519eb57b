//! Fundamental geometric and timing types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in scene space (points). Origin bottom-left, y up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// 2D velocity in scene space (points/second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Euclidean distance to another position in points.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Offset vector from this position to another.
    pub fn offset_to(&self, other: &Position) -> DVec2 {
        other.0 - self.0
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Speed magnitude (points/second).
    pub fn speed(&self) -> f64 {
        self.0.length()
    }
}

/// Frame clock driven by the host's monotonic timestamps.
///
/// `update` records the per-frame delta (the first call yields 0);
/// `advance` accumulates active time, so paused frames consume wall
/// clock without inflating `elapsed_secs`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SceneTime {
    /// Frames the scene has been active for.
    pub frame: u64,
    /// Accumulated active time in seconds.
    pub elapsed_secs: f64,
    /// Delta of the most recent frame in seconds.
    pub delta_secs: f64,
    #[serde(skip)]
    last_timestamp: Option<f64>,
}

impl SceneTime {
    /// Record a new frame timestamp. The first call yields a zero delta;
    /// a timestamp earlier than the previous one clamps the delta to 0.
    pub fn update(&mut self, now_secs: f64) {
        self.delta_secs = match self.last_timestamp {
            Some(last) => (now_secs - last).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now_secs);
    }

    /// Advance active time by the current frame delta.
    pub fn advance(&mut self) {
        self.frame += 1;
        self.elapsed_secs += self.delta_secs;
    }
}

/// The aspect-ratio-normalized sub-region of the scene intended to be
/// visible on all device shapes. Drawn as an outline only; it has no
/// effect on movement or spawning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayableRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlayableRect {
    /// Computed once at scene construction from the device aspect ratio.
    pub fn from_scene(scene_width: f64, scene_height: f64, device_width: f64, device_height: f64) -> Self {
        let max_aspect_ratio = device_height / device_width;
        let playable_width = scene_height / max_aspect_ratio;
        let playable_margin = (scene_width - playable_width) / 2.0;
        Self {
            x: 0.0,
            y: playable_margin,
            width: playable_width,
            height: scene_height,
        }
    }
}
