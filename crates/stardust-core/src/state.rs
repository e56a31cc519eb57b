//! Scene snapshot — the complete visible state built after each frame.

use serde::{Deserialize, Serialize};

use crate::enums::{DescentPath, ScenePhase};
use crate::events::SceneEvent;
use crate::types::{PlayableRect, Position, SceneTime, Velocity};

/// Complete scene state produced by each `update` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SceneTime,
    pub phase: ScenePhase,
    /// None until the scene has been started.
    pub player: Option<PlayerView>,
    pub asteroids: Vec<AsteroidView>,
    /// Outline-only region for the frontend border; no gameplay effect.
    pub playable_rect: PlayableRect,
    /// Events since the previous snapshot.
    pub events: Vec<SceneEvent>,
}

/// The player sprite as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub velocity: Velocity,
    /// Horizontal mirror: -1.0 faces left, 1.0 faces right.
    pub x_scale: f64,
    /// Whether the walk cycle is running.
    pub walking: bool,
    /// Current walk-cycle frame index.
    pub frame: u32,
}

/// A falling asteroid as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidView {
    /// Spawn sequence number (stable ordering key).
    pub seq: u64,
    pub position: Position,
    pub path: DescentPath,
    /// Descent progress in [0, 1].
    pub progress: f64,
    /// Current tumble frame index.
    pub frame: u32,
}
