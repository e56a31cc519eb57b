//! Enumeration types used throughout the scene.

use serde::{Deserialize, Serialize};

/// Scene phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    /// Constructed but not yet started.
    #[default]
    Ready,
    /// Frame clock running, spawner armed.
    Active,
    /// Frozen; wall clock passes without integrating.
    Paused,
}

/// Descent trajectory assigned to an asteroid at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescentPath {
    /// Straight down the spawn column.
    Straight,
    /// Diagonal toward the right quarter-line (3/4 of scene width).
    RightQuarter,
    /// Diagonal toward the left quarter-line (1/4 of scene width).
    LeftQuarter,
}

impl DescentPath {
    /// Map a uniform selector in {0, 1, 2} to a path.
    pub fn from_selector(selector: u32) -> Self {
        match selector {
            0 => DescentPath::Straight,
            1 => DescentPath::RightQuarter,
            _ => DescentPath::LeftQuarter,
        }
    }

    /// Target column for a descent that started at `spawn_x`.
    ///
    /// Only the straight path keeps its spawn column; the diagonal
    /// targets are the scene quarter-lines and ignore `spawn_x`
    /// entirely. This matches the original scene and is intentional.
    pub fn target_x(&self, spawn_x: f64, scene_width: f64) -> f64 {
        match self {
            DescentPath::Straight => spawn_x,
            DescentPath::RightQuarter => scene_width / 2.0 + scene_width / 4.0,
            DescentPath::LeftQuarter => scene_width / 2.0 - scene_width / 4.0,
        }
    }
}
