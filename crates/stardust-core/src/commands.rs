//! Input commands sent from the host shell to the scene.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All input the scene reacts to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputCommand {
    /// Activate the scene: spawn the player and arm the asteroid spawner.
    StartScene,
    /// Freeze the scene clock.
    Pause,
    /// Resume a paused scene.
    Resume,
    /// Touch down in scene coordinates.
    TouchDown { x: f64, y: f64 },
    /// Touch moved in scene coordinates. Same effect as TouchDown: both
    /// overwrite the touch target and re-aim the player.
    TouchMoved { x: f64, y: f64 },
}
