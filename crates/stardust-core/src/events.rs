//! Events emitted by the scene for frontend feedback.

use serde::{Deserialize, Serialize};

use crate::enums::DescentPath;

/// One-shot events, drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// A new asteroid entered the scene above the top edge.
    AsteroidSpawned {
        spawn_x: f64,
        path: DescentPath,
        duration_secs: f64,
    },
    /// An asteroid finished its descent and was removed.
    AsteroidRemoved,
    /// The player snapped onto its touch target.
    PlayerArrived { x: f64, y: f64 },
}
