//! ECS components for hecs entities.
//!
//! Components are plain data structs with small state helpers.
//! Scene logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::DescentPath;

/// Marks the player-controlled sprite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a falling asteroid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Asteroid {
    /// Spawn sequence number, for stable snapshot ordering.
    pub seq: u64,
}

/// Horizontal facing as a sprite x-scale (-1.0 left, 1.0 right).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Facing {
    pub x_scale: f64,
}

impl Default for Facing {
    fn default() -> Self {
        Self { x_scale: 1.0 }
    }
}

/// The player's current touch target. Overwritten by each new touch,
/// never explicitly cleared — once arrived, the target simply keeps
/// matching the player position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveTarget {
    pub point: DVec2,
}

/// A looping frame-sequence animation clock.
///
/// Replaces the keyed action table of the original host engine:
/// `start` is a no-op while already playing, so repeated starts never
/// reset the frame clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpriteAnimation {
    pub frame_count: u32,
    pub secs_per_frame: f64,
    pub elapsed_secs: f64,
    pub playing: bool,
}

impl SpriteAnimation {
    /// A stopped animation clock at frame 0.
    pub fn new(frame_count: u32, secs_per_frame: f64) -> Self {
        Self {
            frame_count,
            secs_per_frame,
            elapsed_secs: 0.0,
            playing: false,
        }
    }

    /// Start the loop if it is not already running.
    pub fn start(&mut self) {
        if !self.playing {
            self.playing = true;
            self.elapsed_secs = 0.0;
        }
    }

    /// Stop the loop.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Current frame index, looping.
    pub fn frame(&self) -> u32 {
        ((self.elapsed_secs / self.secs_per_frame) as u64 % self.frame_count as u64) as u32
    }
}

/// One active timed transition: a linear move from `start` to `target`
/// over `duration_secs`, then unconditional removal by cleanup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Descent {
    pub start: DVec2,
    pub target: DVec2,
    pub duration_secs: f64,
    pub elapsed_secs: f64,
    pub path: DescentPath,
    /// Set once the duration has fully elapsed.
    pub complete: bool,
}

impl Descent {
    pub fn new(start: DVec2, target: DVec2, duration_secs: f64, path: DescentPath) -> Self {
        Self {
            start,
            target,
            duration_secs,
            elapsed_secs: 0.0,
            path,
            complete: false,
        }
    }

    /// Interpolation parameter in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            1.0
        } else {
            (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
        }
    }
}
