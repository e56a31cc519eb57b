//! Asteroid spawner: fixed five-second cadence with randomized descents.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use stardust_core::components::{Asteroid, Descent, SpriteAnimation};
use stardust_core::constants::{
    ASTEROID_FALL_SECS_MAX, ASTEROID_FALL_SECS_MIN, ASTEROID_FRAME_COUNT, ASTEROID_FRAME_SECS,
    ASTEROID_HEIGHT, ASTEROID_SPAWN_INTERVAL_SECS,
};
use stardust_core::enums::DescentPath;
use stardust_core::events::SceneEvent;
use stardust_core::types::Position;

/// Spawn cadence state. Armed when the scene starts; the first spawn
/// lands immediately (run-then-wait), then one every interval.
#[derive(Debug, Clone, Default)]
pub struct SpawnSchedule {
    armed: bool,
    next_spawn_at: f64,
    spawned: u64,
}

impl SpawnSchedule {
    /// Arm the cadence at the given active-time origin.
    pub fn arm(&mut self, elapsed_secs: f64) {
        self.armed = true;
        self.next_spawn_at = elapsed_secs;
    }

    /// Total asteroids spawned since the scene started.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}

/// Check the cadence and spawn any due asteroids.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut SpawnSchedule,
    scene_width: f64,
    scene_height: f64,
    elapsed_secs: f64,
    events: &mut Vec<SceneEvent>,
) {
    if !schedule.armed {
        return;
    }
    while elapsed_secs >= schedule.next_spawn_at {
        spawn_asteroid(world, rng, schedule, scene_width, scene_height, events);
        schedule.next_spawn_at += ASTEROID_SPAWN_INTERVAL_SECS;
    }
}

/// Spawn one asteroid just above the top edge with a randomized descent.
///
/// Draw order matches the original scene: fall duration, then spawn
/// column, then path selector. The spawn column is integer-uniform over
/// the scene width; the diagonal paths target the scene quarter-lines
/// regardless of the spawn column.
fn spawn_asteroid(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut SpawnSchedule,
    scene_width: f64,
    scene_height: f64,
    events: &mut Vec<SceneEvent>,
) {
    let duration_secs: f64 = rng.gen_range(ASTEROID_FALL_SECS_MIN..ASTEROID_FALL_SECS_MAX);
    let spawn_x = rng.gen_range(0..=scene_width as i64) as f64;
    let path = DescentPath::from_selector(rng.gen_range(0..3));

    let start = DVec2::new(spawn_x, scene_height + ASTEROID_HEIGHT / 2.0);
    let target = DVec2::new(
        path.target_x(spawn_x, scene_width),
        -ASTEROID_HEIGHT / 2.0,
    );

    let mut tumble = SpriteAnimation::new(ASTEROID_FRAME_COUNT, ASTEROID_FRAME_SECS);
    tumble.start();

    let seq = schedule.spawned;
    schedule.spawned += 1;

    world.spawn((
        Asteroid { seq },
        Position(start),
        Descent::new(start, target, duration_secs, path),
        tumble,
    ));

    events.push(SceneEvent::AsteroidSpawned {
        spawn_x,
        path,
        duration_secs,
    });
}
