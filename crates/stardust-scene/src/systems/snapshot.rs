//! Snapshot system: queries the ECS world and builds a complete SceneSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use stardust_core::components::{Asteroid, Descent, Facing, Player, SpriteAnimation};
use stardust_core::enums::ScenePhase;
use stardust_core::events::SceneEvent;
use stardust_core::state::{AsteroidView, PlayerView, SceneSnapshot};
use stardust_core::types::{PlayableRect, Position, SceneTime, Velocity};

/// Build a complete SceneSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SceneTime,
    phase: ScenePhase,
    playable_rect: PlayableRect,
    events: Vec<SceneEvent>,
) -> SceneSnapshot {
    SceneSnapshot {
        time: *time,
        phase,
        player: build_player(world),
        asteroids: build_asteroids(world),
        playable_rect,
        events,
    }
}

/// Build the player view, if the scene has been started.
fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Player, &Position, &Velocity, &Facing, &SpriteAnimation)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel, facing, animation))| PlayerView {
            position: *pos,
            velocity: *vel,
            x_scale: facing.x_scale,
            walking: animation.playing,
            frame: animation.frame(),
        })
}

/// Build AsteroidView list from all live asteroids, in spawn order.
fn build_asteroids(world: &World) -> Vec<AsteroidView> {
    let mut asteroids: Vec<AsteroidView> = world
        .query::<(&Asteroid, &Position, &Descent, &SpriteAnimation)>()
        .iter()
        .map(|(_, (asteroid, pos, descent, animation))| AsteroidView {
            seq: asteroid.seq,
            position: *pos,
            path: descent.path,
            progress: descent.progress(),
            frame: animation.frame(),
        })
        .collect();

    asteroids.sort_by_key(|a| a.seq);
    asteroids
}
