//! Cleanup system: removes asteroids whose descent has completed.

use hecs::{Entity, World};

use stardust_core::components::{Asteroid, Descent};
use stardust_core::events::SceneEvent;

/// Despawn asteroids with a completed descent. Removal is unconditional
/// at completion and never happens earlier. Uses a pre-allocated buffer
/// to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<SceneEvent>) {
    despawn_buffer.clear();

    for (entity, (_asteroid, descent)) in world.query_mut::<(&Asteroid, &Descent)>() {
        if descent.complete {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
        events.push(SceneEvent::AsteroidRemoved);
    }
}
