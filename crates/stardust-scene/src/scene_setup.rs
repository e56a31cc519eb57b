//! Entity spawn factories for setting up the scene world.

use hecs::World;

use stardust_core::components::{Facing, Player, SpriteAnimation};
use stardust_core::constants::{PLAYER_FRAME_COUNT, PLAYER_FRAME_SECS, PLAYER_START_Y};
use stardust_core::types::{Position, Velocity};

/// Spawn the player sprite at the bottom-center start position.
///
/// The walk animation is attached stopped; it starts on the first touch.
/// No `MoveTarget` is attached until the first touch arrives, so the
/// player stays put.
pub fn spawn_player(world: &mut World, scene_width: f64) -> hecs::Entity {
    world.spawn((
        Player,
        Position::new(scene_width / 2.0, PLAYER_START_Y),
        Velocity::default(),
        Facing::default(),
        SpriteAnimation::new(PLAYER_FRAME_COUNT, PLAYER_FRAME_SECS),
    ))
}
