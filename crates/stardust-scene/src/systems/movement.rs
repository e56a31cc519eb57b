//! Movement controller: steering toward the touch target with exact arrival.
//!
//! Velocity is always a constant-speed vector toward the last touch
//! target, or zero once the target has been reached.

use glam::DVec2;
use hecs::{Entity, World};

use stardust_core::components::{Facing, MoveTarget, Player, SpriteAnimation};
use stardust_core::constants::PLAYER_MOVE_POINTS_PER_SEC;
use stardust_core::events::SceneEvent;
use stardust_core::types::{Position, Velocity};

/// Aim the player at a new touch target.
///
/// Starts the walk loop (idempotent — a second touch while walking never
/// resets the frame clock), overwrites the stored target, and sets the
/// velocity to the unit direction scaled to walk speed.
///
/// A target equal to the current position is treated as already arrived:
/// the velocity stays zero and the walk loop stops, instead of dividing
/// by a zero distance.
pub fn set_target(world: &mut World, player: Entity, point: DVec2) {
    {
        let Ok((pos, vel, animation)) =
            world.query_one_mut::<(&Position, &mut Velocity, &mut SpriteAnimation)>(player)
        else {
            return;
        };

        let offset = point - pos.0;
        let distance = offset.length();
        if distance > 0.0 {
            animation.start();
            vel.0 = offset / distance * PLAYER_MOVE_POINTS_PER_SEC;
        } else {
            vel.0 = DVec2::ZERO;
            animation.stop();
        }
    }

    let _ = world.insert_one(player, MoveTarget { point });
}

/// Per-frame steering step for the player.
///
/// Arrival policy: when the remaining distance would be covered this
/// frame, snap exactly onto the target, zero the velocity, and stop the
/// walk loop — exact arrival instead of overshoot or asymptotic
/// approach. Otherwise integrate one constant-speed step and flip facing
/// to match the sign of the horizontal velocity (zero leaves it
/// unchanged). Without a target the player does not move.
pub fn run(world: &mut World, delta_secs: f64, events: &mut Vec<SceneEvent>) {
    for (_entity, (_player, pos, vel, target, facing, animation)) in world.query_mut::<(
        &Player,
        &mut Position,
        &mut Velocity,
        &MoveTarget,
        &mut Facing,
        &mut SpriteAnimation,
    )>() {
        let remaining = pos.0.distance(target.point);
        if remaining <= PLAYER_MOVE_POINTS_PER_SEC * delta_secs {
            // Emit once per arrival, not on every idle frame after it.
            if remaining > 0.0 || vel.0 != DVec2::ZERO {
                events.push(SceneEvent::PlayerArrived {
                    x: target.point.x,
                    y: target.point.y,
                });
            }
            pos.0 = target.point;
            vel.0 = DVec2::ZERO;
            animation.stop();
        } else {
            pos.0 += vel.0 * delta_secs;
            if vel.0.x < 0.0 {
                facing.x_scale = -1.0;
            }
            if vel.0.x > 0.0 {
                facing.x_scale = 1.0;
            }
        }
    }
}
