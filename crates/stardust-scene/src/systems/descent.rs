//! Timed descent transitions: linear move-to over a fixed duration.
//!
//! The explicit replacement for the host engine's scheduled move
//! actions: each `Descent` advances by the frame delta and lands exactly
//! on its target when its duration elapses.

use hecs::World;

use stardust_core::components::Descent;
use stardust_core::types::Position;

/// Advance every active descent by one frame.
pub fn run(world: &mut World, delta_secs: f64) {
    for (_entity, (pos, descent)) in world.query_mut::<(&mut Position, &mut Descent)>() {
        if descent.complete {
            continue;
        }
        descent.elapsed_secs += delta_secs;
        if descent.elapsed_secs >= descent.duration_secs {
            pos.0 = descent.target;
            descent.complete = true;
        } else {
            pos.0 = descent.start.lerp(descent.target, descent.progress());
        }
    }
}
