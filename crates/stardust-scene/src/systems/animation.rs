//! Frame-sequence animation clocks.

use hecs::World;

use stardust_core::components::SpriteAnimation;

/// Advance every playing animation clock by one frame. The frame index
/// is derived from the elapsed clock, looping.
pub fn run(world: &mut World, delta_secs: f64) {
    for (_entity, animation) in world.query_mut::<&mut SpriteAnimation>() {
        if animation.playing {
            animation.elapsed_secs += delta_secs;
        }
    }
}
