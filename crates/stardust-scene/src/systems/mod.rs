//! Per-frame scene systems, run in a fixed order by the engine.

pub mod animation;
pub mod cleanup;
pub mod descent;
pub mod movement;
pub mod snapshot;
pub mod spawner;
