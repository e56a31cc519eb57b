//! Headless engine for the Stardust scene.
//!
//! `SceneEngine` owns the hecs ECS world, processes input commands, runs
//! the per-frame systems, and produces `SceneSnapshot`s. Completely
//! headless (no renderer dependency), enabling deterministic testing.

pub mod engine;
pub mod scene_setup;
pub mod systems;

#[cfg(test)]
mod tests;
