//! Core types and definitions for the Stardust scene.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input commands, scene snapshots, events, and constants.
//! It has no dependency on any runtime framework or renderer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
