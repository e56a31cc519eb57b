//! Headless shell for the Stardust scene: a paced frame-loop thread and
//! the shared state it communicates through.

pub mod frame_loop;
pub mod state;
