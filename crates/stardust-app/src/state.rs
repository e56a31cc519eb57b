//! State shared between the frame-loop thread and the shell.

use std::sync::{Arc, Mutex};

use stardust_core::commands::InputCommand;
use stardust_core::state::SceneSnapshot;

/// Commands sent from the shell to the frame-loop thread.
#[derive(Debug)]
pub enum FrameLoopCommand {
    /// An input command to forward to the scene engine.
    Input(InputCommand),
    /// Shut down the frame loop thread gracefully.
    Shutdown,
}

/// Latest snapshot produced by the frame loop, for synchronous polling.
pub type SharedSnapshot = Arc<Mutex<Option<SceneSnapshot>>>;
