//! Frame loop thread — runs the scene engine at 60Hz and stores snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in shared state for synchronous polling by the shell.

use std::sync::mpsc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::debug;

use stardust_core::state::SceneSnapshot;
use stardust_scene::engine::{SceneConfig, SceneEngine};

use crate::state::{FrameLoopCommand, SharedSnapshot};

/// Target frame rate (Hz).
pub const FRAME_RATE: u32 = 60;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the frame loop in a new thread.
///
/// Returns the command sender for the shell to use.
pub fn spawn_frame_loop(
    config: SceneConfig,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<FrameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<FrameLoopCommand>();

    std::thread::Builder::new()
        .name("stardust-frame-loop".into())
        .spawn(move || {
            run_frame_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn frame loop thread");

    cmd_tx
}

/// The frame loop. Runs until Shutdown command or channel disconnect.
fn run_frame_loop(
    config: SceneConfig,
    cmd_rx: mpsc::Receiver<FrameLoopCommand>,
    latest_snapshot: &Mutex<Option<SceneSnapshot>>,
) {
    let mut engine = SceneEngine::new(config);
    let start = Instant::now();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(FrameLoopCommand::Input(cmd)) => engine.queue_command(cmd),
                Ok(FrameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame with a monotonic timestamp
        let snapshot = engine.update(start.elapsed().as_secs_f64());

        for event in &snapshot.events {
            debug!("scene event: {event:?}");
        }

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}
