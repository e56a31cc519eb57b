//! Headless demo shell: runs a scripted scene session, logs events, and
//! prints the final snapshot as JSON.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::info;

use stardust_app::frame_loop;
use stardust_app::state::{FrameLoopCommand, SharedSnapshot};
use stardust_core::commands::InputCommand;
use stardust_scene::engine::SceneConfig;

fn main() {
    env_logger::init();

    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let cmd_tx = frame_loop::spawn_frame_loop(SceneConfig::default(), Arc::clone(&latest_snapshot));

    cmd_tx
        .send(FrameLoopCommand::Input(InputCommand::StartScene))
        .expect("frame loop exited early");

    // Scripted session: walk right, then back toward the upper left,
    // while the spawner runs its five-second cadence.
    for second in 0..12u32 {
        match second {
            1 => {
                let _ = cmd_tx.send(FrameLoopCommand::Input(InputCommand::TouchDown {
                    x: 900.0,
                    y: 300.0,
                }));
            }
            6 => {
                let _ = cmd_tx.send(FrameLoopCommand::Input(InputCommand::TouchMoved {
                    x: 100.0,
                    y: 500.0,
                }));
            }
            _ => {}
        }

        thread::sleep(Duration::from_secs(1));

        if let Ok(lock) = latest_snapshot.lock() {
            if let Some(snapshot) = lock.as_ref() {
                if let Some(player) = &snapshot.player {
                    info!(
                        "t={:.1}s frame={} player=({:.1}, {:.1}) walking={} asteroids={}",
                        snapshot.time.elapsed_secs,
                        snapshot.time.frame,
                        player.position.0.x,
                        player.position.0.y,
                        player.walking,
                        snapshot.asteroids.len()
                    );
                }
            }
        }
    }

    if let Ok(lock) = latest_snapshot.lock() {
        if let Some(snapshot) = lock.as_ref() {
            let json = serde_json::to_string_pretty(snapshot).expect("snapshot serializes");
            println!("{json}");
        }
    }

    let _ = cmd_tx.send(FrameLoopCommand::Shutdown);
}
