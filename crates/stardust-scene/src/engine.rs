//! Scene engine — the core of the game scene.
//!
//! `SceneEngine` owns the hecs ECS world, processes input commands at
//! frame boundaries, runs all systems, and produces `SceneSnapshot`s.
//! Fully deterministic given a seed and a timestamp/command stream.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stardust_core::commands::InputCommand;
use stardust_core::constants::{
    DEFAULT_DEVICE_HEIGHT, DEFAULT_DEVICE_WIDTH, DEFAULT_SCENE_HEIGHT, DEFAULT_SCENE_WIDTH,
};
use stardust_core::enums::ScenePhase;
use stardust_core::events::SceneEvent;
use stardust_core::state::SceneSnapshot;
use stardust_core::types::{PlayableRect, SceneTime};

use crate::scene_setup;
use crate::systems;
use crate::systems::spawner::SpawnSchedule;

/// Configuration for constructing a scene.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// RNG seed for determinism. Same seed + same input = same scene.
    pub seed: u64,
    /// Scene width in points.
    pub scene_width: f64,
    /// Scene height in points.
    pub scene_height: f64,
    /// Device width; only the aspect ratio matters (playable rect).
    pub device_width: f64,
    /// Device height; only the aspect ratio matters (playable rect).
    pub device_height: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scene_width: DEFAULT_SCENE_WIDTH,
            scene_height: DEFAULT_SCENE_HEIGHT,
            device_width: DEFAULT_DEVICE_WIDTH,
            device_height: DEFAULT_DEVICE_HEIGHT,
        }
    }
}

/// The scene engine. Owns the ECS world and all scene state.
pub struct SceneEngine {
    world: World,
    time: SceneTime,
    phase: ScenePhase,
    rng: ChaCha8Rng,
    scene_width: f64,
    scene_height: f64,
    playable_rect: PlayableRect,
    player: Option<hecs::Entity>,
    spawn_schedule: SpawnSchedule,
    command_queue: VecDeque<InputCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SceneEvent>,
}

impl SceneEngine {
    /// Create a new scene engine with the given config.
    pub fn new(config: SceneConfig) -> Self {
        let playable_rect = PlayableRect::from_scene(
            config.scene_width,
            config.scene_height,
            config.device_width,
            config.device_height,
        );
        Self {
            world: World::new(),
            time: SceneTime::default(),
            phase: ScenePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            scene_width: config.scene_width,
            scene_height: config.scene_height,
            playable_rect,
            player: None,
            spawn_schedule: SpawnSchedule::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue an input command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: InputCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = InputCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the scene by one frame and return the resulting snapshot.
    ///
    /// `now_secs` is a monotonically non-decreasing timestamp; the first
    /// call yields a zero delta. While paused the clock still records
    /// timestamps, so resuming does not integrate the paused interval.
    pub fn update(&mut self, now_secs: f64) -> SceneSnapshot {
        self.process_commands();
        self.time.update(now_secs);

        if self.phase == ScenePhase::Active {
            self.time.advance();
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.playable_rect,
            events,
        )
    }

    /// Get the current scene phase.
    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// Get the current scene time.
    pub fn time(&self) -> SceneTime {
        self.time
    }

    /// Get the outline rect computed at construction.
    pub fn playable_rect(&self) -> PlayableRect {
        self.playable_rect
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Total asteroids spawned since the scene started.
    pub fn asteroids_spawned(&self) -> u64 {
        self.spawn_schedule.spawned()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single input command.
    fn handle_command(&mut self, command: InputCommand) {
        match command {
            InputCommand::StartScene => {
                if self.phase == ScenePhase::Ready {
                    let player = scene_setup::spawn_player(&mut self.world, self.scene_width);
                    self.player = Some(player);
                    // Run-then-wait: the first asteroid lands on the
                    // first active frame, then one every interval.
                    self.spawn_schedule.arm(self.time.elapsed_secs);
                    self.phase = ScenePhase::Active;
                }
            }
            InputCommand::Pause => {
                if self.phase == ScenePhase::Active {
                    self.phase = ScenePhase::Paused;
                }
            }
            InputCommand::Resume => {
                if self.phase == ScenePhase::Paused {
                    self.phase = ScenePhase::Active;
                }
            }
            InputCommand::TouchDown { x, y } | InputCommand::TouchMoved { x, y } => {
                if let Some(player) = self.player {
                    systems::movement::set_target(&mut self.world, player, DVec2::new(x, y));
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let delta_secs = self.time.delta_secs;
        // 1. Asteroid spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_schedule,
            self.scene_width,
            self.scene_height,
            self.time.elapsed_secs,
            &mut self.events,
        );
        // 2. Player steering / arrival
        systems::movement::run(&mut self.world, delta_secs, &mut self.events);
        // 3. Timed descent transitions
        systems::descent::run(&mut self.world, delta_secs);
        // 4. Animation clocks
        systems::animation::run(&mut self.world, delta_secs);
        // 5. Cleanup (completed descents)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
    }
}
