//! Tests for the scene engine: steering/arrival, spawn cadence, descent
//! lifecycle, pause semantics, and determinism.

use glam::DVec2;

use stardust_core::commands::InputCommand;
use stardust_core::components::{Asteroid, Descent, Player, SpriteAnimation};
use stardust_core::constants::{
    ASTEROID_FALL_SECS_MAX, ASTEROID_FALL_SECS_MIN, ASTEROID_HEIGHT, PLAYER_MOVE_POINTS_PER_SEC,
};
use stardust_core::enums::ScenePhase;
use stardust_core::events::SceneEvent;
use stardust_core::state::SceneSnapshot;

use crate::engine::{SceneConfig, SceneEngine};

/// One frame at 60Hz.
const FRAME: f64 = 1.0 / 60.0;

/// Monotonic frame clock for driving `update`.
struct Clock {
    frame: u64,
}

impl Clock {
    fn new() -> Self {
        Self { frame: 0 }
    }

    fn next(&mut self) -> f64 {
        self.frame += 1;
        self.frame as f64 * FRAME
    }
}

fn started_engine(seed: u64) -> (SceneEngine, Clock) {
    let mut engine = SceneEngine::new(SceneConfig {
        seed,
        ..Default::default()
    });
    engine.queue_command(InputCommand::StartScene);
    engine.update(0.0);
    (engine, Clock::new())
}

fn player_anim_elapsed(engine: &SceneEngine) -> f64 {
    let mut query = engine.world().query::<(&Player, &SpriteAnimation)>();
    let elapsed = query
        .iter()
        .next()
        .map(|(_, (_, animation))| animation.elapsed_secs);
    elapsed.expect("player should exist")
}

// ---- Movement controller ----

#[test]
fn test_step_moves_strictly_closer_and_faces_left() {
    let (mut engine, mut clock) = started_engine(42);
    // Player starts at (512, 250); target far to the left.
    let target = DVec2::new(100.0, 250.0);
    engine.queue_command(InputCommand::TouchDown {
        x: target.x,
        y: target.y,
    });

    let mut last_distance = f64::INFINITY;
    for _ in 0..10 {
        let snap = engine.update(clock.next());
        let player = snap.player.expect("player should exist");
        let distance = player.position.0.distance(target);
        assert!(
            distance < last_distance,
            "each step must move strictly closer: {distance} vs {last_distance}"
        );
        assert_eq!(player.x_scale, -1.0, "moving left must face left");
        assert!(player.walking, "walk loop must run while moving");
        last_distance = distance;
    }
}

#[test]
fn test_step_faces_right_when_moving_right() {
    let (mut engine, mut clock) = started_engine(42);
    engine.queue_command(InputCommand::TouchDown { x: 900.0, y: 300.0 });
    let snap = engine.update(clock.next());
    let player = snap.player.unwrap();
    assert_eq!(player.x_scale, 1.0);
    assert!(player.velocity.0.x > 0.0);
}

#[test]
fn test_vertical_movement_leaves_facing_unchanged() {
    let (mut engine, mut clock) = started_engine(42);
    // Straight up from (512, 250): zero horizontal velocity.
    engine.queue_command(InputCommand::TouchDown { x: 512.0, y: 600.0 });
    let snap = engine.update(clock.next());
    let player = snap.player.unwrap();
    assert_eq!(player.velocity.0.x, 0.0);
    assert_eq!(player.x_scale, 1.0, "default facing must be preserved");
}

#[test]
fn test_arrival_snaps_exactly_and_stops_walk() {
    let (mut engine, mut clock) = started_engine(42);
    // 2 points away: covered in one frame at 250 points/sec.
    engine.queue_command(InputCommand::TouchDown { x: 514.0, y: 250.0 });
    let snap = engine.update(clock.next());

    let player = snap.player.unwrap();
    assert_eq!(player.position.0, DVec2::new(514.0, 250.0), "snap must be exact");
    assert_eq!(player.velocity.0, DVec2::ZERO);
    assert!(!player.walking, "walk loop must stop on arrival");
    assert!(
        snap.events
            .iter()
            .any(|e| matches!(e, SceneEvent::PlayerArrived { x, y } if *x == 514.0 && *y == 250.0)),
        "arrival must be reported once"
    );

    // Idle frames after arrival must not re-report it.
    let snap = engine.update(clock.next());
    assert!(
        !snap
            .events
            .iter()
            .any(|e| matches!(e, SceneEvent::PlayerArrived { .. })),
        "no arrival event on idle frames"
    );
    let player = snap.player.unwrap();
    assert_eq!(player.position.0, DVec2::new(514.0, 250.0));
}

#[test]
fn test_arrival_never_overshoots() {
    let (mut engine, mut clock) = started_engine(42);
    let target = DVec2::new(700.0, 400.0);
    engine.queue_command(InputCommand::TouchDown {
        x: target.x,
        y: target.y,
    });

    // Run until arrival; the distance to the target must shrink
    // monotonically and end at exactly zero, never negative overshoot.
    let mut last_distance = f64::INFINITY;
    for _ in 0..2000 {
        let snap = engine.update(clock.next());
        let player = snap.player.unwrap();
        if player.position.0 == target {
            assert_eq!(player.velocity.0, DVec2::ZERO);
            return;
        }
        let distance = player.position.0.distance(target);
        assert!(distance < last_distance, "distance must shrink every frame");
        last_distance = distance;
    }
    panic!("player never arrived");
}

#[test]
fn test_retarget_while_walking_keeps_animation_clock() {
    let (mut engine, mut clock) = started_engine(42);
    engine.queue_command(InputCommand::TouchDown { x: 100.0, y: 250.0 });
    for _ in 0..10 {
        engine.update(clock.next());
    }
    let before = player_anim_elapsed(&engine);
    assert!(before > 0.0);

    // Re-aim mid-walk: the walk loop must not restart.
    engine.queue_command(InputCommand::TouchMoved { x: 100.0, y: 600.0 });
    engine.update(clock.next());
    let after = player_anim_elapsed(&engine);
    assert!(
        after >= before,
        "retargeting must not reset the walk clock: {after} < {before}"
    );
}

#[test]
fn test_zero_distance_target_yields_zero_velocity() {
    let (mut engine, mut clock) = started_engine(42);
    // Touch exactly the player's current position.
    engine.queue_command(InputCommand::TouchDown { x: 512.0, y: 250.0 });
    let snap = engine.update(clock.next());
    let player = snap.player.unwrap();
    assert_eq!(player.velocity.0, DVec2::ZERO, "no NaN direction allowed");
    assert!(player.position.0.x.is_finite() && player.position.0.y.is_finite());
    assert!(!player.walking);
}

#[test]
fn test_no_target_means_no_movement() {
    let (mut engine, mut clock) = started_engine(42);
    for _ in 0..30 {
        let snap = engine.update(clock.next());
        let player = snap.player.unwrap();
        assert_eq!(player.position.0, DVec2::new(512.0, 250.0));
        assert!(!player.walking);
    }
}

#[test]
fn test_touch_before_start_is_ignored() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(InputCommand::TouchDown { x: 10.0, y: 10.0 });
    let snap = engine.update(0.0);
    assert_eq!(snap.phase, ScenePhase::Ready);
    assert!(snap.player.is_none());
}

// ---- Asteroid spawner ----

#[test]
fn test_first_spawn_on_activation() {
    let (engine, _clock) = started_engine(42);
    assert_eq!(engine.asteroids_spawned(), 1, "run-then-wait spawns immediately");
}

#[test]
fn test_spawn_cadence_one_per_interval() {
    let (mut engine, mut clock) = started_engine(42);
    let mut spawn_events = 1u64; // activation frame already spawned one

    // 20 seconds active plus half a second of slack (spawns land at
    // 0, 5, 10, 15, 20 — well clear of the 25s boundary).
    for _ in 0..(20 * 60 + 30) {
        let snap = engine.update(clock.next());
        spawn_events += snap
            .events
            .iter()
            .filter(|e| matches!(e, SceneEvent::AsteroidSpawned { .. }))
            .count() as u64;
    }

    assert_eq!(spawn_events, 5, "20s active = first spawn + 20/5 more");
    assert_eq!(engine.asteroids_spawned(), 5);
}

#[test]
fn test_spawned_descent_geometry() {
    let (engine, _clock) = started_engine(42);

    let mut query = engine.world().query::<(&Asteroid, &Descent)>();
    let (_, (_, descent)) = query.iter().next().expect("one asteroid spawned");

    // Starts centered just above the top edge, ends just below the
    // bottom edge, on the column the chosen path dictates.
    assert_eq!(descent.start.y, 768.0 + ASTEROID_HEIGHT / 2.0);
    assert_eq!(descent.target.y, -ASTEROID_HEIGHT / 2.0);
    assert!(descent.start.x >= 0.0 && descent.start.x <= 1024.0);
    assert_eq!(
        descent.target.x,
        descent.path.target_x(descent.start.x, 1024.0)
    );
    assert!(descent.duration_secs >= ASTEROID_FALL_SECS_MIN);
    assert!(descent.duration_secs < ASTEROID_FALL_SECS_MAX);
}

#[test]
fn test_asteroid_removed_exactly_at_duration() {
    let (mut engine, mut clock) = started_engine(42);

    let duration = {
        let mut query = engine.world().query::<(&Asteroid, &Descent)>();
        let (_, (_, descent)) = query.iter().next().expect("one asteroid spawned");
        descent.duration_secs
    };

    let mut seen_at = 0.0_f64;
    // Duration is < 3s, the second spawn lands at 5s — no overlap.
    for _ in 0..(4 * 60) {
        let snap = engine.update(clock.next());
        let present = snap.asteroids.iter().any(|a| a.seq == 0);
        if present {
            assert!(
                snap.time.elapsed_secs < duration,
                "asteroid must never outlive its duration"
            );
            seen_at = snap.time.elapsed_secs;
        } else {
            assert!(
                snap.time.elapsed_secs >= duration,
                "asteroid must not be removed early"
            );
            // Present on the frame before removal.
            assert!(seen_at > duration - 2.0 * FRAME);
            assert!(
                snap.events
                    .iter()
                    .any(|e| matches!(e, SceneEvent::AsteroidRemoved)),
                "removal must be reported in the frame it happens"
            );
            return;
        }
    }
    panic!("asteroid was never removed");
}

#[test]
fn test_asteroids_do_not_disturb_player() {
    let (mut engine, mut clock) = started_engine(42);
    // Park the player and let several spawn/remove cycles pass.
    for _ in 0..(12 * 60) {
        let snap = engine.update(clock.next());
        let player = snap.player.unwrap();
        assert_eq!(player.position.0, DVec2::new(512.0, 250.0));
    }
    assert!(engine.asteroids_spawned() >= 3);
}

// ---- Pause / resume ----

#[test]
fn test_pause_freezes_clock_and_motion() {
    let (mut engine, mut clock) = started_engine(42);
    engine.queue_command(InputCommand::TouchDown { x: 100.0, y: 250.0 });
    for _ in 0..30 {
        engine.update(clock.next());
    }

    engine.queue_command(InputCommand::Pause);
    let frozen = engine.update(clock.next());
    assert_eq!(frozen.phase, ScenePhase::Paused);
    let frozen_player = frozen.player.clone().unwrap();

    for _ in 0..60 {
        let snap = engine.update(clock.next());
        assert_eq!(snap.time.frame, frozen.time.frame);
        assert_eq!(snap.time.elapsed_secs, frozen.time.elapsed_secs);
        assert_eq!(snap.player.unwrap().position, frozen_player.position);
    }

    // Resume: exactly one frame of progress, not the whole paused gap.
    engine.queue_command(InputCommand::Resume);
    let resumed = engine.update(clock.next());
    assert_eq!(resumed.phase, ScenePhase::Active);
    assert_eq!(resumed.time.frame, frozen.time.frame + 1);
    let moved = resumed
        .player
        .unwrap()
        .position
        .0
        .distance(frozen_player.position.0);
    assert!(
        moved <= PLAYER_MOVE_POINTS_PER_SEC * FRAME + 1e-9,
        "resume must not integrate the paused interval: moved {moved}"
    );
}

#[test]
fn test_first_update_yields_zero_delta() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(InputCommand::StartScene);
    // Large first timestamp: still a zero delta, nothing integrates.
    let snap = engine.update(1000.0);
    assert_eq!(snap.time.delta_secs, 0.0);
    assert_eq!(snap.time.elapsed_secs, 0.0);
    assert_eq!(snap.player.unwrap().position.0, DVec2::new(512.0, 250.0));
}

// ---- Determinism ----

fn scripted_frame(engine: &mut SceneEngine, frame: u64, now: f64) -> SceneSnapshot {
    if frame == 60 {
        engine.queue_command(InputCommand::TouchDown { x: 800.0, y: 600.0 });
    }
    if frame == 200 {
        engine.queue_command(InputCommand::TouchMoved { x: 100.0, y: 100.0 });
    }
    engine.update(now)
}

#[test]
fn test_determinism_same_seed() {
    let (mut engine_a, _) = started_engine(12345);
    let (mut engine_b, _) = started_engine(12345);

    for frame in 1..=600u64 {
        let now = frame as f64 * FRAME;
        let snap_a = scripted_frame(&mut engine_a, frame, now);
        let snap_b = scripted_frame(&mut engine_b, frame, now);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds_diverge() {
    let (mut engine_a, mut clock_a) = started_engine(111);
    let (mut engine_b, mut clock_b) = started_engine(222);

    let mut spawns_a = Vec::new();
    let mut spawns_b = Vec::new();
    for _ in 0..600 {
        let snap_a = engine_a.update(clock_a.next());
        let snap_b = engine_b.update(clock_b.next());
        for event in snap_a
            .events
            .iter()
            .filter(|e| matches!(e, SceneEvent::AsteroidSpawned { .. }))
        {
            spawns_a.push(serde_json::to_string(event).unwrap());
        }
        for event in snap_b
            .events
            .iter()
            .filter(|e| matches!(e, SceneEvent::AsteroidSpawned { .. }))
        {
            spawns_b.push(serde_json::to_string(event).unwrap());
        }
    }

    // Same cadence, different draws.
    assert_eq!(spawns_a.len(), spawns_b.len());
    assert_ne!(spawns_a, spawns_b, "different seeds must diverge");
}

// ---- Snapshot surface ----

#[test]
fn test_playable_rect_from_config() {
    let engine = SceneEngine::new(SceneConfig {
        scene_width: 400.0,
        scene_height: 800.0,
        device_width: 100.0,
        device_height: 200.0,
        ..Default::default()
    });
    let rect = engine.playable_rect();
    assert_eq!(rect.width, 400.0);
    assert_eq!(rect.y, 0.0);
}

#[test]
fn test_snapshot_asteroids_in_spawn_order() {
    let (mut engine, mut clock) = started_engine(42);
    // Spawn at 0s and 5s; hold before either completes is impossible
    // (durations < 3s), so just verify the ordering key is monotone
    // whenever multiple asteroids coexist within one snapshot.
    for _ in 0..(11 * 60) {
        let snap = engine.update(clock.next());
        for pair in snap.asteroids.windows(2) {
            assert!(pair[0].seq < pair[1].seq);
        }
    }
}
