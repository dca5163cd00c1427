//! End-to-end checks of the session through its public surface only.

use maze_core::{ChaChaSource, MazeSession, Phase, PointerSample, Viewport};

const VIEWPORT: Viewport = Viewport { width: 800.0, height: 600.0 };

fn session(seed: u64) -> MazeSession {
    MazeSession::new(VIEWPORT, Box::new(ChaChaSource::seeded(seed)))
}

fn pointer(x: f32, y: f32, active: bool) -> PointerSample {
    PointerSample { x, y, active }
}

/// A scripted drag that wanders around the playfield.
fn scripted_inputs() -> Vec<PointerSample> {
    let mut inputs = Vec::new();
    for step in 0_u32..240 {
        let t = step as f32;
        inputs.push(pointer(
            400.0 + (t * 0.11).sin() * 300.0,
            300.0 + (t * 0.07).cos() * 220.0,
            step % 40 < 30,
        ));
    }
    inputs
}

#[test]
fn equal_seeds_and_inputs_evolve_identically() {
    let mut first = session(77);
    let mut second = session(77);
    assert_eq!(first.snapshot_hash(), second.snapshot_hash());

    let start = pointer(400.0, 300.0, true);
    first.start(start);
    second.start(start);

    for input in scripted_inputs() {
        let first_cues = first.tick(input, 16.0);
        let second_cues = second.tick(input, 16.0);
        assert_eq!(first_cues, second_cues);
        assert_eq!(first.snapshot_hash(), second.snapshot_hash());
    }
}

#[test]
fn different_seeds_build_different_levels() {
    let first = session(1);
    let second = session(2);
    assert_ne!(first.snapshot_hash(), second.snapshot_hash());
}

#[test]
fn session_waits_idle_until_the_start_gesture() {
    let mut session = session(5);
    assert_eq!(session.phase(), Phase::Idle);

    for input in scripted_inputs() {
        session.tick(input, 16.0);
    }
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.depth(), 1);

    session.start(pointer(400.0, 300.0, true));
    assert_eq!(session.phase(), Phase::Active);
}

#[test]
fn restart_keeps_the_record_and_rebuilds_the_level() {
    let mut session = session(11);
    session.start(pointer(400.0, 300.0, true));
    session.set_best_depth(6);

    let before = session.snapshot_hash();
    session.restart();

    assert_eq!(session.depth(), 1);
    assert_eq!(session.best_depth(), 6);
    assert_ne!(session.snapshot_hash(), before, "a restart must carve a fresh maze");
}

#[test]
fn resize_rebuilds_for_the_new_viewport() {
    let mut session = session(13);
    session.start(pointer(400.0, 300.0, true));
    for input in scripted_inputs().into_iter().take(60) {
        session.tick(input, 16.0);
    }

    let before = session.snapshot_hash();
    session.resize(1400.0, 900.0);

    assert_eq!(session.depth(), 1, "resizing keeps the depth");
    assert_ne!(session.snapshot_hash(), before);
    let snapshot = session.snapshot();
    assert!(snapshot.trail.is_empty(), "the trail does not survive a rebuild");
}

#[test]
fn snapshot_exposes_the_fog_radii() {
    let session = session(17);
    let snapshot = session.snapshot();
    assert!(snapshot.goal_reveal_radius > snapshot.visibility_radius);
    assert!(snapshot.goal_radius > 0.0);
    assert!(snapshot.player_radius > 0.0);
}

#[test]
fn collisions_surface_as_cues_during_a_rough_drag() {
    // A wide fast zig-zag across a sealed-enough maze has to clip a wall
    // eventually.
    let mut session = session(23);
    session.start(pointer(400.0, 300.0, true));

    let mut collisions = 0;
    for step in 0_u32..600 {
        let x = if step % 2 == 0 { 60.0 } else { 740.0 };
        let cues = session.tick(pointer(x, 300.0, true), 16.0);
        collisions += cues.iter().filter(|cue| **cue == maze_core::CueEvent::Collision).count();
    }
    assert!(collisions > 0);
}
