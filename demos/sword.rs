//! Sword-Swing Timeline Demo
//!
//! Animates a sword's swing — three keyframed timelines over
//! `{ rotation: { x, z } }` plus a 500 ms fire-color toggle — with a
//! fixed-step frame loop on the console standing in for a render loop.
//!
//! Demonstrates:
//! - playing a timeline to completion and the completion signal
//! - pause / resume from the frozen timestamp
//! - reverse back to timestamp 0
//! - several timelines driven concurrently through a `TimelineMixer`
//! - the host-side "complete, hold briefly, snap back to 0" choreography
//!
//! Run with `RUST_LOG=debug` for playback state traces.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use cadence::{
    Easing, Keyframe, Playback, SystemClock, Timeline, TimelineMixer, TrackNode, ValueNode,
};

/// ~120 fps, matching the pacing the engine is tuned for.
const FRAME: Duration = Duration::from_millis(8);

/// How long the finished pose is held before snapping back to rest.
const RESET_DELAY: Duration = Duration::from_millis(400);

fn sword_variables() -> ValueNode {
    ValueNode::branch([(
        "rotation",
        ValueNode::branch([
            ("x", ValueNode::leaf(15.0_f32.to_radians())),
            ("z", ValueNode::leaf(0.0)),
        ]),
    )])
}

fn swing_1() -> TrackNode {
    TrackNode::branch([(
        "rotation",
        TrackNode::branch([
            (
                "x",
                TrackNode::track([Keyframe::new(
                    2000.0,
                    1815.0_f32.to_radians(),
                    Easing::OutSine,
                )]),
            ),
            (
                "z",
                TrackNode::track([
                    Keyframe::new(283.0, 40.0_f32.to_radians(), Easing::OutQuad),
                    Keyframe::new(283.0, (-60.0_f32).to_radians(), Easing::InOutQuad),
                    Keyframe::new(283.0, 50.0_f32.to_radians(), Easing::InOutQuad),
                    Keyframe::new(283.0, (-40.0_f32).to_radians(), Easing::InOutQuad),
                    Keyframe::new(283.0, 40.0_f32.to_radians(), Easing::InOutQuad),
                    Keyframe::new(283.0, 0.0, Easing::InOutQuad),
                ]),
            ),
        ]),
    )])
}

fn swing_2() -> TrackNode {
    TrackNode::branch([(
        "rotation",
        TrackNode::branch([
            (
                "x",
                TrackNode::track([Keyframe::new(
                    2000.0,
                    1815.0_f32.to_radians(),
                    Easing::OutSine,
                )]),
            ),
            (
                "z",
                TrackNode::track([
                    Keyframe::new(333.0, (-80.0_f32).to_radians(), Easing::OutQuad),
                    Keyframe::new(333.0, (-70.0_f32).to_radians(), Easing::InOutQuad),
                    Keyframe::new(333.0, (-100.0_f32).to_radians(), Easing::InOutQuad),
                    Keyframe::new(1000.0, 0.0, Easing::InOutQuad),
                ]),
            ),
        ]),
    )])
}

fn swing_3() -> TrackNode {
    TrackNode::branch([(
        "rotation",
        TrackNode::branch([
            (
                "x",
                TrackNode::track([
                    Keyframe::new(333.0, (-70.0_f32).to_radians(), Easing::OutCubic),
                    Keyframe::new(1667.0, 1815.0_f32.to_radians(), Easing::InOutSine),
                ]),
            ),
            (
                "z",
                TrackNode::track([
                    Keyframe::new(167.0, 0.0, Easing::Linear),
                    Keyframe::new(383.0, 150.0_f32.to_radians(), Easing::OutQuad),
                    Keyframe::new(350.0, 85.0_f32.to_radians(), Easing::InOutQuad),
                    Keyframe::new(233.0, 30.0_f32.to_radians(), Easing::InOutQuad),
                    Keyframe::new(250.0, (-60.0_f32).to_radians(), Easing::InOutQuad),
                    Keyframe::new(617.0, 0.0, Easing::InOutQuad),
                ]),
            ),
        ]),
    )])
}

/// The fire's primary flame color at rest (orange).
fn fire_variables() -> ValueNode {
    ValueNode::branch([(
        "color",
        ValueNode::branch([
            ("r", ValueNode::leaf(1.0)),
            ("g", ValueNode::leaf(0.24)),
            ("b", ValueNode::leaf(0.0)),
        ]),
    )])
}

/// 500 ms toggle to the alternate (blue) flame, on a CSS-"ease" Bézier.
fn color_toggle() -> TrackNode {
    let ease = Easing::bezier((0.25, 0.1), (0.25, 1.0));
    TrackNode::branch([(
        "color",
        TrackNode::branch([
            ("r", TrackNode::track([Keyframe::new(500.0, 0.0, ease.clone())])),
            ("g", TrackNode::track([Keyframe::new(500.0, 0.47, ease.clone())])),
            ("b", TrackNode::track([Keyframe::new(500.0, 1.0, ease)])),
        ]),
    )])
}

fn print_pose(timeline: &Timeline) {
    let x = timeline.value("rotation.x").unwrap_or(0.0).to_degrees();
    let z = timeline.value("rotation.z").unwrap_or(0.0).to_degrees();
    println!(
        "  t={:7.1}ms  rotation.x={x:8.2}°  rotation.z={z:7.2}°",
        timeline.timestamp()
    );
}

/// Runs the active driver to completion, printing the pose periodically.
fn run_to_completion(timeline: &mut Timeline) {
    let mut frame = 0_u32;
    loop {
        match timeline.tick() {
            Playback::Running => {
                if frame % 30 == 0 {
                    print_pose(timeline);
                }
                frame += 1;
                thread::sleep(FRAME);
            }
            Playback::Completed | Playback::Idle => break,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Sword-Swing Timeline Demo ===");

    // ---- Animation 1: play straight through ----
    println!("\nAnimation 1 (2000 ms swing):");
    let mut swing = Timeline::new(&sword_variables(), &swing_1(), SystemClock::new())?;
    swing.set_on_complete(|| println!("  swing 1 complete"));
    swing.play();
    run_to_completion(&mut swing);
    print_pose(&swing);

    // Hold the final pose briefly, then snap back to rest so the next
    // swing starts clean.
    thread::sleep(RESET_DELAY);
    swing.seek(0.0);
    println!("  reset to rest pose");
    print_pose(&swing);

    // ---- Animation 2: pause mid-flight, then resume ----
    println!("\nAnimation 2 (pause at ~600 ms, resume):");
    let mut swing = Timeline::new(&sword_variables(), &swing_2(), SystemClock::new())?;
    swing.play();
    while swing.timestamp() < 600.0 {
        swing.tick();
        thread::sleep(FRAME);
    }
    swing.pause();
    println!("  paused:");
    print_pose(&swing);
    thread::sleep(Duration::from_millis(250));
    swing.play(); // resumes from the paused timestamp, not from 0
    run_to_completion(&mut swing);
    print_pose(&swing);

    // ---- Reverse the finished swing back to the start ----
    println!("\nReversing animation 2 back to 0:");
    swing.set_on_complete(|| println!("  reverse reached 0"));
    swing.reverse();
    run_to_completion(&mut swing);
    print_pose(&swing);

    // ---- Animation 3 + fire color toggle, mixed concurrently ----
    println!("\nAnimation 3 + fire color toggle through the mixer:");
    let mut mixer = TimelineMixer::new();

    let mut swing = Timeline::new(&sword_variables(), &swing_3(), SystemClock::new())?;
    swing.set_on_complete(|| println!("  swing 3 complete"));
    let swing_key = mixer.add(swing);

    let mut fire = Timeline::new(&fire_variables(), &color_toggle(), SystemClock::new())?;
    fire.set_on_complete(|| println!("  fire color toggled"));
    let fire_key = mixer.add(fire);

    if let Some(swing) = mixer.get_mut(swing_key) {
        swing.play();
    }
    if let Some(fire) = mixer.get_mut(fire_key) {
        fire.play();
    }

    let mut frame = 0_u32;
    while mixer.update() {
        if frame % 30 == 0
            && let Some(swing) = mixer.get(swing_key)
        {
            print_pose(swing);
        }
        frame += 1;
        thread::sleep(FRAME);
    }

    if let Some(fire) = mixer.get(fire_key) {
        println!(
            "  final flame color: ({:.2}, {:.2}, {:.2})",
            fire.value("color.r").unwrap_or(0.0),
            fire.value("color.g").unwrap_or(0.0),
            fire.value("color.b").unwrap_or(0.0),
        );
    }

    println!("\nDone.");
    Ok(())
}
