//! The input boundary: the only writer of `InputSnapshot`.
//!
//! Runs in `SimulationSet::Input`, before any simulation system, so the
//! snapshot every system reads this frame is a single consistent value.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use simulation::input::InputSnapshot;

/// Pixels per wheel "line" when the platform reports line scrolls.
const LINE_SCROLL_PIXELS: f32 = 100.0;

/// System: capture held keys and drained wheel events into the frame's
/// snapshot. WASD plus arrow-key aliases; wheel deltas are normalized to
/// pixel scale with scroll-down positive (the convention the zoom
/// accumulator expects), hence the sign flip from winit's scroll-up
/// positive values.
pub fn poll_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut wheel_events: EventReader<MouseWheel>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    snapshot.forward = keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp);
    snapshot.back = keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown);
    snapshot.left = keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft);
    snapshot.right = keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight);

    let mut delta = 0.0;
    for event in wheel_events.read() {
        delta -= match event.unit {
            MouseScrollUnit::Line => event.y * LINE_SCROLL_PIXELS,
            MouseScrollUnit::Pixel => event.y,
        };
    }
    snapshot.wheel_delta = delta;
}
