//! Applies the simulation's derived `CameraState` to the actual 3D camera.

use bevy::prelude::*;

use simulation::camera_rig::CameraState;

pub fn setup_camera(mut commands: Commands, state: Res<CameraState>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(state.position).looking_at(state.target, Vec3::Y),
    ));
}

/// System: copy `CameraState` into the camera transform each frame.
/// Ordered after `SimulationSet::Camera` so it sees this frame's pose.
pub fn apply_camera_state(
    state: Res<CameraState>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !state.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(state.position).looking_at(state.target, Vec3::Y);
}
