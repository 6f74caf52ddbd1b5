//! Camera tracking.
//!
//! The rig derives `CameraState` (position + look target) from the avatar
//! every frame. Smoothed modes converge with frame-rate independent
//! exponential interpolation:
//!
//!   `position += (desired - position) * (1 - exp(-speed * dt))`
//!
//! so convergence speed does not depend on the frame rate. The zoom
//! accumulator belongs to the rig and is clamped to `[MIN_ZOOM, MAX_ZOOM]`
//! on every update, regardless of the active mode.

use bevy::prelude::*;

use crate::avatar::Avatar;
use crate::config::{
    CAMERA_SMOOTHING_SPEED, CHASE_DISTANCE, CHASE_HEIGHT, DEFAULT_ZOOM, FIRST_PERSON_EYE_OFFSET,
    MAX_ZOOM, MIN_ZOOM, ZOOM_WHEEL_FACTOR,
};
use crate::input::InputSnapshot;
use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Third-person: fixed offset behind and above the avatar, smoothed.
    #[default]
    Chase,
    /// Above-and-behind at a wheel-controlled distance, smoothed.
    ZoomableOrbit,
    /// Rigid attachment at eye height, looking along the avatar heading.
    FirstPerson,
}

/// Camera configuration plus the scroll accumulator.
#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    pub mode: CameraMode,
    /// Offset magnitude used by `ZoomableOrbit`, in `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            mode: CameraMode::default(),
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl CameraRig {
    pub fn with_mode(mode: CameraMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Fold one frame's wheel delta into the zoom accumulator.
    /// The clamp runs on every update, so no delta sequence can push the
    /// zoom outside its bounds.
    pub fn apply_scroll(&mut self, wheel_delta: f32) {
        self.zoom = (self.zoom + wheel_delta * ZOOM_WHEEL_FACTOR).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

/// Derived camera pose, consumed by the renderer. Recomputed every frame;
/// nothing else writes it.
#[derive(Resource, Debug, Clone)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraState {
    fn default() -> Self {
        // Matches the chase-cam desired pose for an avatar at the spawn
        // point, so the first frame starts converged instead of flying in.
        let spawn = Vec3::new(0.0, crate::config::AVATAR_SPAWN_HEIGHT, 0.0);
        Self {
            position: spawn + Vec3::new(0.0, CHASE_HEIGHT, CHASE_DISTANCE),
            target: spawn,
        }
    }
}

/// Where the smoothed modes want the camera this frame.
pub fn desired_position(rig: &CameraRig, avatar_position: Vec3) -> Vec3 {
    match rig.mode {
        CameraMode::Chase => avatar_position + Vec3::new(0.0, CHASE_HEIGHT, CHASE_DISTANCE),
        CameraMode::ZoomableOrbit => avatar_position + Vec3::new(0.0, rig.zoom, rig.zoom),
        CameraMode::FirstPerson => avatar_position + Vec3::new(0.0, FIRST_PERSON_EYE_OFFSET, 0.0),
    }
}

/// Exponential interpolation factor for a given speed and delta time.
#[inline]
pub fn exp_lerp_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

/// System: update the zoom accumulator and derive `CameraState` from the
/// avatar. Runs after avatar movement (`SimulationSet::Camera`).
pub fn track_avatar(
    input: Res<InputSnapshot>,
    time: Res<Time>,
    mut rig: ResMut<CameraRig>,
    mut camera: ResMut<CameraState>,
    avatars: Query<(&Avatar, &Position)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    if input.wheel_delta != 0.0 {
        rig.apply_scroll(input.wheel_delta);
    }

    let Ok((avatar, position)) = avatars.get_single() else {
        return;
    };
    let desired = desired_position(&rig, position.0);

    match rig.mode {
        CameraMode::FirstPerson => {
            camera.position = desired;
            camera.target = desired + avatar.heading;
        }
        CameraMode::Chase | CameraMode::ZoomableOrbit => {
            let factor = exp_lerp_factor(CAMERA_SMOOTHING_SPEED, dt);
            let delta = (desired - camera.position) * factor;
            camera.position += delta;
            camera.target = position.0;
        }
    }
}

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .init_resource::<CameraState>()
            .add_systems(
                Update,
                track_avatar.in_set(crate::simulation_sets::SimulationSet::Camera),
            );
    }
}
