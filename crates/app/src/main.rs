use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::camera_rig::{CameraMode, CameraRig};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Neonwalk".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(CameraRig::with_mode(camera_mode_from_env()))
    .add_plugins((simulation::SimulationPlugin, rendering::RenderingPlugin));

    app.run();
}

/// Camera variant selection: NEONWALK_CAMERA=chase|orbit|first-person.
/// Unknown values fall back to the chase cam with a warning.
fn camera_mode_from_env() -> CameraMode {
    match std::env::var("NEONWALK_CAMERA").as_deref() {
        Ok("orbit") => CameraMode::ZoomableOrbit,
        Ok("first-person") => CameraMode::FirstPerson,
        Ok("chase") | Err(_) => CameraMode::Chase,
        Ok(other) => {
            eprintln!("unknown NEONWALK_CAMERA value '{other}', using chase cam");
            CameraMode::Chase
        }
    }
}
