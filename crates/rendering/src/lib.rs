use bevy::prelude::*;

pub mod agent_render;
pub mod camera;
pub mod city_render;
pub mod input;

use simulation::SimulationSet;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_lighting, camera::setup_camera))
            .add_systems(PostStartup, city_render::spawn_city)
            .add_systems(Update, input::poll_input.in_set(SimulationSet::Input))
            .add_systems(
                Update,
                (
                    agent_render::attach_avatar_mesh,
                    agent_render::attach_agent_meshes,
                ),
            )
            .add_systems(
                Update,
                (agent_render::sync_transforms, camera::apply_camera_state)
                    .after(SimulationSet::Camera),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Dim, cool ambient for the night-city look.
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.7, 0.75, 1.0),
        brightness: 120.0,
    });

    // Moonlight: a weak directional light angled from above.
    commands.spawn((
        DirectionalLight {
            illuminance: 3_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}
