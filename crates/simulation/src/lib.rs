use bevy::prelude::*;

pub mod avatar;
pub mod camera_rig;
pub mod config;
pub mod input;
pub mod layout;
pub mod sim_rng;
pub mod simulation_sets;
pub mod traffic;
pub mod world_init;

#[cfg(test)]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

// ---------------------------------------------------------------------------
// Core components
// ---------------------------------------------------------------------------

/// World-space location of a mobile entity (avatar, traffic agents).
///
/// Simulation systems mutate `Position`; the rendering crate mirrors it
/// into `Transform`s. Nothing in this crate reads or writes transforms.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec3);

// ---------------------------------------------------------------------------
// Top-level plugin
// ---------------------------------------------------------------------------

/// The whole simulation core: seeded RNG, one-shot world generation,
/// avatar movement, camera tracking, and traffic agents, ordered through
/// the `Input → Simulation → Camera` chain.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<input::InputSnapshot>().configure_sets(
            Update,
            (
                SimulationSet::Input,
                SimulationSet::Simulation,
                SimulationSet::Camera,
            )
                .chain(),
        );

        app.add_plugins(sim_rng::SimRngPlugin);
        app.add_plugins(world_init::WorldInitPlugin);
        app.add_plugins(avatar::AvatarPlugin);
        app.add_plugins(traffic::TrafficPlugin);
        app.add_plugins(camera_rig::CameraRigPlugin);
    }
}
