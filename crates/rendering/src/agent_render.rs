//! Meshes for the mobile entities and the `Position` → `Transform` sync.

use bevy::prelude::*;

use simulation::avatar::Avatar;
use simulation::traffic::{AgentKind, TrafficAgent};
use simulation::Position;

const AVATAR_SIZE: f32 = 1.0;

const TAXI_LENGTH: f32 = 1.4;
const TAXI_HEIGHT: f32 = 0.5;
const TAXI_WIDTH: f32 = 0.7;

const PEDESTRIAN_RADIUS: f32 = 0.15;
const PEDESTRIAN_BODY_LENGTH: f32 = 0.5;

/// System: give the avatar its mesh once it exists.
pub fn attach_avatar_mesh(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    query: Query<(Entity, &Position), (With<Avatar>, Without<Mesh3d>)>,
) {
    for (entity, position) in &query {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Cuboid::new(AVATAR_SIZE, AVATAR_SIZE, AVATAR_SIZE))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(1.0, 0.41, 0.71),
                perceptual_roughness: 0.5,
                ..default()
            })),
            Transform::from_translation(position.0),
        ));
    }
}

/// System: give traffic agents their meshes. Taxis are long boxes aligned
/// with their X travel axis, pedestrians upright capsules.
pub fn attach_agent_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    query: Query<(Entity, &TrafficAgent, &Position), Without<Mesh3d>>,
) {
    if query.is_empty() {
        return;
    }

    let taxi_mesh = meshes.add(Cuboid::new(TAXI_LENGTH, TAXI_HEIGHT, TAXI_WIDTH));
    let taxi_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.95, 0.8, 0.1),
        perceptual_roughness: 0.4,
        ..default()
    });
    let pedestrian_mesh = meshes.add(Capsule3d::new(PEDESTRIAN_RADIUS, PEDESTRIAN_BODY_LENGTH));
    let pedestrian_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.75, 0.8, 0.9),
        perceptual_roughness: 0.8,
        ..default()
    });

    for (entity, agent, position) in &query {
        let (mesh, material) = match agent.kind {
            AgentKind::Taxi => (taxi_mesh.clone(), taxi_mat.clone()),
            AgentKind::Pedestrian => (pedestrian_mesh.clone(), pedestrian_mat.clone()),
        };
        commands.entity(entity).insert((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(position.0),
        ));
    }
}

/// System: mirror simulation positions into scene transforms. Runs after
/// the simulation set so the frame renders what was just computed.
pub fn sync_transforms(mut query: Query<(&Position, &mut Transform), Changed<Position>>) {
    for (position, mut transform) in &mut query {
        transform.translation = position.0;
    }
}
