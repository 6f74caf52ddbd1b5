//! Instantiates drawable primitives from the immutable `CityLayout`.
//!
//! Runs once at `PostStartup` (the layout resource is inserted during
//! `Startup`). All geometry is scaled out of shared unit meshes; only the
//! materials differ per element kind.

use bevy::prelude::*;

use simulation::config::GROUND_SIZE;
use simulation::layout::{CityLayout, FacadeStyle, StreetAxis, StreetKind, StreetSegment};

/// Marker for static world geometry entities.
#[derive(Component)]
pub struct CityGeometry;

/// Marker for street lamp entities (pole, head, and light source).
#[derive(Component)]
pub struct StreetLamp;

const STRIP_THICKNESS: f32 = 0.02;

const LAMP_POLE_HEIGHT: f32 = 2.6;
const LAMP_POLE_RADIUS: f32 = 0.06;
const LAMP_HEAD_RADIUS: f32 = 0.12;
/// Light source sits just under the lamp head.
const LAMP_LIGHT_HEIGHT: f32 = 2.4;

pub fn spawn_city(
    mut commands: Commands,
    layout: Res<CityLayout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let unit_cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0));

    // --- Ground plane ---
    let ground = meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE));
    commands.spawn((
        CityGeometry,
        Mesh3d(ground),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.13, 0.13, 0.14),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::IDENTITY,
    ));

    // --- Street strips ---
    let roadway_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.05, 0.05, 0.06),
        perceptual_roughness: 0.9,
        ..default()
    });
    let marking_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.8, 0.55),
        emissive: LinearRgba::from(Color::srgb(0.85, 0.8, 0.55)) * 0.15,
        ..default()
    });
    let sidewalk_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.32, 0.32, 0.35),
        perceptual_roughness: 0.85,
        ..default()
    });

    for segment in &layout.streets {
        let material = match segment.kind {
            StreetKind::Roadway => roadway_mat.clone(),
            StreetKind::LaneMarking => marking_mat.clone(),
            StreetKind::Sidewalk => sidewalk_mat.clone(),
        };
        commands.spawn((
            CityGeometry,
            Mesh3d(unit_cube.clone()),
            MeshMaterial3d(material),
            strip_transform(segment),
        ));
    }

    // --- Buildings ---
    let facade_mats: Vec<(FacadeStyle, Handle<StandardMaterial>)> = FacadeStyle::ALL
        .iter()
        .map(|&style| (style, materials.add(facade_material(style))))
        .collect();

    for building in &layout.buildings {
        let material = facade_mats
            .iter()
            .find(|(style, _)| *style == building.facade)
            .map(|(_, handle)| handle.clone())
            .unwrap_or_else(|| facade_mats[0].1.clone());

        commands.spawn((
            CityGeometry,
            Mesh3d(unit_cube.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(
                building.position + Vec3::new(0.0, building.height / 2.0, 0.0),
            )
            .with_scale(Vec3::new(
                building.footprint,
                building.height,
                building.footprint,
            )),
        ));
    }

    // --- Skyline ring ---
    let skyline_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.03, 0.03, 0.05),
        emissive: LinearRgba::from(Color::srgb(0.1, 0.15, 0.4)) * 0.2,
        ..default()
    });
    for tower in &layout.skyline {
        commands.spawn((
            CityGeometry,
            Mesh3d(unit_cube.clone()),
            MeshMaterial3d(skyline_mat.clone()),
            Transform::from_translation(tower.position + Vec3::new(0.0, tower.height / 2.0, 0.0))
                .with_scale(Vec3::new(tower.footprint, tower.height, tower.footprint)),
        ));
    }

    // --- Lamp posts: pole + head + point light at fixed offsets ---
    let pole_mesh = meshes.add(Cylinder::new(LAMP_POLE_RADIUS, LAMP_POLE_HEIGHT));
    let head_mesh = meshes.add(Sphere::new(LAMP_HEAD_RADIUS));
    let pole_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.1, 0.1, 0.12),
        metallic: 0.6,
        ..default()
    });
    let head_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.9, 0.7),
        emissive: LinearRgba::from(Color::srgb(1.0, 0.85, 0.6)) * 2.0,
        ..default()
    });

    for lamp in &layout.lamps {
        commands.spawn((
            CityGeometry,
            StreetLamp,
            Mesh3d(pole_mesh.clone()),
            MeshMaterial3d(pole_mat.clone()),
            Transform::from_translation(lamp.position + Vec3::Y * (LAMP_POLE_HEIGHT / 2.0)),
        ));
        commands.spawn((
            CityGeometry,
            StreetLamp,
            Mesh3d(head_mesh.clone()),
            MeshMaterial3d(head_mat.clone()),
            Transform::from_translation(lamp.position + Vec3::Y * LAMP_POLE_HEIGHT),
        ));
        commands.spawn((
            CityGeometry,
            StreetLamp,
            PointLight {
                color: Color::srgb(1.0, 0.85, 0.6),
                intensity: 50_000.0,
                range: 25.0,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(lamp.position + Vec3::Y * LAMP_LIGHT_HEIGHT),
        ));
    }
}

/// A street strip is a unit cube scaled to (length × thickness × width)
/// and rotated into place by swapping extents per axis.
fn strip_transform(segment: &StreetSegment) -> Transform {
    let scale = match segment.axis {
        StreetAxis::X => Vec3::new(segment.length, STRIP_THICKNESS, segment.width),
        StreetAxis::Z => Vec3::new(segment.width, STRIP_THICKNESS, segment.length),
    };
    Transform::from_translation(segment.position).with_scale(scale)
}

fn facade_material(style: FacadeStyle) -> StandardMaterial {
    let (base, glow, intensity) = match style {
        FacadeStyle::DarkGlass => (
            Color::srgb(0.02, 0.02, 0.04),
            Color::srgb(0.25, 0.3, 0.45),
            0.15,
        ),
        FacadeStyle::NeonBlue => (
            Color::srgb(0.07, 0.07, 0.07),
            Color::srgb(0.13, 0.27, 1.0),
            0.4,
        ),
        FacadeStyle::NeonMagenta => (
            Color::srgb(0.07, 0.07, 0.07),
            Color::srgb(1.0, 0.2, 0.8),
            0.4,
        ),
        FacadeStyle::NeonTeal => (
            Color::srgb(0.07, 0.07, 0.07),
            Color::srgb(0.1, 0.9, 0.8),
            0.4,
        ),
    };
    StandardMaterial {
        base_color: base,
        emissive: LinearRgba::from(glow) * intensity,
        perceptual_roughness: 0.6,
        ..default()
    }
}
