//! World bootstrap: generate the static layout and spawn the mobile
//! entities. Runs exactly once at startup; the layout is regenerated only
//! if a new world is explicitly requested, never per frame.

use bevy::prelude::*;

use crate::avatar::Avatar;
use crate::config::{AVATAR_SPAWN_HEIGHT, PEDESTRIAN_COUNT, VEHICLE_COUNT};
use crate::layout::{generate_layout, LayoutParams};
use crate::sim_rng::SimRng;
use crate::traffic::spawn_traffic;
use crate::Position;

pub fn init_world(mut commands: Commands, params: Res<LayoutParams>, mut rng: ResMut<SimRng>) {
    if params.extent <= 0 {
        warn!(
            "layout extent {} is non-positive; generating an empty street grid",
            params.extent
        );
    }
    if params.skyline_count == 0 {
        warn!("skyline count is 0; horizon ring will be empty");
    }

    let city = generate_layout(&params, &mut rng.0);
    info!(
        "world ready: {} street strips, {} buildings, {} lamps, {} skyline towers",
        city.streets.len(),
        city.buildings.len(),
        city.lamps.len(),
        city.skyline.len()
    );
    commands.insert_resource(city);

    commands.spawn((
        Avatar::default(),
        Position(Vec3::new(0.0, AVATAR_SPAWN_HEIGHT, 0.0)),
    ));

    spawn_traffic(&mut commands, &mut rng.0, VEHICLE_COUNT, PEDESTRIAN_COUNT);
}

pub struct WorldInitPlugin;

impl Plugin for WorldInitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayoutParams>()
            .add_systems(Startup, init_world);
    }
}
