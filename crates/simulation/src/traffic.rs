//! Roaming traffic agents.
//!
//! A fixed pool of taxis (travelling along X) and pedestrians (along Z),
//! spawned once at world start and never despawned. Each agent keeps the
//! signed speed it was born with; motion is cyclic via a hard wraparound
//! at the domain bounds.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    AGENT_CROSS_BAND, AGENT_DOMAIN_MAX, AGENT_DOMAIN_MIN, PEDESTRIAN_RIDE_HEIGHT,
    PEDESTRIAN_SPEED_MAX, PEDESTRIAN_SPEED_MIN, VEHICLE_RIDE_HEIGHT, VEHICLE_SPEED_MAX,
    VEHICLE_SPEED_MIN,
};
use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Taxi,
    Pedestrian,
}

impl AgentKind {
    /// Taxis follow the road grid's X direction, pedestrians cross it on Z.
    pub fn travel_axis(self) -> TravelAxis {
        match self {
            AgentKind::Taxi => TravelAxis::X,
            AgentKind::Pedestrian => TravelAxis::Z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelAxis {
    X,
    Z,
}

/// A roaming agent. `speed` is signed and fixed for the agent's lifetime.
#[derive(Component, Debug, Clone)]
pub struct TrafficAgent {
    pub kind: AgentKind,
    pub axis: TravelAxis,
    pub speed: f32,
}

/// Reset a coordinate that left the domain to the opposite bound.
///
/// This is a teleport, not a modulo: an overshoot of any size lands
/// exactly on the bound, which keeps agent spacing stable regardless of
/// frame length.
pub fn wrap_coordinate(value: f32) -> f32 {
    if value > AGENT_DOMAIN_MAX {
        AGENT_DOMAIN_MIN
    } else if value < AGENT_DOMAIN_MIN {
        AGENT_DOMAIN_MAX
    } else {
        value
    }
}

/// Spawn the fixed agent pool. Free-axis position is uniform over the
/// domain, cross-axis position uniform over the spawn band, travel
/// direction a coin flip.
pub fn spawn_traffic(
    commands: &mut Commands,
    rng: &mut impl Rng,
    taxi_count: usize,
    pedestrian_count: usize,
) {
    for _ in 0..taxi_count {
        let speed = rng.gen_range(VEHICLE_SPEED_MIN..VEHICLE_SPEED_MAX);
        spawn_agent(commands, rng, AgentKind::Taxi, speed, VEHICLE_RIDE_HEIGHT);
    }
    for _ in 0..pedestrian_count {
        let speed = rng.gen_range(PEDESTRIAN_SPEED_MIN..PEDESTRIAN_SPEED_MAX);
        spawn_agent(
            commands,
            rng,
            AgentKind::Pedestrian,
            speed,
            PEDESTRIAN_RIDE_HEIGHT,
        );
    }
}

fn spawn_agent(
    commands: &mut Commands,
    rng: &mut impl Rng,
    kind: AgentKind,
    speed_magnitude: f32,
    height: f32,
) {
    let axis = kind.travel_axis();
    let speed = if rng.gen_bool(0.5) {
        speed_magnitude
    } else {
        -speed_magnitude
    };
    let along = rng.gen_range(AGENT_DOMAIN_MIN..AGENT_DOMAIN_MAX);
    let across = rng.gen_range(-AGENT_CROSS_BAND..AGENT_CROSS_BAND);

    let position = match axis {
        TravelAxis::X => Vec3::new(along, height, across),
        TravelAxis::Z => Vec3::new(across, height, along),
    };

    commands.spawn((TrafficAgent { kind, axis, speed }, Position(position)));
}

/// System: advance every agent along its travel axis and wrap at the
/// domain bounds. Independent of input; only elapsed time drives it.
pub fn advance_agents(time: Res<Time>, mut agents: Query<(&TrafficAgent, &mut Position)>) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (agent, mut position) in &mut agents {
        match agent.axis {
            TravelAxis::X => position.0.x = wrap_coordinate(position.0.x + agent.speed * dt),
            TravelAxis::Z => position.0.z = wrap_coordinate(position.0.z + agent.speed * dt),
        }
    }
}

pub struct TrafficPlugin;

impl Plugin for TrafficPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            advance_agents.in_set(crate::simulation_sets::SimulationSet::Simulation),
        );
    }
}
