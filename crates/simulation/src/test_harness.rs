//! # TestWorld — headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` (MinimalPlugins, no window
//! or renderer) behind builder constructors and query helpers, with
//! manually driven time so scenarios can assert exact `speed * dt`
//! displacements.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::avatar::Avatar;
use crate::camera_rig::{CameraMode, CameraRig, CameraState};
use crate::input::InputSnapshot;
use crate::layout::{CityLayout, LayoutParams};
use crate::sim_rng::SimRng;
use crate::traffic::{AgentKind, TrafficAgent};
use crate::Position;
use crate::SimulationPlugin;

/// Frame length used by [`TestWorld::tick`]: a steady 60 FPS.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// A headless Bevy App wrapping `SimulationPlugin` for integration
/// testing.
///
/// Time is advanced with `TimeUpdateStrategy::ManualDuration`, so the
/// delta a system observes is exactly the delta a test requested —
/// wall-clock jitter never leaks into assertions.
pub struct TestWorld {
    app: App,
}

impl TestWorld {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Default world: default layout params, default RNG seed.
    pub fn new() -> Self {
        Self::build(None, None)
    }

    /// World generated from an explicit RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(Some(seed), None)
    }

    /// World generated from explicit layout parameters.
    pub fn with_params(params: LayoutParams) -> Self {
        Self::build(None, Some(params))
    }

    fn build(seed: Option<u64>, params: Option<LayoutParams>) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Overrides must land before SimulationPlugin: its init_resource
        // calls keep whatever is already present.
        if let Some(seed) = seed {
            app.insert_resource(SimRng::from_seed_u64(seed));
        }
        if let Some(params) = params {
            app.insert_resource(params);
        }
        app.add_plugins(SimulationPlugin);

        // Lift the virtual-time clamp so long test frames (dt = 1.0s)
        // arrive unshortened.
        app.world_mut()
            .resource_mut::<Time<Virtual>>()
            .set_max_delta(Duration::from_secs(3600));

        // Run Startup systems. The first update has a zero delta, so
        // nothing moves yet.
        app.update();

        Self { app }
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Advance one frame whose observed delta is exactly `dt` seconds.
    pub fn tick_dt(&mut self, dt: f32) {
        self.app
            .world_mut()
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
                dt,
            )));
        self.app.update();
    }

    /// Advance `frames` frames at [`DEFAULT_DT`].
    pub fn tick(&mut self, frames: u32) {
        for _ in 0..frames {
            self.tick_dt(DEFAULT_DT);
        }
    }

    /// Replace the frame input. The snapshot persists until replaced, so
    /// a held key is simply a snapshot left in place across ticks.
    pub fn set_input(&mut self, input: InputSnapshot) {
        self.app.world_mut().insert_resource(input);
    }

    pub fn clear_input(&mut self) {
        self.set_input(InputSnapshot::default());
    }

    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        self.app.world_mut().resource_mut::<CameraRig>().mode = mode;
    }

    /// Spawn an extra agent at an exact position (wraparound scenarios).
    pub fn spawn_agent(&mut self, kind: AgentKind, speed: f32, position: Vec3) {
        self.app.world_mut().spawn((
            TrafficAgent {
                kind,
                axis: kind.travel_axis(),
                speed,
            },
            Position(position),
        ));
    }

    // -----------------------------------------------------------------------
    // Queries (note: Bevy's World::query() requires &mut World)
    // -----------------------------------------------------------------------

    pub fn avatar_position(&mut self) -> Vec3 {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Position, With<Avatar>>();
        query.single(world).0
    }

    pub fn avatar_heading(&mut self) -> Vec3 {
        let world = self.app.world_mut();
        let mut query = world.query::<&Avatar>();
        query.single(world).heading
    }

    /// Snapshot of every agent: (kind, signed speed, position).
    pub fn agents(&mut self) -> Vec<(AgentKind, f32, Vec3)> {
        let world = self.app.world_mut();
        let mut query = world.query::<(&TrafficAgent, &Position)>();
        query
            .iter(world)
            .map(|(agent, position)| (agent.kind, agent.speed, position.0))
            .collect()
    }

    pub fn layout(&self) -> &CityLayout {
        self.app.world().resource::<CityLayout>()
    }

    pub fn camera(&self) -> &CameraState {
        self.app.world().resource::<CameraState>()
    }

    pub fn rig(&self) -> &CameraRig {
        self.app.world().resource::<CameraRig>()
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}
