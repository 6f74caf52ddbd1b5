//! Frame ordering via `SystemSet` phases.
//!
//! One chained contract in the `Update` schedule:
//!
//! ```text
//! Input  →  Simulation  →  Camera
//! ```
//!
//! * **Input** – the rendering boundary writes the frame's
//!   `InputSnapshot`. Nothing else runs here, which is what makes the
//!   snapshot a per-frame value rather than shared mutable state.
//! * **Simulation** – avatar integration and traffic agents. Systems in
//!   this set read the snapshot and own their component state exclusively,
//!   so they need no ordering among themselves.
//! * **Camera** – derives `CameraState` from the avatar position written
//!   this frame. Renderer systems that consume `CameraState` order
//!   themselves `.after()` this set.

use bevy::prelude::*;

/// Ordered phases for systems running in the `Update` schedule.
///
/// Configured as a chain: `Input` → `Simulation` → `Camera`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Per-frame input snapshot capture.
    Input,
    /// Avatar and traffic state advancement.
    Simulation,
    /// Camera state derivation from the freshly moved avatar.
    Camera,
}
