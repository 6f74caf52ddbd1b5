//! Per-frame input snapshot.
//!
//! The simulation never touches raw device state. The rendering crate's
//! polling system writes one `InputSnapshot` per frame (in
//! `SimulationSet::Input`, before any simulation system runs); avatar and
//! camera systems read it as a plain value. Headless tests write the
//! snapshot directly.

use bevy::prelude::*;

/// Logical movement and scroll state for the current frame.
///
/// `wheel_delta` is the scroll accumulated since the previous frame, in
/// pixel scale with scroll-down positive. It is consumed by the camera rig
/// and re-written (not accumulated) every frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct InputSnapshot {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub wheel_delta: f32,
}

impl InputSnapshot {
    /// Raw movement direction: ±1 per axis, opposing keys cancel.
    /// Not normalized; callers that integrate motion normalize first.
    pub fn direction(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir.z -= 1.0;
        }
        if self.back {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_is_zero() {
        assert_eq!(InputSnapshot::default().direction(), Vec3::ZERO);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = InputSnapshot {
            forward: true,
            back: true,
            left: true,
            right: true,
            ..default()
        };
        assert_eq!(input.direction(), Vec3::ZERO);
    }

    #[test]
    fn test_single_key_axis() {
        let input = InputSnapshot {
            right: true,
            ..default()
        };
        assert_eq!(input.direction(), Vec3::new(1.0, 0.0, 0.0));

        let input = InputSnapshot {
            forward: true,
            ..default()
        };
        assert_eq!(input.direction(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_diagonal_is_unnormalized() {
        let input = InputSnapshot {
            forward: true,
            right: true,
            ..default()
        };
        assert_eq!(input.direction(), Vec3::new(1.0, 0.0, -1.0));
    }
}
