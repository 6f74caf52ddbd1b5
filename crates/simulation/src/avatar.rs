//! Player avatar movement.

use bevy::prelude::*;

use crate::config::AVATAR_SPEED;
use crate::input::InputSnapshot;
use crate::Position;

/// The single player-controlled entity.
///
/// `heading` is the unit direction of the last nonzero movement, kept for
/// the first-person camera. It never zeroes out; standing still preserves
/// the previous heading.
#[derive(Component, Debug, Clone)]
pub struct Avatar {
    pub heading: Vec3,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            heading: Vec3::NEG_Z,
        }
    }
}

/// Displacement for one frame of held keys.
///
/// Opposing keys cancel per axis. A zero direction returns `Vec3::ZERO`
/// instead of normalizing (no NaN frames); otherwise the direction is
/// normalized to unit length and scaled by `AVATAR_SPEED * dt`, so
/// diagonal movement is no faster than axis-aligned movement.
pub fn movement_delta(input: &InputSnapshot, dt: f32) -> Vec3 {
    let dir = input.direction();
    if dir == Vec3::ZERO {
        return Vec3::ZERO;
    }
    dir.normalize() * AVATAR_SPEED * dt
}

/// System: integrate avatar position from the frame's input snapshot.
pub fn move_avatar(
    input: Res<InputSnapshot>,
    time: Res<Time>,
    mut query: Query<(&mut Avatar, &mut Position)>,
) {
    let delta = movement_delta(&input, time.delta_secs());
    if delta == Vec3::ZERO {
        return;
    }

    let heading = delta.normalize();
    for (mut avatar, mut position) in &mut query {
        position.0 += delta;
        avatar.heading = heading;
    }
}

pub struct AvatarPlugin;

impl Plugin for AvatarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            move_avatar.in_set(crate::simulation_sets::SimulationSet::Simulation),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposing_keys_yield_zero_displacement() {
        let input = InputSnapshot {
            forward: true,
            back: true,
            ..default()
        };
        for dt in [0.0, 0.016, 1.0, 100.0] {
            assert_eq!(movement_delta(&input, dt), Vec3::ZERO);
        }
    }

    #[test]
    fn test_single_key_magnitude_is_speed_times_dt() {
        let input = InputSnapshot {
            forward: true,
            ..default()
        };
        let delta = movement_delta(&input, 0.1);
        assert_eq!(delta, Vec3::new(0.0, 0.0, -AVATAR_SPEED * 0.1));
    }

    #[test]
    fn test_right_key_moves_half_unit_in_tenth_second() {
        let input = InputSnapshot {
            right: true,
            ..default()
        };
        let delta = movement_delta(&input, 0.1);
        assert!((delta - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let input = InputSnapshot {
            forward: true,
            right: true,
            ..default()
        };
        let delta = movement_delta(&input, 0.2);
        assert!((delta.length() - AVATAR_SPEED * 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let input = InputSnapshot {
            forward: true,
            right: true,
            ..default()
        };
        assert_eq!(movement_delta(&input, 0.0), Vec3::ZERO);
    }
}
