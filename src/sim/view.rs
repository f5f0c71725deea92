//! View rotation: the camera sway that shooting steers
//!
//! The whole world is hit-tested and drawn through one global rotation.
//! Each shot's recoil feeds the rotation speed; the rotation integrates
//! that speed and bounces off a hard bound instead of pinning there.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::rotate;

/// Camera rotation state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Current view rotation (radians)
    pub rotation: f32,
    /// Rotation speed (radians/ms)
    pub speed: f32,
}

impl ViewState {
    /// Apply shot recoil: the horizontal component of the firing direction
    /// kicks the rotation speed the opposite way.
    pub fn steer(&mut self, dir_x: f32, dt: f32) {
        self.speed -= dir_x * STEER_IMPULSE * dt;
    }

    /// Integrate one tick: advance the rotation, cap the speed, then bounce
    /// off the rotation bound with a reflected, band-limited speed.
    pub fn integrate(&mut self, dt: f32) {
        self.rotation += self.speed * dt;

        if self.speed.abs() > MAX_VIEW_ROTATE_SPEED {
            self.speed = self.speed.signum() * MAX_VIEW_ROTATE_SPEED;
        }

        if self.rotation.abs() > MAX_VIEW_ROTATION {
            self.rotation = self.rotation.signum() * MAX_VIEW_ROTATION;

            // Speed is never zero here: the rotation only passes the bound
            // while it is moving, and the clamp above keeps the sign.
            self.speed = -self.speed.signum()
                * self.speed.abs().clamp(
                    MAX_VIEW_ROTATE_SPEED * BOUNCE_MIN_FRAC,
                    MAX_VIEW_ROTATE_SPEED * BOUNCE_MAX_FRAC,
                );
        }
    }
}

/// Map a world position plus a local offset into view space: the offset is
/// rotated by `angle`, translated to `origin`, and the sum is rotated again
/// about the viewport origin. Entities therefore swing around the top-left
/// corner rather than spinning in place. Collision and rendering both go
/// through this transform, so hits land where things are drawn.
#[inline]
pub fn view_point(origin: Vec2, offset: Vec2, angle: f32) -> Vec2 {
    rotate(origin + rotate(offset, angle), angle)
}

/// View-space position of an entity center
#[inline]
pub fn view_pos(pos: Vec2, angle: f32) -> Vec2 {
    view_point(pos, Vec2::ZERO, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotate_quarter_turn() {
        let p = rotate(Vec2::X, FRAC_PI_2);
        assert!((p.x - 0.0).abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_pos_matches_plain_rotation() {
        // With no local offset the compound transform collapses to a single
        // rotation of the world position.
        let p = Vec2::new(120.0, -35.0);
        let a = 0.21;
        let expected = rotate(p, a);
        let got = view_pos(p, a);
        assert!((got - expected).length() < 1e-4);
    }

    #[test]
    fn test_view_point_rotates_translated_point_again() {
        // offset (0, 5) rotated by 90° becomes (-5, 0); translated to
        // (10, 0) that is (5, 0); the second rotation carries it to (0, 5).
        let got = view_point(Vec2::new(10.0, 0.0), Vec2::new(0.0, 5.0), FRAC_PI_2);
        assert!((got.x - 0.0).abs() < 1e-4);
        assert!((got.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_steer_direction() {
        let mut view = ViewState::default();
        view.steer(1.0, 20.0);
        assert!(view.speed < 0.0, "shooting right must swing negative");

        let mut view = ViewState::default();
        view.steer(-1.0, 20.0);
        assert!(view.speed > 0.0, "shooting left must swing positive");
    }

    #[test]
    fn test_integrate_caps_speed() {
        let mut view = ViewState {
            rotation: 0.0,
            speed: 10.0 * MAX_VIEW_ROTATE_SPEED,
        };
        view.integrate(20.0);
        assert!(view.speed.abs() <= MAX_VIEW_ROTATE_SPEED + 1e-9);
    }

    #[test]
    fn test_integrate_bounces_at_bound() {
        let mut view = ViewState {
            rotation: MAX_VIEW_ROTATION - 1e-4,
            speed: MAX_VIEW_ROTATE_SPEED,
        };
        view.integrate(20.0);

        assert!((view.rotation - MAX_VIEW_ROTATION).abs() < 1e-6);
        assert!(view.speed < 0.0, "speed must reflect off the bound");
        let mag = view.speed.abs();
        assert!(mag >= MAX_VIEW_ROTATE_SPEED * BOUNCE_MIN_FRAC - 1e-9);
        assert!(mag <= MAX_VIEW_ROTATE_SPEED * BOUNCE_MAX_FRAC + 1e-9);
    }

    #[test]
    fn test_bounce_floors_tiny_speeds() {
        // A slow crawl over the bound still rebounds at the minimum band.
        let mut view = ViewState {
            rotation: -MAX_VIEW_ROTATION,
            speed: -1e-9,
        };
        view.integrate(20.0);
        assert!(view.speed >= MAX_VIEW_ROTATE_SPEED * BOUNCE_MIN_FRAC - 1e-9);
    }

    #[test]
    fn test_resting_on_bound_does_not_retrigger() {
        let mut view = ViewState {
            rotation: MAX_VIEW_ROTATION,
            speed: 0.0,
        };
        view.integrate(20.0);
        assert_eq!(view.rotation, MAX_VIEW_ROTATION);
        assert_eq!(view.speed, 0.0);
    }

    proptest! {
        #[test]
        fn prop_rotation_and_speed_stay_bounded(
            steps in prop::collection::vec((-1.0f32..1.0, 0.0f32..50.0), 1..200),
        ) {
            let mut view = ViewState::default();
            for (dir_x, dt) in steps {
                view.steer(dir_x, dt);
                view.integrate(dt);
                prop_assert!(view.rotation.abs() <= MAX_VIEW_ROTATION);
                prop_assert!(view.speed.abs() <= MAX_VIEW_ROTATE_SPEED);
            }
        }

        #[test]
        fn prop_view_point_keeps_offsets_rigid(
            px in -2000.0f32..2000.0,
            py in -2000.0f32..2000.0,
            ox in -50.0f32..50.0,
            oy in -50.0f32..50.0,
            angle in -MAX_VIEW_ROTATION..MAX_VIEW_ROTATION,
        ) {
            // Rotation is rigid, so an offset keeps its length no matter
            // where the view swings.
            let origin = Vec2::new(px, py);
            let offset = Vec2::new(ox, oy);
            let center = view_pos(origin, angle);
            let moved = view_point(origin, offset, angle);
            prop_assert!((moved.distance(center) - offset.length()).abs() < 1e-2);
        }
    }
}
