//! Math utilities and types
//!
//! Provides the fundamental math types used across the runtime, plus the
//! planar angle toolbox the actor motion model is built on.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f32 = PI * 0.25;
}

/// Planar angle helpers for heading/bearing math.
///
/// Headings are yaw angles around the world Y axis. A heading of `0` faces
/// `+Z`, and a heading of `θ` faces `(sin θ, 0, cos θ)`, matching the walking
/// displacement math in the actor motion model.
pub mod angles {
    use super::{constants::TAU, Quat, Vec3};

    /// Full turn in scene-data angle units (legacy game data stores headings
    /// in 1/4096ths of a turn).
    pub const GAME_ANGLE_UNITS_PER_TURN: f32 = 4096.0;

    /// Scene-data distance units per world unit.
    pub const GAME_DISTANCE_UNITS: f32 = 512.0;

    /// Re-normalize an angle into `[-PI, PI]`. Angles landing on the branch
    /// cut come back as `PI` or `-PI` depending on rounding of `sin`.
    pub fn normalize_angle(angle: f32) -> f32 {
        angle.sin().atan2(angle.cos())
    }

    /// Planar bearing from `from` to `to` around the world Y axis.
    pub fn angle_to(from: &Vec3, to: &Vec3) -> f32 {
        (to.x - from.x).atan2(to.z - from.z)
    }

    /// Planar (XZ) distance between two points. Vertical separation is
    /// ignored; the motion model reasons about ground travel only.
    pub fn distance_2d(a: &Vec3, b: &Vec3) -> f32 {
        let dx = b.x - a.x;
        let dz = b.z - a.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Convert a scene-data angle (0..4096 = full turn) to radians.
    pub fn game_angle_to_rad(angle: f32) -> f32 {
        angle * TAU / GAME_ANGLE_UNITS_PER_TURN
    }

    /// Convert a world-space distance to scene-data distance units.
    pub fn to_game_distance(distance: f32) -> f32 {
        distance * GAME_DISTANCE_UNITS
    }

    /// Yaw-only orientation quaternion (rotation about world Y, no roll or
    /// pitch).
    pub fn yaw_quaternion(angle: f32) -> Quat {
        Quat::from_axis_angle(&Vec3::y_axis(), angle)
    }
}

#[cfg(test)]
mod tests {
    use super::angles::*;
    use super::constants::PI;
    use super::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_angle_stays_in_range() {
        assert_relative_eq!(normalize_angle(0.0), 0.0, epsilon = 1e-6);
        // Odd multiples of pi sit on the branch cut; the sign depends on f32
        // rounding of sin, only the magnitude is pinned.
        assert_relative_eq!(normalize_angle(3.0 * PI).abs(), PI, epsilon = 1e-5);
        assert_relative_eq!(normalize_angle(-3.0 * PI).abs(), PI, epsilon = 1e-5);
        assert_relative_eq!(normalize_angle(PI / 2.0 + 2.0 * PI), PI / 2.0, epsilon = 1e-5);
        for k in -8..=8 {
            let angle = 0.7 + k as f32 * 2.0 * PI;
            assert_relative_eq!(normalize_angle(angle), 0.7, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_bearing_axes() {
        let origin = Vec3::zeros();
        // +Z is heading zero
        assert_relative_eq!(angle_to(&origin, &Vec3::new(0.0, 0.0, 1.0)), 0.0, epsilon = 1e-6);
        // +X is a quarter turn
        assert_relative_eq!(
            angle_to(&origin, &Vec3::new(1.0, 0.0, 0.0)),
            PI / 2.0,
            epsilon = 1e-6
        );
        // -X is a negative quarter turn
        assert_relative_eq!(
            angle_to(&origin, &Vec3::new(-1.0, 0.0, 0.0)),
            -PI / 2.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_distance_2d_ignores_height() {
        let a = Vec3::new(0.0, 10.0, 0.0);
        let b = Vec3::new(3.0, -2.0, 4.0);
        assert_relative_eq!(distance_2d(&a, &b), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_game_angle_conversion() {
        assert_relative_eq!(game_angle_to_rad(0.0), 0.0);
        assert_relative_eq!(game_angle_to_rad(2048.0), PI, epsilon = 1e-5);
        assert_relative_eq!(game_angle_to_rad(1024.0), PI / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_yaw_quaternion_rotates_forward_vector() {
        let q = yaw_quaternion(PI / 2.0);
        let forward = Vec3::new(0.0, 0.0, 1.0);
        let rotated = q * forward;
        // Quarter turn about Y carries +Z onto +X
        assert_relative_eq!(rotated, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }
}
