use nalgebra::Vector3;

use crate::constants::EARTH_ROTATION;

// ---------------------------------------------------------------------------
// Earth-rotation accelerations (rotating-frame utilities)
// ---------------------------------------------------------------------------
//
// The trajectory right-hand side keeps gravity and drag only; rotation
// enters the dynamics through the air-relative velocity `v - omega x r`.
// These standalone terms are provided for callers working in the rotating
// frame.

/// Earth angular velocity vector in ECEF (along +Z), rad/s.
pub fn earth_rotation_vector() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, EARTH_ROTATION)
}

/// Coriolis acceleration `-2 omega x v`.
pub fn coriolis_acceleration(v_ecef: &Vector3<f64>) -> Vector3<f64> {
    -2.0 * earth_rotation_vector().cross(v_ecef)
}

/// Centrifugal acceleration `-omega x (omega x r)`.
pub fn centrifugal_acceleration(r_ecef: &Vector3<f64>) -> Vector3<f64> {
    let omega = earth_rotation_vector();
    -omega.cross(&omega.cross(r_ecef))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_RADIUS;
    use approx::assert_relative_eq;

    #[test]
    fn coriolis_perpendicular_to_velocity() {
        let v = Vector3::new(1_000.0, 2_000.0, -500.0);
        let a = coriolis_acceleration(&v);
        assert_relative_eq!(a.dot(&v), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn coriolis_magnitude_eastward_at_equator() {
        let v = Vector3::new(0.0, 1_000.0, 0.0);
        let a = coriolis_acceleration(&v);
        assert_relative_eq!(a.norm(), 2.0 * EARTH_ROTATION * 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn centrifugal_points_outward_at_equator() {
        let r = Vector3::new(EARTH_RADIUS, 0.0, 0.0);
        let a = centrifugal_acceleration(&r);
        assert!(a.x > 0.0);
        assert_relative_eq!(a.norm(), EARTH_ROTATION * EARTH_ROTATION * EARTH_RADIUS, epsilon = 1e-9);
    }

    #[test]
    fn centrifugal_vanishes_on_rotation_axis() {
        let r = Vector3::new(0.0, 0.0, EARTH_RADIUS);
        let a = centrifugal_acceleration(&r);
        assert_relative_eq!(a.norm(), 0.0, epsilon = 1e-9);
    }
}
