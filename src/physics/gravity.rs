use nalgebra::Vector3;

use crate::constants::EARTH_MU;
use crate::error::SimError;

/// Inverse-square gravitational acceleration in ECEF,
/// `g = -mu * r / |r|^3`.
pub fn gravity_acceleration(r_ecef: &Vector3<f64>) -> Result<Vector3<f64>, SimError> {
    let r = r_ecef.norm();
    if r == 0.0 {
        return Err(SimError::DegenerateVector);
    }
    Ok(-EARTH_MU / (r * r * r) * r_ecef)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_RADIUS;
    use approx::assert_relative_eq;

    #[test]
    fn surface_gravity_magnitude() {
        let r = Vector3::new(EARTH_RADIUS, 0.0, 0.0);
        let g = gravity_acceleration(&r).unwrap();
        // mu / R^2 ~ 9.82 m/s^2 on the spherical model
        assert_relative_eq!(g.norm(), EARTH_MU / (EARTH_RADIUS * EARTH_RADIUS), epsilon = 1e-9);
        assert!(g.x < 0.0, "gravity points back toward the center");
    }

    #[test]
    fn gravity_decreases_with_radius() {
        let g1 = gravity_acceleration(&Vector3::new(EARTH_RADIUS, 0.0, 0.0)).unwrap();
        let g2 = gravity_acceleration(&Vector3::new(2.0 * EARTH_RADIUS, 0.0, 0.0)).unwrap();
        assert_relative_eq!(g2.norm(), g1.norm() / 4.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_position_rejected() {
        let err = gravity_acceleration(&Vector3::zeros()).unwrap_err();
        assert_eq!(err, SimError::DegenerateVector);
    }
}
