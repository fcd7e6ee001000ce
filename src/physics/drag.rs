use nalgebra::Vector3;

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Aerodynamic drag
// ---------------------------------------------------------------------------

/// Drag acceleration opposing the air-relative velocity,
/// `a = -(Cd * A * rho * |v_rel|) / (2 m) * v_rel`.
pub fn drag_acceleration(
    v_rel: &Vector3<f64>,
    rho: f64,
    cd: f64,
    area_m2: f64,
    mass_kg: f64,
) -> Result<Vector3<f64>, SimError> {
    if mass_kg <= 0.0 {
        return Err(SimError::invalid("mass_kg", mass_kg));
    }
    if rho < 0.0 {
        return Err(SimError::invalid("rho", rho));
    }
    if area_m2 < 0.0 {
        return Err(SimError::invalid("area_m2", area_m2));
    }

    let v_mag = v_rel.norm();
    if v_mag == 0.0 {
        return Ok(Vector3::zeros());
    }

    let factor = -(cd * area_m2 * rho * v_mag) / (2.0 * mass_kg);
    Ok(factor * v_rel)
}

/// Dynamic pressure `q = rho * v^2 / 2` in Pa.
pub fn dynamic_pressure(v_mag: f64, rho: f64) -> Result<f64, SimError> {
    if rho < 0.0 {
        return Err(SimError::invalid("rho", rho));
    }
    if v_mag < 0.0 {
        return Err(SimError::invalid("v_mag", v_mag));
    }
    Ok(rho * v_mag * v_mag / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn drag_opposes_relative_velocity() {
        let v_rel = Vector3::new(100.0, 0.0, 0.0);
        let a = drag_acceleration(&v_rel, 1.225, 1.0, 10.0, 1_000.0).unwrap();
        assert!(a.x < 0.0, "drag should oppose the relative velocity");
        assert_relative_eq!(a.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(a.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn drag_magnitude_quadratic_in_speed() {
        let a1 = drag_acceleration(&Vector3::new(100.0, 0.0, 0.0), 1.0, 1.0, 1.0, 1.0).unwrap();
        let a2 = drag_acceleration(&Vector3::new(200.0, 0.0, 0.0), 1.0, 1.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(a2.norm(), 4.0 * a1.norm(), epsilon = 1e-9);
    }

    #[test]
    fn no_drag_at_rest() {
        let a = drag_acceleration(&Vector3::zeros(), 1.225, 1.0, 10.0, 1_000.0).unwrap();
        assert_eq!(a, Vector3::zeros());
    }

    #[test]
    fn nonpositive_mass_rejected() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        assert!(drag_acceleration(&v, 1.0, 1.0, 1.0, 0.0).is_err());
        assert!(drag_acceleration(&v, 1.0, 1.0, 1.0, -5.0).is_err());
    }

    #[test]
    fn dynamic_pressure_value() {
        let q = dynamic_pressure(20_000.0, 0.01).unwrap();
        assert_relative_eq!(q, 2.0e6, epsilon = 1e-6);
    }

    #[test]
    fn dynamic_pressure_rejects_negative_inputs() {
        assert!(dynamic_pressure(-1.0, 1.0).is_err());
        assert!(dynamic_pressure(1.0, -1.0).is_err());
    }
}
