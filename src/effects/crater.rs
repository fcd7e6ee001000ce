use crate::error::SimError;
use crate::output::Crater;

// ---------------------------------------------------------------------------
// Crater scaling (Collins, Melosh & Marcus 2005, gravity regime)
// ---------------------------------------------------------------------------

/// Empirical coefficient for the transient diameter.
const K_TRANSIENT: f64 = 1.16;

/// Final rim diameter over transient diameter.
const FINAL_OVER_TRANSIENT: f64 = 1.3;

/// Depth over final diameter.
const DEPTH_OVER_FINAL: f64 = 0.2;

/// Craters narrower than this multiple of the projectile diameter are
/// treated as not formed.
const MIN_CRATER_MULTIPLE: f64 = 4.0;

/// Crater dimensions from the gravity-regime scaling law,
/// `D_t = K * (rho_i/rho_t)^(1/3) * d^0.78 * v^0.44 * g^-0.22 * sin(theta)^(1/3)`.
///
/// `impact_angle_deg` is the angle between the impact velocity and the
/// inward surface normal; its sine must be positive.
pub fn calculate_crater(
    diameter_m: f64,
    impactor_density_kg_m3: f64,
    velocity_m_s: f64,
    impact_angle_deg: f64,
    target_density_kg_m3: f64,
    gravity_m_s2: f64,
) -> Result<Crater, SimError> {
    if diameter_m <= 0.0 {
        return Err(SimError::invalid("diameter_m", diameter_m));
    }
    if impactor_density_kg_m3 <= 0.0 {
        return Err(SimError::invalid("impactor_density_kg_m3", impactor_density_kg_m3));
    }
    if target_density_kg_m3 <= 0.0 {
        return Err(SimError::invalid("target_density_kg_m3", target_density_kg_m3));
    }
    if velocity_m_s <= 0.0 {
        return Err(SimError::invalid("velocity_m_s", velocity_m_s));
    }
    if gravity_m_s2 <= 0.0 {
        return Err(SimError::invalid("gravity_m_s2", gravity_m_s2));
    }

    let sin_theta = impact_angle_deg.to_radians().sin();
    if sin_theta <= 0.0 {
        return Err(SimError::invalid("impact_angle_deg", impact_angle_deg));
    }

    let transient = K_TRANSIENT
        * (impactor_density_kg_m3 / target_density_kg_m3).cbrt()
        * diameter_m.powf(0.78)
        * velocity_m_s.powf(0.44)
        * gravity_m_s2.powf(-0.22)
        * sin_theta.cbrt();

    let final_diameter = transient * FINAL_OVER_TRANSIENT;

    if final_diameter < MIN_CRATER_MULTIPLE * diameter_m {
        return Ok(Crater::NotFormed);
    }

    Ok(Crater::Formed {
        transient_diameter_m: transient,
        final_diameter_m: final_diameter,
        depth_m: final_diameter * DEPTH_OVER_FINAL,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{STANDARD_GRAVITY, TARGET_DENSITY_LAND};

    fn formed(c: Crater) -> (f64, f64, f64) {
        match c {
            Crater::Formed { transient_diameter_m, final_diameter_m, depth_m } => {
                (transient_diameter_m, final_diameter_m, depth_m)
            }
            Crater::NotFormed => panic!("expected a formed crater"),
        }
    }

    #[test]
    fn stony_impactor_forms_plausible_crater() {
        let c = calculate_crater(20.0, 3_300.0, 18_000.0, 70.0, TARGET_DENSITY_LAND,
            STANDARD_GRAVITY)
            .unwrap();
        let (transient, fin, depth) = formed(c);
        assert!(fin > transient);
        assert!(depth < fin);
        assert!(fin > 4.0 * 20.0);
        // Hundreds of meters for a 20 m stony body at this speed
        assert!(fin > 200.0 && fin < 2_000.0, "final = {fin}");
    }

    #[test]
    fn steeper_impacts_dig_larger_craters() {
        let shallow = formed(
            calculate_crater(20.0, 3_300.0, 18_000.0, 45.0, TARGET_DENSITY_LAND,
                STANDARD_GRAVITY)
                .unwrap(),
        );
        let steep = formed(
            calculate_crater(20.0, 3_300.0, 18_000.0, 90.0, TARGET_DENSITY_LAND,
                STANDARD_GRAVITY)
                .unwrap(),
        );
        assert!(steep.1 > shallow.1);
    }

    #[test]
    fn faster_and_bigger_impactors_scale_up() {
        let base = formed(
            calculate_crater(20.0, 3_300.0, 12_000.0, 60.0, TARGET_DENSITY_LAND,
                STANDARD_GRAVITY)
                .unwrap(),
        );
        let faster = formed(
            calculate_crater(20.0, 3_300.0, 24_000.0, 60.0, TARGET_DENSITY_LAND,
                STANDARD_GRAVITY)
                .unwrap(),
        );
        let bigger = formed(
            calculate_crater(40.0, 3_300.0, 12_000.0, 60.0, TARGET_DENSITY_LAND,
                STANDARD_GRAVITY)
                .unwrap(),
        );
        assert!(faster.1 > base.1);
        assert!(bigger.1 > base.1);
    }

    #[test]
    fn tiny_slow_impactor_leaves_no_crater() {
        // At walking pace the scaled crater stays under 4 projectile
        // diameters
        let c = calculate_crater(20.0, 3_300.0, 1.0, 90.0, TARGET_DENSITY_LAND,
            STANDARD_GRAVITY)
            .unwrap();
        assert_eq!(c, Crater::NotFormed);
    }

    #[test]
    fn vertical_normal_hit_is_rejected() {
        // Angle measured from the inward normal: sin(0) = 0
        let err = calculate_crater(20.0, 3_300.0, 18_000.0, 0.0, TARGET_DENSITY_LAND,
            STANDARD_GRAVITY)
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { name: "impact_angle_deg", .. }));
    }

    #[test]
    fn nonpositive_inputs_are_rejected() {
        let g = STANDARD_GRAVITY;
        assert!(calculate_crater(0.0, 3_300.0, 18_000.0, 60.0, 2_500.0, g).is_err());
        assert!(calculate_crater(20.0, 0.0, 18_000.0, 60.0, 2_500.0, g).is_err());
        assert!(calculate_crater(20.0, 3_300.0, 0.0, 60.0, 2_500.0, g).is_err());
        assert!(calculate_crater(20.0, 3_300.0, 18_000.0, 60.0, 0.0, g).is_err());
        assert!(calculate_crater(20.0, 3_300.0, 18_000.0, 60.0, 2_500.0, 0.0).is_err());
    }
}
