//! Property-based tests for the impact-effects calculators.
//!
//! These verify the monotonicity laws the scaling models promise across a
//! wide range of physically plausible inputs.

use proptest::prelude::*;

use crate::effects::blast::blast_radius_km;
use crate::effects::crater::calculate_crater;
use crate::effects::seismic::seismic_magnitude;
use crate::output::Crater;

fn final_diameter(c: Crater) -> Option<f64> {
    match c {
        Crater::Formed { final_diameter_m, .. } => Some(final_diameter_m),
        Crater::NotFormed => None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Blast radius shrinks as the overpressure threshold rises.
    #[test]
    fn prop_blast_radius_decreases_with_threshold(
        energy in 1.0e12f64..1.0e18,
        p_lo in 0.5f64..50.0,
        factor in 1.1f64..4.0,
    ) {
        let r_lo = blast_radius_km(energy, p_lo, 0.0).unwrap();
        let r_hi = blast_radius_km(energy, p_lo * factor, 0.0).unwrap();
        prop_assert!(r_hi <= r_lo, "r({}) = {} > r({}) = {}", p_lo * factor, r_hi, p_lo, r_lo);
    }

    /// Blast radius grows with energy, and tenfold energy scales the
    /// ground radius by the cube root of ten.
    #[test]
    fn prop_blast_radius_grows_with_energy(
        energy in 1.0e12f64..1.0e17,
        threshold in 0.5f64..100.0,
    ) {
        let r1 = blast_radius_km(energy, threshold, 0.0).unwrap();
        let r10 = blast_radius_km(energy * 10.0, threshold, 0.0).unwrap();
        prop_assert!(r10 >= r1);
        let expected = r1 * 10.0f64.cbrt();
        prop_assert!((r10 - expected).abs() / expected < 1e-9);
    }

    /// An elevated burst never reaches farther on the ground than the
    /// same burst at the surface.
    #[test]
    fn prop_airburst_radius_bounded_by_ground_burst(
        energy in 1.0e12f64..1.0e18,
        threshold in 0.5f64..100.0,
        altitude in 1.0f64..50_000.0,
    ) {
        let ground = blast_radius_km(energy, threshold, 0.0).unwrap();
        let air = blast_radius_km(energy, threshold, altitude).unwrap();
        prop_assert!(air <= ground);
    }

    /// Final crater diameter dominates the transient one, and depth stays
    /// below the final diameter.
    #[test]
    fn prop_crater_proportions(
        diameter in 1.0f64..500.0,
        velocity in 1_000.0f64..50_000.0,
        angle in 10.0f64..90.0,
    ) {
        let c = calculate_crater(diameter, 3_300.0, velocity, angle, 2_500.0, 9.81).unwrap();
        if let Crater::Formed { transient_diameter_m, final_diameter_m, depth_m } = c {
            prop_assert!(final_diameter_m >= transient_diameter_m);
            prop_assert!(depth_m < final_diameter_m);
        }
    }

    /// Crater diameter grows with impactor size and speed.
    #[test]
    fn prop_crater_grows_with_size_and_speed(
        diameter in 5.0f64..200.0,
        velocity in 5_000.0f64..30_000.0,
        angle in 30.0f64..90.0,
    ) {
        let base = final_diameter(
            calculate_crater(diameter, 3_300.0, velocity, angle, 2_500.0, 9.81).unwrap(),
        );
        let bigger = final_diameter(
            calculate_crater(diameter * 2.0, 3_300.0, velocity, angle, 2_500.0, 9.81).unwrap(),
        );
        let faster = final_diameter(
            calculate_crater(diameter, 3_300.0, velocity * 2.0, angle, 2_500.0, 9.81).unwrap(),
        );
        if let (Some(b), Some(big), Some(fast)) = (base, bigger, faster) {
            prop_assert!(big > b);
            prop_assert!(fast > b);
        }
    }

    /// Scaling the energy by 100 raises the magnitude by (2/3)*log10(100).
    #[test]
    fn prop_seismic_magnitude_energy_law(
        energy in 1.0e10f64..1.0e18,
        efficiency in 1.0e-4f64..1.0,
    ) {
        let m1 = seismic_magnitude(energy, efficiency).unwrap();
        let m2 = seismic_magnitude(energy * 100.0, efficiency).unwrap();
        let delta = m2 - m1;
        let expected = 2.0 / 3.0 * 2.0;
        prop_assert!((delta - expected).abs() < 1e-9, "delta = {delta}");
    }
}
