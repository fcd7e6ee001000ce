use std::collections::BTreeMap;

use crate::constants::MEGATON_TNT_JOULE;
use crate::error::SimError;
use crate::output::BlastInfo;

// ---------------------------------------------------------------------------
// Blast overpressure radii (Glasstone & Dolan scaling)
// ---------------------------------------------------------------------------

/// Empirical (scaled distance z [m/kt^(1/3)], overpressure [kPa]) pairs,
/// ordered by increasing distance / decreasing pressure.
const OVERPRESSURE_SCALING: [(f64, f64); 14] = [
    (0.05, 200.0),
    (0.1, 100.0),
    (0.15, 60.0),
    (0.2, 40.0),
    (0.3, 20.0),
    (0.4, 10.0),
    (0.6, 5.0),
    (0.8, 3.5),
    (1.0, 2.5),
    (1.5, 1.5),
    (2.0, 1.0),
    (3.0, 0.5),
    (4.0, 0.3),
    (5.0, 0.2),
];

/// Invert the scaling table for an overpressure threshold. Interpolation
/// is linear in scaled distance against log pressure; thresholds outside
/// the table clamp to the nearest endpoint.
fn scaled_distance_for(p_kpa: f64) -> f64 {
    let (z_first, p_first) = OVERPRESSURE_SCALING[0];
    if p_kpa >= p_first {
        return z_first;
    }
    let (z_last, p_last) = OVERPRESSURE_SCALING[OVERPRESSURE_SCALING.len() - 1];
    if p_kpa <= p_last {
        return z_last;
    }

    for pair in OVERPRESSURE_SCALING.windows(2) {
        let (z1, p1) = pair[0];
        let (z2, p2) = pair[1];
        if p_kpa <= p1 && p_kpa >= p2 {
            let t = (p_kpa.ln() - p1.ln()) / (p2.ln() - p1.ln());
            return z1 + t * (z2 - z1);
        }
    }

    z_first
}

/// Ground radius (km) at which the blast overpressure reaches a threshold.
///
/// `R = z * W_kt^(1/3)`; an elevated burst projects to the ground through
/// `sqrt(R^2 - h^2)`, collapsing to zero when the burst is too high for the
/// threshold to reach the surface at all.
pub fn blast_radius_km(
    energy_joule: f64,
    overpressure_kpa: f64,
    burst_altitude_m: f64,
) -> Result<f64, SimError> {
    if energy_joule <= 0.0 {
        return Err(SimError::invalid("energy_joule", energy_joule));
    }
    if overpressure_kpa <= 0.0 {
        return Err(SimError::invalid("overpressure_kpa", overpressure_kpa));
    }

    let w_kt = energy_joule / MEGATON_TNT_JOULE * 1_000.0;
    let z = scaled_distance_for(overpressure_kpa);
    let slant_m = z * w_kt.cbrt() * 1_000.0;

    let ground_m = if burst_altitude_m > 0.0 {
        let reach = slant_m * slant_m - burst_altitude_m * burst_altitude_m;
        if reach > 0.0 {
            reach.sqrt()
        } else {
            0.0
        }
    } else {
        slant_m
    };

    Ok(ground_m / 1_000.0)
}

/// Radius for every configured threshold, keyed `"{p}kPa"`. The first
/// failing threshold aborts the whole call.
pub fn blast_radii(
    energy_joule: f64,
    thresholds_kpa: &[f64],
    burst_altitude_m: f64,
) -> Result<BlastInfo, SimError> {
    let mut damage_radii_km = BTreeMap::new();
    for &threshold in thresholds_kpa {
        let radius = blast_radius_km(energy_joule, threshold, burst_altitude_m)?;
        damage_radii_km.insert(format!("{threshold}kPa"), radius);
    }
    Ok(BlastInfo { damage_radii_km })
}
