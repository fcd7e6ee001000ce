use crate::error::SimError;

// ---------------------------------------------------------------------------
// Seismic moment magnitude
// ---------------------------------------------------------------------------

/// Moment magnitude of the ground coupling,
/// `M_w = (2/3) * log10(eta * E) - 3.2`.
///
/// `eta` is the fraction of impact energy radiated as seismic waves and
/// must lie in (0, 1].
pub fn seismic_magnitude(energy_joule: f64, seismic_efficiency: f64) -> Result<f64, SimError> {
    if energy_joule <= 0.0 {
        return Err(SimError::invalid("energy_joule", energy_joule));
    }
    if seismic_efficiency <= 0.0 || seismic_efficiency > 1.0 {
        return Err(SimError::invalid("seismic_efficiency", seismic_efficiency));
    }

    let seismic_energy = seismic_efficiency * energy_joule;
    Ok(2.0 / 3.0 * seismic_energy.log10() - 3.2)
}
