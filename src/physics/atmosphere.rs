use crate::error::SimError;

// ---------------------------------------------------------------------------
// Exponential atmosphere
// ---------------------------------------------------------------------------

/// Air density at altitude, `rho0 * exp(-h / H)`.
///
/// Negative altitudes return the sea-level density unchanged so that a body
/// crossing the surface mid-step keeps finite drag.
pub fn density(alt_m: f64, rho0_kg_m3: f64, scale_height_m: f64) -> Result<f64, SimError> {
    if rho0_kg_m3 < 0.0 {
        return Err(SimError::invalid("rho0_kg_m3", rho0_kg_m3));
    }
    if scale_height_m <= 0.0 {
        return Err(SimError::invalid("scale_height_m", scale_height_m));
    }
    if alt_m < 0.0 {
        return Ok(rho0_kg_m3);
    }
    Ok(rho0_kg_m3 * (-alt_m / scale_height_m).exp())
}
