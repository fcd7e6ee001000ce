use crate::error::SimError;
use crate::output::{Airburst, TerminationReason, TrajectoryPoint};

// ---------------------------------------------------------------------------
// Airburst detection
// ---------------------------------------------------------------------------

/// An airburst happens exactly when the flight ended in breakup; every
/// other termination reason reports `NotOccurred`. Burst altitude and
/// energy come from the terminating sample's own mass and velocity, so an
/// ablated body bursts with its remaining mass, not its initial one.
pub fn detect_airburst(
    samples: &[TrajectoryPoint],
    reason: TerminationReason,
) -> Result<Airburst, SimError> {
    let last = samples.last().ok_or(SimError::EmptyTrajectory)?;

    if reason != TerminationReason::Breakup {
        return Ok(Airburst::NotOccurred);
    }

    let v_mag = last.v_ecef.norm();
    Ok(Airburst::Occurred {
        burst_altitude_m: last.alt_m,
        burst_energy_joule: 0.5 * last.mass_kg * v_mag * v_mag,
    })
}
