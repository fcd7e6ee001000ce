use nalgebra::Vector3;

use crate::error::SimError;
use crate::output::TrajectoryPoint;

// ---------------------------------------------------------------------------
// Surface impact detection
// ---------------------------------------------------------------------------

/// Surface-contact state taken from the terminating sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactSite {
    pub t_s: f64,
    pub r_ecef: Vector3<f64>,
    pub v_ecef: Vector3<f64>,
    pub lat_deg: f64,
    pub lon_deg: f64,
}

/// Inspect the last trajectory sample. Altitude at or below zero means
/// the body reached the surface; anything else is no impact.
pub fn detect_impact(samples: &[TrajectoryPoint]) -> Result<Option<ImpactSite>, SimError> {
    let last = samples.last().ok_or(SimError::EmptyTrajectory)?;
    if last.alt_m <= 0.0 {
        Ok(Some(ImpactSite {
            t_s: last.t_s,
            r_ecef: last.r_ecef,
            v_ecef: last.v_ecef,
            lat_deg: last.lat_deg,
            lon_deg: last.lon_deg,
        }))
    } else {
        Ok(None)
    }
}
