use std::collections::BTreeMap;

use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Simulation output
// ---------------------------------------------------------------------------

/// One recorded sample along the trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPoint {
    pub t_s: f64,               // s since discovery epoch
    pub r_ecef: Vector3<f64>,   // m
    pub v_ecef: Vector3<f64>,   // m/s
    pub mass_kg: f64,
    pub alt_m: f64,
    pub lat_deg: f64,
    pub lon_deg: f64,
}

/// Why the integration loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    Ground,
    Breakup,
    Burnout,
    MaxTime,
    Escape,
}

/// Kinetic energy at termination, in joules and megatons of TNT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyInfo {
    pub joule: f64,
    pub mt_tnt: f64,
}

/// Airburst outcome. Only a breakup termination can produce `Occurred`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Airburst {
    Occurred {
        burst_altitude_m: f64,
        burst_energy_joule: f64,
    },
    NotOccurred,
}

/// Crater outcome. `NotFormed` covers water targets and bodies too small
/// for the scaling law to leave a crater.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crater {
    Formed {
        transient_diameter_m: f64,
        final_diameter_m: f64,
        depth_m: f64,
    },
    NotFormed,
}

/// Damage radius per overpressure threshold, keyed by a `"{p}kPa"` label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlastInfo {
    pub damage_radii_km: BTreeMap<String, f64>,
}

/// Seismic magnitude of the impact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeismicInfo {
    pub moment_magnitude: f64,
}

/// Complete output of one simulation call.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub trajectory: Vec<TrajectoryPoint>,
    pub termination_reason: TerminationReason,
    pub time_to_impact_s: f64,
    pub energy: EnergyInfo,
    pub airburst: Airburst,
    pub crater: Crater,
    pub blast: BlastInfo,
    pub seismic: SeismicInfo,
}
