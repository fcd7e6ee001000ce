use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Simulation input (immutable, caller-supplied)
// ---------------------------------------------------------------------------

/// Discovery-epoch state of the body.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub epoch_unix_s: f64,          // s since Unix epoch (carried, not consumed)
    pub r0_ecef: Vector3<f64>,      // m, must be non-zero
    pub v0_ecef: Vector3<f64>,      // m/s
}

/// Bulk property of the meteoroid: supply either total mass or bulk density.
/// The missing one is derived from the spherical volume at `diameter_m`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bulk {
    Mass(f64),      // kg
    Density(f64),   // kg/m^3
}

/// Physical properties of the meteoroid.
#[derive(Debug, Clone)]
pub struct Meteoroid {
    pub diameter_m: f64,            // m, > 0
    pub bulk: Bulk,                 // > 0
    pub strength_mpa: Option<f64>,  // MPa, breakup threshold (default 5)
}

/// Impact surface type. Water suppresses cratering and selects a lower
/// target density for the scaling law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Land,
    Water,
}

/// Environment parameters with optional overrides (each must stay positive
/// when supplied).
#[derive(Debug, Clone)]
pub struct Environment {
    pub surface: Surface,
    pub rho0_kg_m3: Option<f64>,    // sea-level air density
    pub scale_height_m: Option<f64>,
    pub gravity_m_s2: Option<f64>,  // surface gravity for crater scaling
}

/// Model parameters. Every field has a documented default resolved once by
/// the runner before any computation starts.
#[derive(Debug, Clone, Default)]
pub struct ModelParams {
    pub drag_coefficient: Option<f64>,          // default 1.0
    pub ablation_coeff: Option<f64>,            // s^2/m^2, default none (no ablation)
    pub seismic_efficiency: Option<f64>,        // (0, 1], default 0.001
    pub blast_thresholds_kpa: Option<Vec<f64>>, // default [1, 3.5, 10, 20]
    pub time_step_s: Option<f64>,               // default 1 s
    pub max_time_s: Option<f64>,                // default 30 days
}

/// Complete input for one simulation call.
#[derive(Debug, Clone)]
pub struct SimulationInput {
    pub discovery: Discovery,
    pub meteoroid: Meteoroid,
    pub environment: Environment,
    pub model: ModelParams,
}
