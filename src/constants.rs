// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Mean Earth radius, m (spherical model).
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Earth gravitational parameter mu = GM, m^3/s^2.
pub const EARTH_MU: f64 = 3.986_004_418e14;

/// Earth rotation rate, rad/s.
pub const EARTH_ROTATION: f64 = 7.292_115_9e-5;

/// Standard surface gravity, m/s^2.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Sea-level air density, kg/m^3.
pub const SEA_LEVEL_DENSITY: f64 = 1.225;

/// Atmospheric scale height, m.
pub const SCALE_HEIGHT: f64 = 8_000.0;

/// TNT energy equivalence, J/kg.
pub const TNT_ENERGY_J_PER_KG: f64 = 4.184e6;

/// One megaton of TNT, J.
pub const MEGATON_TNT_JOULE: f64 = 4.184e15;

// ---------------------------------------------------------------------------
// Model defaults
// ---------------------------------------------------------------------------

/// Drag coefficient for a tumbling irregular body.
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 1.0;

/// Material strength of a typical stony asteroid, MPa.
pub const DEFAULT_STRENGTH_MPA: f64 = 5.0;

/// Fraction of impact energy radiated as seismic waves.
pub const DEFAULT_SEISMIC_EFFICIENCY: f64 = 0.001;

/// Blast overpressure thresholds evaluated by default, kPa.
pub const DEFAULT_BLAST_THRESHOLDS_KPA: [f64; 4] = [1.0, 3.5, 10.0, 20.0];

/// Integration time step, s.
pub const DEFAULT_TIME_STEP: f64 = 1.0;

/// Maximum simulated time (30 days), s.
pub const DEFAULT_MAX_TIME: f64 = 2_592_000.0;

// ---------------------------------------------------------------------------
// Termination thresholds
// ---------------------------------------------------------------------------

/// Mass fraction below which the body counts as burned up.
pub const BURNOUT_MASS_FRACTION: f64 = 0.01;

/// Minimum altitude for the escape test, m.
pub const ESCAPE_MIN_ALTITUDE: f64 = 100_000.0;

// ---------------------------------------------------------------------------
// Adaptive trajectory sampling
// ---------------------------------------------------------------------------

/// Relative speed change that forces a sample.
pub const SAMPLE_SPEED_FRACTION: f64 = 0.05;

/// Velocity direction change that forces a sample, degrees.
pub const SAMPLE_DIRECTION_DEG: f64 = 5.0;

/// Longest interval between samples, s.
pub const SAMPLE_MAX_INTERVAL: f64 = 600.0;

// ---------------------------------------------------------------------------
// Target surface densities
// ---------------------------------------------------------------------------

/// Crater-scaling target density for rock, kg/m^3.
pub const TARGET_DENSITY_LAND: f64 = 2_500.0;

/// Crater-scaling target density for water, kg/m^3.
pub const TARGET_DENSITY_WATER: f64 = 1_000.0;
