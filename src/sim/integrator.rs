use nalgebra::Vector3;

use crate::constants::{BURNOUT_MASS_FRACTION, EARTH_MU, ESCAPE_MIN_ALTITUDE, SAMPLE_DIRECTION_DEG,
    SAMPLE_MAX_INTERVAL, SAMPLE_SPEED_FRACTION};
use crate::coords::ecef::{self, Geodetic};
use crate::coords::vector::unit_or_zero;
use crate::error::SimError;
use crate::output::{TerminationReason, TrajectoryPoint};
use crate::physics::dynamics::{self, DynamicState, ForceModel};
use crate::physics::{atmosphere, drag};

// ---------------------------------------------------------------------------
// RK4 integrator with termination ladder and adaptive sampling
// ---------------------------------------------------------------------------

/// Trajectory produced by the integration loop.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryResult {
    pub samples: Vec<TrajectoryPoint>,
    pub termination_reason: TerminationReason,
}

/// Single classical RK4 step. Stage states are advanced without clamping;
/// the combined mass is clamped to zero.
pub fn rk4_step(state: &DynamicState, model: &ForceModel, dt: f64) -> Result<DynamicState, SimError> {
    let k1 = dynamics::derivatives(state, model)?;
    let k2 = dynamics::derivatives(&state.apply(&k1, dt * 0.5), model)?;
    let k3 = dynamics::derivatives(&state.apply(&k2, dt * 0.5), model)?;
    let k4 = dynamics::derivatives(&state.apply(&k3, dt), model)?;

    Ok(DynamicState {
        r: state.r + (k1.dr_dt + 2.0 * k2.dr_dt + 2.0 * k3.dr_dt + k4.dr_dt) * (dt / 6.0),
        v: state.v + (k1.dv_dt + 2.0 * k2.dv_dt + 2.0 * k3.dv_dt + k4.dv_dt) * (dt / 6.0),
        m: (state.m + (k1.dm_dt + 2.0 * k2.dm_dt + 2.0 * k3.dm_dt + k4.dm_dt) * (dt / 6.0))
            .max(0.0),
    })
}

// ---------------------------------------------------------------------------
// Adaptive sampler
// ---------------------------------------------------------------------------

/// Tracks the last recorded sample and decides when the trajectory has
/// changed enough to record another. First and terminating samples bypass
/// the test entirely.
struct Sampler {
    last_t: f64,
    last_speed: f64,
    last_dir: Vector3<f64>,
}

impl Sampler {
    fn new(t: f64, v: &Vector3<f64>) -> Self {
        Sampler {
            last_t: t,
            last_speed: v.norm(),
            last_dir: unit_or_zero(v),
        }
    }

    fn should_record(&self, t: f64, v: &Vector3<f64>) -> bool {
        let speed = v.norm();
        let speed_changed = if self.last_speed == 0.0 {
            speed > 0.0
        } else {
            (speed - self.last_speed).abs() / self.last_speed > SAMPLE_SPEED_FRACTION
        };

        let dir_changed =
            unit_or_zero(v).dot(&self.last_dir) < SAMPLE_DIRECTION_DEG.to_radians().cos();

        speed_changed || dir_changed || t - self.last_t > SAMPLE_MAX_INTERVAL
    }

    fn mark(&mut self, t: f64, v: &Vector3<f64>) {
        self.last_t = t;
        self.last_speed = v.norm();
        self.last_dir = unit_or_zero(v);
    }
}

fn point_at(t: f64, state: &DynamicState, geod: &Geodetic) -> TrajectoryPoint {
    TrajectoryPoint {
        t_s: t,
        r_ecef: state.r,
        v_ecef: state.v,
        mass_kg: state.m,
        alt_m: geod.alt_m,
        lat_deg: geod.lat_rad.to_degrees(),
        lon_deg: geod.lon_rad.to_degrees(),
    }
}

// ---------------------------------------------------------------------------
// Integration loop
// ---------------------------------------------------------------------------

/// Integrate the trajectory from the discovery state until one of the five
/// exit conditions fires.
///
/// Per step, after the RK4 update:
///   - breakup:  dynamic pressure at the new state reaches the strength
///   - escape:   above 100 km, positive specific orbital energy, outbound
///   - ground:   altitude at or below zero (overrides the two above)
///   - burnout:  mass under 1% of initial, only when nothing else fired
/// The first condition set halts the loop; otherwise the loop runs to
/// `max_time` and terminates with `MaxTime`.
pub fn integrate_trajectory(
    r0: &Vector3<f64>,
    v0: &Vector3<f64>,
    m0: f64,
    model: &ForceModel,
    strength_pa: f64,
    dt: f64,
    max_time: f64,
) -> Result<TrajectoryResult, SimError> {
    let mut state = DynamicState { r: *r0, v: *v0, m: m0 };
    let mut t = 0.0;

    let geod0 = ecef::ecef_to_geodetic(r0)?;
    let mut samples = vec![point_at(0.0, &state, &geod0)];
    let mut sampler = Sampler::new(0.0, v0);

    let burnout_threshold = m0 * BURNOUT_MASS_FRACTION;
    let mut reason = TerminationReason::MaxTime;

    while t < max_time {
        state = rk4_step(&state, model, dt)?;
        t += dt;

        let geod = ecef::ecef_to_geodetic(&state.r)?;
        let rho = atmosphere::density(geod.alt_m, model.rho0_kg_m3, model.scale_height_m)?;
        let q = drag::dynamic_pressure(state.v.norm(), rho)?;

        let mut step_reason = None;
        if q >= strength_pa {
            step_reason = Some(TerminationReason::Breakup);
        }
        if geod.alt_m > ESCAPE_MIN_ALTITUDE {
            let specific_energy = state.v.norm_squared() / 2.0 - EARTH_MU / state.r.norm();
            if specific_energy > 0.0 && state.r.dot(&state.v) > 0.0 {
                step_reason = Some(TerminationReason::Escape);
            }
        }
        if geod.alt_m <= 0.0 {
            step_reason = Some(TerminationReason::Ground);
        }
        if step_reason.is_none() && state.m < burnout_threshold {
            step_reason = Some(TerminationReason::Burnout);
        }

        if step_reason.is_some() || sampler.should_record(t, &state.v) {
            samples.push(point_at(t, &state, &geod));
            sampler.mark(t, &state.v);
        }

        if let Some(r) = step_reason {
            reason = r;
            break;
        }
    }

    // A max-time exit still records the exact final state
    if reason == TerminationReason::MaxTime
        && samples.last().map(|p| p.t_s) != Some(t)
    {
        let geod = ecef::ecef_to_geodetic(&state.r)?;
        samples.push(point_at(t, &state, &geod));
    }

    Ok(TrajectoryResult {
        samples,
        termination_reason: reason,
    })
}
