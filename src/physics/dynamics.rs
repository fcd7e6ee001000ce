use nalgebra::Vector3;

use crate::coords::ecef;
use crate::error::SimError;
use crate::physics::{atmosphere, drag, gravity, rotation};

// ---------------------------------------------------------------------------
// Translational state: position, velocity, mass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicState {
    pub r: Vector3<f64>,    // m, ECEF
    pub v: Vector3<f64>,    // m/s, ECEF
    pub m: f64,             // kg
}

impl DynamicState {
    /// Euler-advance by `dt` along a derivative. Used for the intermediate
    /// integrator stages; the mass is left unclamped so a stage that drives
    /// it nonpositive surfaces as a drag error instead of silently
    /// continuing with an empty body.
    pub fn apply(&self, d: &Deriv, dt: f64) -> DynamicState {
        DynamicState {
            r: self.r + d.dr_dt * dt,
            v: self.v + d.dv_dt * dt,
            m: self.m + d.dm_dt * dt,
        }
    }
}

/// State derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub dr_dt: Vector3<f64>,
    pub dv_dt: Vector3<f64>,
    pub dm_dt: f64,
}

// ---------------------------------------------------------------------------
// Resolved force-model parameters
// ---------------------------------------------------------------------------

/// Parameters the right-hand side consumes. All defaults are already
/// resolved; no `Option` except ablation, which is genuinely off when
/// absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    pub drag_coefficient: f64,
    pub area_m2: f64,               // cross-section at the body diameter
    pub rho0_kg_m3: f64,
    pub scale_height_m: f64,
    pub ablation_coeff: Option<f64>, // s^2/m^2
    pub time_step_s: f64,
}

// ---------------------------------------------------------------------------
// Equations of motion
// ---------------------------------------------------------------------------

/// Compute state derivatives for a given state.
///
/// Forces modeled:
///   1. Gravity:  inverse-square, central
///   2. Drag:     quadratic in the air-relative speed `|v - omega x r|`
///   3. Ablation: `dm/dt = -sigma * A * rho * |v_rel|^3 / 2` when enabled
pub fn derivatives(state: &DynamicState, model: &ForceModel) -> Result<Deriv, SimError> {
    let geod = ecef::ecef_to_geodetic(&state.r)?;
    let rho = atmosphere::density(geod.alt_m, model.rho0_kg_m3, model.scale_height_m)?;

    // Atmosphere co-rotates with the Earth
    let v_rel = state.v - rotation::earth_rotation_vector().cross(&state.r);
    let v_rel_mag = v_rel.norm();

    let a_gravity = gravity::gravity_acceleration(&state.r)?;
    let a_drag = drag::drag_acceleration(
        &v_rel,
        rho,
        model.drag_coefficient,
        model.area_m2,
        state.m,
    )?;

    let mut dm_dt = 0.0;
    if let Some(sigma) = model.ablation_coeff {
        if rho > 0.0 && v_rel_mag > 0.0 {
            dm_dt = -(sigma * model.area_m2 * rho * v_rel_mag.powi(3)) / 2.0;
            // Never ablate past zero within one step
            if state.m + dm_dt * model.time_step_s < 0.0 {
                dm_dt = 0.0;
            }
        }
    }

    Ok(Deriv {
        dr_dt: state.v,
        dv_dt: a_gravity + a_drag,
        dm_dt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_RADIUS, SCALE_HEIGHT, SEA_LEVEL_DENSITY};
    use approx::assert_relative_eq;

    fn model(ablation: Option<f64>) -> ForceModel {
        ForceModel {
            drag_coefficient: 1.0,
            area_m2: 50.0,
            rho0_kg_m3: SEA_LEVEL_DENSITY,
            scale_height_m: SCALE_HEIGHT,
            ablation_coeff: ablation,
            time_step_s: 1.0,
        }
    }

    fn entry_state() -> DynamicState {
        DynamicState {
            r: Vector3::new(EARTH_RADIUS + 50_000.0, 0.0, 0.0),
            v: Vector3::new(-15_000.0, 0.0, 0.0),
            m: 1.0e7,
        }
    }

    #[test]
    fn position_derivative_is_velocity() {
        let s = entry_state();
        let d = derivatives(&s, &model(None)).unwrap();
        assert_eq!(d.dr_dt, s.v);
    }

    #[test]
    fn vacuum_fall_is_pure_gravity() {
        // 500 km up the density is ~0; acceleration reduces to gravity
        let s = DynamicState {
            r: Vector3::new(EARTH_RADIUS + 500_000.0, 0.0, 0.0),
            v: Vector3::zeros(),
            m: 1.0e7,
        };
        let d = derivatives(&s, &model(None)).unwrap();
        let g = crate::physics::gravity::gravity_acceleration(&s.r).unwrap();
        assert_relative_eq!((d.dv_dt - g).norm(), 0.0, epsilon = 1e-6);
        assert_eq!(d.dm_dt, 0.0);
    }

    #[test]
    fn drag_decelerates_dense_entry() {
        let s = DynamicState {
            r: Vector3::new(EARTH_RADIUS + 10_000.0, 0.0, 0.0),
            v: Vector3::new(-15_000.0, 0.0, 0.0),
            m: 1.0e4,
        };
        let d = derivatives(&s, &model(None)).unwrap();
        // Gravity and drag both act along -x here; drag must dominate
        // gravity's ~9.8 m/s^2 by orders of magnitude at this speed
        assert!(d.dv_dt.x > 0.0, "drag should push against the inward velocity");
    }

    #[test]
    fn ablation_consumes_mass() {
        let d = derivatives(&entry_state(), &model(Some(1.0e-8))).unwrap();
        assert!(d.dm_dt < 0.0);
    }

    #[test]
    fn ablation_guard_stops_at_zero() {
        let s = DynamicState {
            m: 1.0e-9,
            ..entry_state()
        };
        let d = derivatives(&s, &model(Some(1.0))).unwrap();
        assert_eq!(d.dm_dt, 0.0);
    }

    #[test]
    fn no_ablation_without_coefficient() {
        let d = derivatives(&entry_state(), &model(None)).unwrap();
        assert_eq!(d.dm_dt, 0.0);
    }

    #[test]
    fn zero_position_propagates_error() {
        let s = DynamicState {
            r: Vector3::zeros(),
            v: Vector3::zeros(),
            m: 1.0,
        };
        assert_eq!(derivatives(&s, &model(None)).unwrap_err(), SimError::DegenerateVector);
    }
}
