use std::f64::consts::PI;

use crate::constants::{DEFAULT_BLAST_THRESHOLDS_KPA, DEFAULT_DRAG_COEFFICIENT, DEFAULT_MAX_TIME,
    DEFAULT_SEISMIC_EFFICIENCY, DEFAULT_STRENGTH_MPA, DEFAULT_TIME_STEP, MEGATON_TNT_JOULE,
    SCALE_HEIGHT, SEA_LEVEL_DENSITY, STANDARD_GRAVITY, TARGET_DENSITY_LAND, TARGET_DENSITY_WATER};
use crate::coords::vector::unit_or_zero;
use crate::effects::{airburst, blast, crater, impact, seismic};
use crate::error::SimError;
use crate::input::{Bulk, SimulationInput, Surface};
use crate::output::{Airburst, BlastInfo, Crater, EnergyInfo, SeismicInfo, SimulationResult,
    TerminationReason};
use crate::physics::dynamics::ForceModel;
use crate::sim::integrator;

// ---------------------------------------------------------------------------
// Simulation runner
// ---------------------------------------------------------------------------

/// Fully-resolved simulation parameters. Built once at the top of
/// `simulate`; everything downstream consumes plain values.
struct Resolved {
    area_m2: f64,
    mass0_kg: f64,
    density_kg_m3: f64,
    strength_pa: f64,
    target_density_kg_m3: f64,
    gravity_m_s2: f64,
    rho0_kg_m3: f64,
    scale_height_m: f64,
    drag_coefficient: f64,
    ablation_coeff: Option<f64>,
    seismic_efficiency: f64,
    blast_thresholds_kpa: Vec<f64>,
    time_step_s: f64,
    max_time_s: f64,
}

fn resolve(input: &SimulationInput) -> Result<Resolved, SimError> {
    if input.discovery.r0_ecef.norm() == 0.0 {
        return Err(SimError::DegenerateVector);
    }

    let diameter = input.meteoroid.diameter_m;
    if diameter <= 0.0 {
        return Err(SimError::invalid("diameter_m", diameter));
    }

    let volume = PI * diameter.powi(3) / 6.0;
    let (mass0_kg, density_kg_m3) = match input.meteoroid.bulk {
        Bulk::Mass(m) => {
            if m <= 0.0 {
                return Err(SimError::invalid("mass_kg", m));
            }
            (m, m / volume)
        }
        Bulk::Density(rho) => {
            if rho <= 0.0 {
                return Err(SimError::invalid("density_kg_m3", rho));
            }
            (rho * volume, rho)
        }
    };

    let strength_mpa = input.meteoroid.strength_mpa.unwrap_or(DEFAULT_STRENGTH_MPA);
    if strength_mpa <= 0.0 {
        return Err(SimError::invalid("strength_mpa", strength_mpa));
    }

    let env = &input.environment;
    let rho0_kg_m3 = env.rho0_kg_m3.unwrap_or(SEA_LEVEL_DENSITY);
    if rho0_kg_m3 <= 0.0 {
        return Err(SimError::invalid("rho0_kg_m3", rho0_kg_m3));
    }
    let scale_height_m = env.scale_height_m.unwrap_or(SCALE_HEIGHT);
    if scale_height_m <= 0.0 {
        return Err(SimError::invalid("scale_height_m", scale_height_m));
    }
    let gravity_m_s2 = env.gravity_m_s2.unwrap_or(STANDARD_GRAVITY);
    if gravity_m_s2 <= 0.0 {
        return Err(SimError::invalid("gravity_m_s2", gravity_m_s2));
    }

    let model = &input.model;
    let drag_coefficient = model.drag_coefficient.unwrap_or(DEFAULT_DRAG_COEFFICIENT);
    if drag_coefficient <= 0.0 {
        return Err(SimError::invalid("drag_coefficient", drag_coefficient));
    }
    if let Some(sigma) = model.ablation_coeff {
        if sigma <= 0.0 {
            return Err(SimError::invalid("ablation_coeff", sigma));
        }
    }
    let seismic_efficiency = model.seismic_efficiency.unwrap_or(DEFAULT_SEISMIC_EFFICIENCY);
    if seismic_efficiency <= 0.0 || seismic_efficiency > 1.0 {
        return Err(SimError::invalid("seismic_efficiency", seismic_efficiency));
    }
    let blast_thresholds_kpa = model
        .blast_thresholds_kpa
        .clone()
        .unwrap_or_else(|| DEFAULT_BLAST_THRESHOLDS_KPA.to_vec());
    for &threshold in &blast_thresholds_kpa {
        if threshold <= 0.0 {
            return Err(SimError::invalid("blast_thresholds_kpa", threshold));
        }
    }
    let time_step_s = model.time_step_s.unwrap_or(DEFAULT_TIME_STEP);
    if time_step_s <= 0.0 {
        return Err(SimError::invalid("time_step_s", time_step_s));
    }
    let max_time_s = model.max_time_s.unwrap_or(DEFAULT_MAX_TIME);
    if max_time_s <= 0.0 {
        return Err(SimError::invalid("max_time_s", max_time_s));
    }

    let target_density_kg_m3 = match env.surface {
        Surface::Land => TARGET_DENSITY_LAND,
        Surface::Water => TARGET_DENSITY_WATER,
    };

    Ok(Resolved {
        area_m2: PI * diameter * diameter / 4.0,
        mass0_kg,
        density_kg_m3,
        strength_pa: strength_mpa * 1.0e6,
        target_density_kg_m3,
        gravity_m_s2,
        rho0_kg_m3,
        scale_height_m,
        drag_coefficient,
        ablation_coeff: model.ablation_coeff,
        seismic_efficiency,
        blast_thresholds_kpa,
        time_step_s,
        max_time_s,
    })
}

/// Run one complete simulation: trajectory, then every downstream effect
/// the termination reason admits.
///
/// Energy, blast and seismic output are gated on how the flight ended:
/// a body that escaped, burned out or timed out deposits nothing, so
/// those sections report zero/empty rather than extrapolating from
/// residual kinetic energy.
pub fn simulate(input: &SimulationInput) -> Result<SimulationResult, SimError> {
    let p = resolve(input)?;

    let model = ForceModel {
        drag_coefficient: p.drag_coefficient,
        area_m2: p.area_m2,
        rho0_kg_m3: p.rho0_kg_m3,
        scale_height_m: p.scale_height_m,
        ablation_coeff: p.ablation_coeff,
        time_step_s: p.time_step_s,
    };

    let traj = integrator::integrate_trajectory(
        &input.discovery.r0_ecef,
        &input.discovery.v0_ecef,
        p.mass0_kg,
        &model,
        p.strength_pa,
        p.time_step_s,
        p.max_time_s,
    )?;

    let reason = traj.termination_reason;
    let last = traj.samples.last().ok_or(SimError::EmptyTrajectory)?;
    let time_to_impact_s = last.t_s;

    // Deposited energy comes from the final sample's own mass and speed;
    // ablation may have consumed most of the initial mass by now
    let energy_joule = match reason {
        TerminationReason::Ground | TerminationReason::Breakup => {
            let v_mag = last.v_ecef.norm();
            0.5 * last.mass_kg * v_mag * v_mag
        }
        _ => 0.0,
    };
    let energy = EnergyInfo {
        joule: energy_joule,
        mt_tnt: energy_joule / MEGATON_TNT_JOULE,
    };

    let airburst_info = airburst::detect_airburst(&traj.samples, reason)?;
    let impact_site = impact::detect_impact(&traj.samples)?;

    let crater_info = match (&impact_site, input.environment.surface) {
        (Some(site), Surface::Land) => {
            let v_mag = site.v_ecef.norm();
            let outward_normal = unit_or_zero(&site.r_ecef);
            let v_unit = unit_or_zero(&site.v_ecef);
            let cos_angle = (-outward_normal.dot(&v_unit)).clamp(-1.0, 1.0);
            let impact_angle_deg = cos_angle.acos().to_degrees();
            crater::calculate_crater(
                input.meteoroid.diameter_m,
                p.density_kg_m3,
                v_mag,
                impact_angle_deg,
                p.target_density_kg_m3,
                p.gravity_m_s2,
            )?
        }
        _ => Crater::NotFormed,
    };

    let burst_altitude_m = match airburst_info {
        Airburst::Occurred { burst_altitude_m, .. } => burst_altitude_m,
        Airburst::NotOccurred => 0.0,
    };
    let deposits_energy =
        matches!(reason, TerminationReason::Ground | TerminationReason::Breakup);
    let blast_info = if deposits_energy && energy_joule > 0.0 {
        blast::blast_radii(energy_joule, &p.blast_thresholds_kpa, burst_altitude_m)?
    } else {
        BlastInfo::default()
    };

    let seismic_info = if reason == TerminationReason::Ground {
        SeismicInfo {
            moment_magnitude: seismic::seismic_magnitude(energy_joule, p.seismic_efficiency)?,
        }
    } else {
        SeismicInfo { moment_magnitude: 0.0 }
    };

    Ok(SimulationResult {
        trajectory: traj.samples,
        termination_reason: reason,
        time_to_impact_s,
        energy,
        airburst: airburst_info,
        crater: crater_info,
        blast: blast_info,
        seismic: seismic_info,
    })
}
