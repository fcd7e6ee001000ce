use nalgebra::Vector3;

use crate::constants::EARTH_RADIUS;
use crate::input::{
    Bulk, Discovery, Environment, Meteoroid, ModelParams, SimulationInput, Surface,
};

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

/// 20 m stony body entering eastward over land, descending at 20 degrees.
/// Dynamic pressure exceeds its 10 MPa strength in the lower stratosphere,
/// so the run ends in a breakup and an airburst.
pub fn stony_airburster() -> SimulationInput {
    SimulationInput {
        discovery: Discovery {
            epoch_unix_s: 1_754_265_600.0,
            r0_ecef: Vector3::new(EARTH_RADIUS + 30_000.0, 0.0, 0.0),
            v0_ecef: Vector3::new(-6_499.0, 17_849.0, 0.0),
        },
        meteoroid: Meteoroid {
            diameter_m: 20.0,
            bulk: Bulk::Density(3_300.0),
            strength_mpa: Some(10.0),
        },
        environment: Environment {
            surface: Surface::Land,
            rho0_kg_m3: None,
            scale_height_m: None,
            gravity_m_s2: None,
        },
        model: ModelParams::default(),
    }
}

/// 50 m iron body on a steep entry. High compressive strength carries it
/// to the surface intact, where it excavates a kilometer-class crater.
pub fn iron_crater_former() -> SimulationInput {
    SimulationInput {
        discovery: Discovery {
            epoch_unix_s: 1_754_265_600.0,
            r0_ecef: Vector3::new(EARTH_RADIUS + 50_000.0, 0.0, 0.0),
            v0_ecef: Vector3::new(-14_000.0, 5_000.0, 0.0),
        },
        meteoroid: Meteoroid {
            diameter_m: 50.0,
            bulk: Bulk::Density(7_800.0),
            strength_mpa: Some(200.0),
        },
        environment: Environment {
            surface: Surface::Land,
            rho0_kg_m3: None,
            scale_height_m: None,
            gravity_m_s2: None,
        },
        model: ModelParams {
            time_step_s: Some(0.05),
            ..ModelParams::default()
        },
    }
}

/// 30 m iron body over deep ocean. Reaches the water at speed but the
/// surface suppresses cratering.
pub fn ocean_impactor() -> SimulationInput {
    SimulationInput {
        discovery: Discovery {
            epoch_unix_s: 1_754_265_600.0,
            r0_ecef: Vector3::new(EARTH_RADIUS + 40_000.0, 0.0, 0.0),
            v0_ecef: Vector3::new(-16_000.0, 8_000.0, 0.0),
        },
        meteoroid: Meteoroid {
            diameter_m: 30.0,
            bulk: Bulk::Density(7_800.0),
            strength_mpa: Some(250.0),
        },
        environment: Environment {
            surface: Surface::Water,
            rho0_kg_m3: None,
            scale_height_m: None,
            gravity_m_s2: None,
        },
        model: ModelParams {
            time_step_s: Some(0.1),
            ..ModelParams::default()
        },
    }
}

/// Look up a preset by its command-line name.
pub fn by_name(name: &str) -> Option<SimulationInput> {
    match name {
        "stony" => Some(stony_airburster()),
        "iron" => Some(iron_crater_former()),
        "ocean" => Some(ocean_impactor()),
        _ => None,
    }
}

/// Names accepted by `by_name`, for usage messages.
pub const PRESET_NAMES: [&str; 3] = ["stony", "iron", "ocean"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_name_resolves() {
        for name in PRESET_NAMES {
            assert!(by_name(name).is_some(), "missing preset {name}");
        }
        assert!(by_name("comet").is_none());
    }

    #[test]
    fn presets_start_above_the_surface() {
        for name in PRESET_NAMES {
            let input = by_name(name).unwrap();
            assert!(input.discovery.r0_ecef.norm() > EARTH_RADIUS);
            assert!(input.meteoroid.diameter_m > 0.0);
        }
    }
}
