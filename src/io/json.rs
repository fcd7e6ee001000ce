use std::io::{self, Write};

use crate::output::{Airburst, Crater, SimulationResult, TerminationReason};

/// Summary statistics computed from a finished simulation.
///
/// `simulate` records at least one trajectory sample, so the slice
/// accessors here never see an empty trajectory.
#[derive(Debug, Clone)]
pub struct ImpactReport {
    pub termination: TerminationReason,
    pub time_to_impact_s: f64,
    pub sample_count: usize,
    pub entry_speed_m_s: f64,
    pub max_speed_m_s: f64,
    pub final_altitude_m: f64,
    pub final_lat_deg: f64,
    pub final_lon_deg: f64,
    pub energy_mt_tnt: f64,
}

impl ImpactReport {
    /// Compute the report from a simulation result.
    pub fn from_result(result: &SimulationResult) -> Self {
        let first = &result.trajectory[0];
        let last = &result.trajectory[result.trajectory.len() - 1];

        let max_speed_m_s = result
            .trajectory
            .iter()
            .map(|p| p.v_ecef.norm())
            .fold(0.0_f64, f64::max);

        ImpactReport {
            termination: result.termination_reason,
            time_to_impact_s: result.time_to_impact_s,
            sample_count: result.trajectory.len(),
            entry_speed_m_s: first.v_ecef.norm(),
            max_speed_m_s,
            final_altitude_m: last.alt_m,
            final_lat_deg: last.lat_deg,
            final_lon_deg: last.lon_deg,
            energy_mt_tnt: result.energy.mt_tnt,
        }
    }
}

/// Write the full impact report as JSON to a writer.
pub fn write_report<W: Write>(writer: &mut W, result: &SimulationResult) -> io::Result<()> {
    let report = ImpactReport::from_result(result);

    writeln!(writer, "{{")?;
    writeln!(writer, "  \"termination\": \"{:?}\",", report.termination)?;
    writeln!(writer, "  \"time_to_impact_s\": {:.2},", report.time_to_impact_s)?;
    writeln!(writer, "  \"samples\": {},", report.sample_count)?;
    writeln!(writer, "  \"entry\": {{")?;
    writeln!(writer, "    \"entry_speed_m_s\": {:.2},", report.entry_speed_m_s)?;
    writeln!(writer, "    \"max_speed_m_s\": {:.2},", report.max_speed_m_s)?;
    writeln!(writer, "    \"final_altitude_m\": {:.1},", report.final_altitude_m)?;
    writeln!(writer, "    \"final_lat_deg\": {:.5},", report.final_lat_deg)?;
    writeln!(writer, "    \"final_lon_deg\": {:.5}", report.final_lon_deg)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"energy\": {{")?;
    writeln!(writer, "    \"joule\": {:.4e},", result.energy.joule)?;
    writeln!(writer, "    \"mt_tnt\": {:.4}", result.energy.mt_tnt)?;
    writeln!(writer, "  }},")?;

    match result.airburst {
        Airburst::Occurred { burst_altitude_m, burst_energy_joule } => {
            writeln!(writer, "  \"airburst\": {{")?;
            writeln!(writer, "    \"occurred\": true,")?;
            writeln!(writer, "    \"burst_altitude_m\": {burst_altitude_m:.1},")?;
            writeln!(writer, "    \"burst_energy_joule\": {burst_energy_joule:.4e}")?;
            writeln!(writer, "  }},")?;
        }
        Airburst::NotOccurred => {
            writeln!(writer, "  \"airburst\": {{ \"occurred\": false }},")?;
        }
    }

    match result.crater {
        Crater::Formed { transient_diameter_m, final_diameter_m, depth_m } => {
            writeln!(writer, "  \"crater\": {{")?;
            writeln!(writer, "    \"formed\": true,")?;
            writeln!(writer, "    \"transient_diameter_m\": {transient_diameter_m:.1},")?;
            writeln!(writer, "    \"final_diameter_m\": {final_diameter_m:.1},")?;
            writeln!(writer, "    \"depth_m\": {depth_m:.1}")?;
            writeln!(writer, "  }},")?;
        }
        Crater::NotFormed => {
            writeln!(writer, "  \"crater\": {{ \"formed\": false }},")?;
        }
    }

    writeln!(writer, "  \"blast_radii_km\": {{")?;
    let n = result.blast.damage_radii_km.len();
    for (i, (label, radius)) in result.blast.damage_radii_km.iter().enumerate() {
        let sep = if i + 1 == n { "" } else { "," };
        writeln!(writer, "    \"{label}\": {radius:.3}{sep}")?;
    }
    writeln!(writer, "  }},")?;

    writeln!(writer, "  \"seismic\": {{")?;
    writeln!(writer, "    \"moment_magnitude\": {:.2}", result.seismic.moment_magnitude)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write the impact report JSON to a file.
pub fn write_report_file(path: &str, result: &SimulationResult) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_report(&mut file, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{BlastInfo, EnergyInfo, SeismicInfo, TrajectoryPoint};
    use nalgebra::Vector3;
    use std::collections::BTreeMap;

    fn ground_impact_result() -> SimulationResult {
        let trajectory = vec![
            TrajectoryPoint {
                t_s: 0.0,
                r_ecef: Vector3::new(6_401_000.0, 0.0, 0.0),
                v_ecef: Vector3::new(-17_000.0, 6_000.0, 0.0),
                mass_kg: 13_800.0,
                alt_m: 30_000.0,
                lat_deg: 0.0,
                lon_deg: 0.0,
            },
            TrajectoryPoint {
                t_s: 1.7,
                r_ecef: Vector3::new(6_370_900.0, 10_000.0, 0.0),
                v_ecef: Vector3::new(-16_500.0, 5_900.0, 0.0),
                mass_kg: 13_750.0,
                alt_m: -92.0,
                lat_deg: 0.0,
                lon_deg: 0.09,
            },
        ];

        let mut damage_radii_km = BTreeMap::new();
        damage_radii_km.insert("10kPa".to_string(), 1.8);
        damage_radii_km.insert("1kPa".to_string(), 9.0);

        SimulationResult {
            trajectory,
            termination_reason: TerminationReason::Ground,
            time_to_impact_s: 1.7,
            energy: EnergyInfo { joule: 2.11e12, mt_tnt: 5.04e-4 },
            airburst: Airburst::NotOccurred,
            crater: Crater::Formed {
                transient_diameter_m: 580.0,
                final_diameter_m: 754.0,
                depth_m: 150.8,
            },
            blast: BlastInfo { damage_radii_km },
            seismic: SeismicInfo { moment_magnitude: 3.1 },
        }
    }

    #[test]
    fn report_summarizes_trajectory() {
        let result = ground_impact_result();
        let report = ImpactReport::from_result(&result);
        assert_eq!(report.sample_count, 2);
        assert!((report.time_to_impact_s - 1.7).abs() < 1e-12);
        assert!(report.entry_speed_m_s > report.max_speed_m_s - 1.0);
        assert!((report.final_lon_deg - 0.09).abs() < 1e-12);
    }

    #[test]
    fn json_output_is_valid() {
        let result = ground_impact_result();

        let mut buf = Vec::new();
        write_report(&mut buf, &result).unwrap();
        let json = String::from_utf8(buf).unwrap();

        assert!(json.contains("\"termination\": \"Ground\""));
        assert!(json.contains("\"occurred\": false"));
        assert!(json.contains("\"formed\": true"));
        assert!(json.contains("\"10kPa\": 1.800"));
        assert!(json.contains("\"moment_magnitude\": 3.10"));
        // Last map entry carries no trailing comma
        assert!(json.contains("\"1kPa\": 9.000\n"));
        assert_eq!(json.matches('{').count(), json.matches('}').count());
    }
}
