use std::io::{self, Write};

use crate::output::TrajectoryPoint;

/// Write trajectory samples to CSV format.
///
/// Columns: t_s, pos_x, pos_y, pos_z, vel_x, vel_y, vel_z,
///          mass_kg, alt_m, lat_deg, lon_deg
pub fn write_trajectory<W: Write>(
    writer: &mut W,
    trajectory: &[TrajectoryPoint],
) -> io::Result<()> {
    writeln!(
        writer,
        "t_s,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,mass_kg,alt_m,lat_deg,lon_deg"
    )?;

    for p in trajectory {
        writeln!(
            writer,
            "{:.4},{:.3},{:.3},{:.3},{:.4},{:.4},{:.4},{:.4},{:.2},{:.6},{:.6}",
            p.t_s,
            p.r_ecef.x,
            p.r_ecef.y,
            p.r_ecef.z,
            p.v_ecef.x,
            p.v_ecef.y,
            p.v_ecef.z,
            p.mass_kg,
            p.alt_m,
            p.lat_deg,
            p.lon_deg,
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &[TrajectoryPoint]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}
