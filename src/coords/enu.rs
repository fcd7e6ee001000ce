use nalgebra::Vector3;

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Local ENU frame
// ---------------------------------------------------------------------------

/// East/North/Up unit vectors expressed in ECEF at a given surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnuBasis {
    pub east: Vector3<f64>,
    pub north: Vector3<f64>,
    pub up: Vector3<f64>,
}

/// ENU basis vectors at geodetic latitude/longitude (radians).
pub fn enu_basis_at(lat_rad: f64, lon_rad: f64) -> EnuBasis {
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let (sin_lon, cos_lon) = lon_rad.sin_cos();
    EnuBasis {
        east: Vector3::new(-sin_lon, cos_lon, 0.0),
        north: Vector3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat),
        up: Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
    }
}

/// Build an ECEF velocity from speed, azimuth and entry angle.
///
/// Azimuth is measured clockwise from north; the entry angle is measured
/// from the local horizontal, positive downward.
pub fn velocity_from_azimuth_entry(
    speed_m_s: f64,
    azimuth_deg: f64,
    entry_angle_deg: f64,
    basis: &EnuBasis,
) -> Result<Vector3<f64>, SimError> {
    if speed_m_s < 0.0 {
        return Err(SimError::invalid("speed_m_s", speed_m_s));
    }

    let az = azimuth_deg.to_radians();
    let gamma = entry_angle_deg.to_radians();

    let v_horizontal = speed_m_s * gamma.cos();
    let v_east = v_horizontal * az.sin();
    let v_north = v_horizontal * az.cos();
    let v_up = -speed_m_s * gamma.sin();

    Ok(v_east * basis.east + v_north * basis.north + v_up * basis.up)
}
