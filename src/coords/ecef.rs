use nalgebra::Vector3;

use crate::constants::EARTH_RADIUS;
use crate::error::SimError;

// ---------------------------------------------------------------------------
// ECEF <-> geodetic (spherical Earth)
// ---------------------------------------------------------------------------

/// Geodetic coordinate on the spherical Earth model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    pub lat_rad: f64,
    pub lon_rad: f64,
    pub alt_m: f64,
}

/// Convert an ECEF position to geodetic latitude, longitude and altitude.
///
/// Spherical approximation: latitude is `asin(z / |r|)` and altitude is
/// `|r| - R`. A zero-magnitude position has no defined direction and is
/// rejected.
pub fn ecef_to_geodetic(r_ecef: &Vector3<f64>) -> Result<Geodetic, SimError> {
    let r = r_ecef.norm();
    if r == 0.0 {
        return Err(SimError::DegenerateVector);
    }
    Ok(Geodetic {
        lat_rad: (r_ecef.z / r).asin(),
        lon_rad: r_ecef.y.atan2(r_ecef.x),
        alt_m: r - EARTH_RADIUS,
    })
}

/// Convert a geodetic coordinate back to an ECEF position.
pub fn geodetic_to_ecef(coord: &Geodetic) -> Vector3<f64> {
    let r = EARTH_RADIUS + coord.alt_m;
    let (sin_lat, cos_lat) = coord.lat_rad.sin_cos();
    let (sin_lon, cos_lon) = coord.lon_rad.sin_cos();
    Vector3::new(r * cos_lat * cos_lon, r * cos_lat * sin_lon, r * sin_lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equator_prime_meridian() {
        let r = Vector3::new(EARTH_RADIUS + 1_000.0, 0.0, 0.0);
        let g = ecef_to_geodetic(&r).unwrap();
        assert_relative_eq!(g.lat_rad, 0.0, epsilon = 1e-12);
        assert_relative_eq!(g.lon_rad, 0.0, epsilon = 1e-12);
        assert_relative_eq!(g.alt_m, 1_000.0, epsilon = 1e-6);
    }

    #[test]
    fn north_pole_latitude() {
        let r = Vector3::new(0.0, 0.0, EARTH_RADIUS);
        let g = ecef_to_geodetic(&r).unwrap();
        assert_relative_eq!(g.lat_rad, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(g.alt_m, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_position_rejected() {
        let err = ecef_to_geodetic(&Vector3::zeros()).unwrap_err();
        assert_eq!(err, SimError::DegenerateVector);
    }

    #[test]
    fn round_trip() {
        let g = Geodetic {
            lat_rad: 0.6,
            lon_rad: -2.1,
            alt_m: 85_000.0,
        };
        let r = geodetic_to_ecef(&g);
        let back = ecef_to_geodetic(&r).unwrap();
        assert_relative_eq!(back.lat_rad, g.lat_rad, epsilon = 1e-12);
        assert_relative_eq!(back.lon_rad, g.lon_rad, epsilon = 1e-12);
        assert_relative_eq!(back.alt_m, g.alt_m, epsilon = 1e-6);
    }
}
