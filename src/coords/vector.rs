use nalgebra::Vector3;

/// Unit vector of `v`, or the zero vector when `v` has zero magnitude.
///
/// `nalgebra::normalize` on a zero vector produces NaN components; every
/// direction computation in the crate goes through this helper instead.
pub fn unit_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    let n = v.norm();
    if n == 0.0 {
        Vector3::zeros()
    } else {
        v / n
    }
}
