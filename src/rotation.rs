//! Quaternion to rotation matrix conversion

use nalgebra::{Matrix3, Quaternion};

use crate::error::Result;
use crate::math::checked;

/// Builds the 3×3 rotation matrix of a quaternion
///
/// The quaternion is trusted to be unit length; only zero-magnitude and
/// non-finite input is rejected. The diagonal uses the
/// `qw² + qx² - qy² - qz²` form, so a non-unit input scales the matrix
/// rather than skewing it.
///
/// # Example
/// ```
/// use nalgebra::{Matrix3, Quaternion};
/// use sensor_orientation::rotation_matrix;
///
/// let r = rotation_matrix(&Quaternion::identity()).unwrap();
/// assert_eq!(r, Matrix3::identity());
/// ```
pub fn rotation_matrix(q: &Quaternion<f64>) -> Result<Matrix3<f64>> {
    let q = checked(*q)?;
    let (qw, qx, qy, qz) = (q.w, q.i, q.j, q.k);

    let ww = qw * qw;
    let xx = qx * qx;
    let yy = qy * qy;
    let zz = qz * qz;

    Ok(Matrix3::new(
        ww + xx - yy - zz,
        2.0 * (qx * qy - qw * qz),
        2.0 * (qx * qz + qw * qy),
        2.0 * (qx * qy + qw * qz),
        ww - xx + yy - zz,
        2.0 * (qy * qz - qw * qx),
        2.0 * (qx * qz - qw * qy),
        2.0 * (qy * qz + qw * qx),
        ww - xx - yy + zz,
    ))
}
