//! Euler angle and inclination conversions

use nalgebra::{Quaternion, Vector3};

use crate::error::Result;
use crate::math::{RAD_TO_DEG, Vector3Ext, checked};
use crate::types::EulerAngles;

/// Converts a quaternion to aerospace-sequence Euler angles in degrees
///
/// The quaternion is trusted to be unit length. The `asin` argument is
/// clamped to `[-1, 1]` so a slightly over-unit input yields ±90° pitch
/// instead of NaN.
///
/// # Example
/// ```
/// use nalgebra::Quaternion;
/// use sensor_orientation::euler_angles;
///
/// let euler = euler_angles(&Quaternion::identity()).unwrap();
/// assert_eq!((euler.yaw, euler.pitch, euler.roll), (0.0, 0.0, 0.0));
/// ```
pub fn euler_angles(q: &Quaternion<f64>) -> Result<EulerAngles> {
    let q = checked(*q)?;
    let (qw, qx, qy, qz) = (q.w, q.i, q.j, q.k);

    let yaw = (2.0 * (qw * qz + qx * qy)).atan2(1.0 - 2.0 * (qy * qy + qz * qz));
    let pitch = (2.0 * (qw * qy - qz * qx)).clamp(-1.0, 1.0).asin();
    let roll = (2.0 * (qw * qx + qy * qz)).atan2(1.0 - 2.0 * (qx * qx + qy * qy));

    let degrees = Vector3::new(yaw, pitch, roll).rad_to_deg();
    Ok(EulerAngles {
        yaw: degrees.x,
        pitch: degrees.y,
        roll: degrees.z,
    })
}

/// Inclination of the sensor reference axis relative to horizontal, in degrees
///
/// Uses the single rotation matrix entry `R31 = 2(qx·qz - qw·qy)`, clamped to
/// `[-1, 1]`. Returns 0° when the axis is horizontal and ±90° at the
/// vertical extremes.
pub fn inclination_angle(q: &Quaternion<f64>) -> Result<f64> {
    let q = checked(*q)?;
    let r31 = (2.0 * (q.i * q.k - q.w * q.j)).clamp(-1.0, 1.0);

    Ok(-(r31.acos() * RAD_TO_DEG - 90.0))
}
