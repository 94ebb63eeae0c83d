//! Quaternion algebra and nalgebra extensions
//!
//! Sensor samples arrive in the SDK component order `[qx, qy, qz, qw]`.
//! Everything inside the crate works on `nalgebra::Quaternion<f64>`, whose
//! accessors are `w`, `i`, `j`, `k`; the conversion happens once, in
//! [`from_sdk_components`].

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::error::{OrientationError, Result};

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// Squared norms at or below this are treated as a zero quaternion
pub const DEGENERATE_NORM_SQUARED: f64 = 1e-12;

/// Hamilton product `a ∘ b`
///
/// Non-commutative. Read as a composition of rotations, `b` is applied
/// first and `a` second, so `rotation_matrix(a ∘ b) = R(a) · R(b)`.
pub fn multiply(a: &Quaternion<f64>, b: &Quaternion<f64>) -> Quaternion<f64> {
    Quaternion::new(
        a.w * b.w - a.i * b.i - a.j * b.j - a.k * b.k,
        a.w * b.i + a.i * b.w + a.j * b.k - a.k * b.j,
        a.w * b.j - a.i * b.k + a.j * b.w + a.k * b.i,
        a.w * b.k + a.i * b.j - a.j * b.i + a.k * b.w,
    )
}

/// Conjugate: vector part negated, scalar kept
///
/// Equal to the inverse for unit quaternions.
pub fn conjugate(q: &Quaternion<f64>) -> Quaternion<f64> {
    Quaternion::new(q.w, -q.i, -q.j, -q.k)
}

/// Rejects zero-magnitude and non-finite quaternions
///
/// The quaternion is returned unchanged; no normalization happens here.
pub fn checked(q: Quaternion<f64>) -> Result<Quaternion<f64>> {
    let finite = q.w.is_finite() && q.i.is_finite() && q.j.is_finite() && q.k.is_finite();
    if !finite || q.norm_squared() <= DEGENERATE_NORM_SQUARED {
        return Err(OrientationError::DegenerateInput);
    }
    Ok(q)
}

/// Degenerate guard followed by normalization
pub fn checked_unit(q: Quaternion<f64>) -> Result<UnitQuaternion<f64>> {
    checked(q).map(UnitQuaternion::new_normalize)
}

/// Builds a quaternion from the sensor SDK layout `[qx, qy, qz, qw]`
///
/// # Example
/// ```
/// use sensor_orientation::from_sdk_components;
///
/// let q = from_sdk_components([0.0, 0.0, 0.0, 1.0]);
/// assert_eq!(q.w, 1.0);
/// assert_eq!(q.i, 0.0);
/// ```
pub fn from_sdk_components(raw: [f32; 4]) -> Quaternion<f64> {
    let [x, y, z, w] = raw;
    Quaternion::new(w as f64, x as f64, y as f64, z as f64)
}

/// Inverse of [`from_sdk_components`]
pub fn to_sdk_components(q: &Quaternion<f64>) -> [f32; 4] {
    [q.i as f32, q.j as f32, q.k as f32, q.w as f32]
}

/// Rotation of `angle_degrees` about a unit axis
pub fn axis_angle_degrees(axis: Vector3<f64>, angle_degrees: f64) -> Quaternion<f64> {
    let half = 0.5 * angle_degrees * DEG_TO_RAD;
    let (sin, cos) = half.sin_cos();
    Quaternion::new(cos, axis.x * sin, axis.y * sin, axis.z * sin)
}

/// Extension trait for Vector3 operations
pub trait Vector3Ext {
    /// Convert radians to degrees
    fn rad_to_deg(&self) -> Vector3<f64>;
}

impl Vector3Ext for Vector3<f64> {
    fn rad_to_deg(&self) -> Vector3<f64> {
        *self * RAD_TO_DEG
    }
}

/// Extension trait exposing the crate's algebra as methods
pub trait QuaternionExt {
    /// Hamilton product `self ∘ rhs`
    fn compose(&self, rhs: &Quaternion<f64>) -> Quaternion<f64>;

    /// Conjugate (inverse for unit quaternions)
    fn conjugated(&self) -> Quaternion<f64>;

    /// Components in the sensor SDK layout `[qx, qy, qz, qw]`
    fn sdk_components(&self) -> [f32; 4];
}

impl QuaternionExt for Quaternion<f64> {
    fn compose(&self, rhs: &Quaternion<f64>) -> Quaternion<f64> {
        multiply(self, rhs)
    }

    fn conjugated(&self) -> Quaternion<f64> {
        conjugate(self)
    }

    fn sdk_components(&self) -> [f32; 4] {
        to_sdk_components(self)
    }
}
