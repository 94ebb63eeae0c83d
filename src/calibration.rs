//! Calibrated relative orientation for the orientation core
//!
//! The pointing direction is derived from three rotations:
//! the fixed device-to-calibration offset `TqC`, the inverse of the sensor
//! orientation captured at calibration time, and the live sensor
//! orientation. Composed as `TqC ∘ cal⁻¹ ∘ live`, the result is the
//! sensor's rotation since calibration, expressed in the device frame.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::error::Result;
use crate::math::{axis_angle_degrees, conjugate, multiply};
use crate::rotation::rotation_matrix;
use crate::types::{AxisRotation, ReferenceOffset};

/// Builds the constant reference quaternion `TqC = first ∘ second`
///
/// # Example
/// ```
/// use sensor_orientation::{ReferenceOffset, reference_quaternion};
///
/// let tqc = reference_quaternion(&ReferenceOffset::default());
/// assert!((tqc.norm() - 1.0).abs() < 1e-12);
/// ```
pub fn reference_quaternion(offset: &ReferenceOffset) -> UnitQuaternion<f64> {
    let first = axis_rotation(&offset.first);
    let second = axis_rotation(&offset.second);

    UnitQuaternion::new_normalize(multiply(&first, &second))
}

fn axis_rotation(rotation: &AxisRotation) -> Quaternion<f64> {
    axis_angle_degrees(rotation.axis.unit_vector(), rotation.angle)
}

/// Sensor rotation relative to its calibration-time orientation
///
/// Returns `tqs = (TqC ∘ conjugate(calibration)) ∘ live`.
pub fn relative_rotation(
    reference: &UnitQuaternion<f64>,
    calibration: &UnitQuaternion<f64>,
    live: &UnitQuaternion<f64>,
) -> UnitQuaternion<f64> {
    let inverse_calibration = conjugate(calibration.quaternion());
    let tqs = multiply(
        &multiply(reference.quaternion(), &inverse_calibration),
        live.quaternion(),
    );

    UnitQuaternion::new_normalize(tqs)
}

/// Pointing direction for a calibrated sensor
///
/// The first column of the relative rotation matrix, with every component
/// negated to match the sign convention of the consuming visualization.
/// A `live` or `calibration` quaternion with non-finite components fails
/// with [`OrientationError::DegenerateInput`](crate::OrientationError).
pub fn relative_direction(
    reference: &UnitQuaternion<f64>,
    calibration: &UnitQuaternion<f64>,
    live: &UnitQuaternion<f64>,
) -> Result<Vector3<f64>> {
    let tqs = relative_rotation(reference, calibration, live);
    let r = rotation_matrix(tqs.quaternion())?;

    Ok(-r.column(0).into_owned())
}
