//! Settings and typed outputs for the orientation core

use nalgebra::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Principal axis of the reference frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis
    pub fn unit_vector(self) -> Vector3<f64> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

/// A fixed rotation about one principal axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisRotation {
    /// Axis of rotation
    pub axis: Axis,
    /// Rotation angle in degrees (right-handed)
    pub angle: f64,
}

/// Mounting geometry between the holding device and its calibration frame
///
/// The two rotations are composed as `first ∘ second` into the constant
/// reference quaternion, so `second` is applied first.
///
/// # Example
/// ```
/// use sensor_orientation::{Axis, AxisRotation, ReferenceOffset};
///
/// let offset = ReferenceOffset {
///     first: AxisRotation { axis: Axis::Z, angle: 90.0 },
///     ..Default::default()
/// };
/// assert_eq!(offset.second.axis, Axis::Y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceOffset {
    /// Outer rotation of the composition
    pub first: AxisRotation,
    /// Inner rotation of the composition
    pub second: AxisRotation,
}

impl Default for ReferenceOffset {
    fn default() -> Self {
        Self {
            first: AxisRotation {
                axis: Axis::X,
                angle: -45.0,
            },
            second: AxisRotation {
                axis: Axis::Y,
                angle: -45.0,
            },
        }
    }
}

/// Orientation tracker settings
///
/// # Example
/// ```
/// use sensor_orientation::{OrientationSettings, OrientationTracker};
///
/// let settings = OrientationSettings::default();
/// let tracker = OrientationTracker::with_settings(settings);
/// assert!(!tracker.is_calibrated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationSettings {
    /// Fixed rotation from the holding device to its calibration frame
    pub reference_offset: ReferenceOffset,
}

/// Aerospace-sequence Euler angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EulerAngles {
    /// Rotation about Z, range -180° to +180°
    pub yaw: f64,
    /// Rotation about Y, range -90° to +90°
    pub pitch: f64,
    /// Rotation about X, range -180° to +180°
    pub roll: f64,
}

/// Everything derived from one sensor sample
///
/// Replaces the string-keyed event map of the host boundary with named
/// fields. `direction` is the zero vector until a calibration is recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationOutput {
    pub euler: EulerAngles,
    /// Inclination relative to horizontal in degrees
    pub inclination_angle: f64,
    /// Calibrated pointing direction in the reference frame
    pub direction: Vector3<f64>,
}

impl OrientationOutput {
    /// Yaw in degrees
    pub fn yaw(&self) -> f64 {
        self.euler.yaw
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f64 {
        self.euler.pitch
    }

    /// Roll in degrees
    pub fn roll(&self) -> f64 {
        self.euler.roll
    }

    /// X component of the pointing direction
    pub fn direction_x(&self) -> f64 {
        self.direction.x
    }

    /// Y component of the pointing direction
    pub fn direction_y(&self) -> f64 {
        self.direction.y
    }

    /// Z component of the pointing direction
    pub fn direction_z(&self) -> f64 {
        self.direction.z
    }
}

/// Non-orientation channels that travel with each sensor packet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotionSample {
    /// Acceleration with gravity removed, in m/s²
    pub free_acceleration: Vector3<f32>,
    /// Angular rate in degrees per second
    pub gyroscope: Vector3<f32>,
}

/// Orientation output plus the relayed motion channels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotionOutput {
    pub orientation: OrientationOutput,
    pub free_acceleration: Vector3<f64>,
    pub gyroscope: Vector3<f64>,
    /// Magnitude of the angular rate vector in degrees per second
    pub angular_rate_magnitude: f64,
}
