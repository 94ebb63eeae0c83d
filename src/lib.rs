//! Sensor Orientation - orientation and calibration math for wearable IMU streams
//!
//! This library turns the fused unit quaternions reported by a wearable
//! inertial sensor into signals a mobile UI can render directly:
//!
//! - Aerospace-sequence Euler angles (yaw, pitch, roll) in degrees
//! - An inclination angle of the sensor axis relative to horizontal
//! - A calibrated pointing direction relative to the holding device,
//!   derived from a one-shot calibration sample
//!
//! Device discovery, connection handling and payload decoding belong to the
//! host; this crate only sees quaternions and calibration requests.
//!
//! # Component order
//!
//! Sensor SDKs deliver quaternions as `[qx, qy, qz, qw]`. The tracker takes
//! that layout as input and converts to `nalgebra::Quaternion` (`w, i, j, k`)
//! at the boundary. The free conversion functions take `nalgebra`
//! quaternions and trust them to be unit length.
//!
//! # Quick Start
//!
//! ```rust
//! use sensor_orientation::OrientationTracker;
//!
//! let mut tracker = OrientationTracker::new();
//!
//! // Each sensor packet
//! let output = tracker.on_sample([0.0, 0.0, 0.0, 1.0]).unwrap();
//! println!("inclination: {:.1}°", output.inclination_angle);
//!
//! // User presses "calibrate" while holding the sensor in the reference pose
//! tracker.on_calibration_requested().unwrap();
//!
//! let output = tracker.on_sample([0.0, 0.0, 0.0, 1.0]).unwrap();
//! println!(
//!     "direction: ({:.2}, {:.2}, {:.2})",
//!     output.direction_x(),
//!     output.direction_y(),
//!     output.direction_z()
//! );
//! ```

mod calibration;
mod error;
mod euler;
mod math;
mod rotation;
mod shared;
mod tracker;
mod types;

pub use calibration::{reference_quaternion, relative_direction, relative_rotation};
pub use error::{OrientationError, Result};
pub use euler::{euler_angles, inclination_angle};
pub use math::{
    DEG_TO_RAD, DEGENERATE_NORM_SQUARED, QuaternionExt, RAD_TO_DEG, Vector3Ext,
    axis_angle_degrees, checked, checked_unit, conjugate, from_sdk_components, multiply,
    to_sdk_components,
};
pub use rotation::rotation_matrix;
pub use shared::SharedTracker;
pub use tracker::OrientationTracker;
pub use types::*;
