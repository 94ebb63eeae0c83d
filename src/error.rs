//! Error type for orientation conversions and calibration

use thiserror::Error;

/// Failures reported by the orientation core
///
/// Neither variant is fatal to the host: both describe a single rejected
/// call and leave the tracker state as it was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrientationError {
    /// Calibration was requested before any sensor sample was received
    #[error("no sensor sample has been received yet, cannot calibrate")]
    NoCalibrationData,
    /// A zero-magnitude or non-finite quaternion was passed to a conversion
    #[error("degenerate quaternion (zero magnitude or non-finite component)")]
    DegenerateInput,
}

/// Convenience alias used throughout the crate
pub type Result<T> = core::result::Result<T, OrientationError>;
