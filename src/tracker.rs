//! Stateful orientation tracker
//!
//! Owns the live sample and the calibration sample for one sensor stream
//! and turns each incoming quaternion into an [`OrientationOutput`].

use log::{debug, trace, warn};
use nalgebra::{UnitQuaternion, Vector3};

use crate::calibration::{reference_quaternion, relative_direction};
use crate::error::{OrientationError, Result};
use crate::euler::{euler_angles, inclination_angle};
use crate::math::{checked_unit, from_sdk_components};
use crate::types::{MotionOutput, MotionSample, OrientationOutput, OrientationSettings};

/// Orientation tracker for a single sensor stream
///
/// Holds the most recent sensor sample and an optional calibration sample.
/// The calibration stays until it is overwritten by another calibration
/// request; there is no way to clear it short of dropping the tracker.
///
/// # Example
/// ```
/// use sensor_orientation::{OrientationError, OrientationTracker};
///
/// let mut tracker = OrientationTracker::new();
/// assert_eq!(tracker.record_calibration(), Err(OrientationError::NoCalibrationData));
///
/// // Sensor SDK order: [qx, qy, qz, qw]
/// let output = tracker.on_sample([0.0, 0.0, 0.0, 1.0]).unwrap();
/// assert!(output.inclination_angle.abs() < 1e-9);
/// assert_eq!(output.direction_x(), 0.0); // uncalibrated
///
/// tracker.record_calibration().unwrap();
/// let output = tracker.on_sample([0.0, 0.0, 0.0, 1.0]).unwrap();
/// assert!((output.direction_y() + 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct OrientationTracker {
    settings: OrientationSettings,
    /// Constant device-to-calibration rotation `TqC`
    reference: UnitQuaternion<f64>,
    /// Most recently accepted sensor sample
    live_sample: Option<UnitQuaternion<f64>>,
    /// Sensor sample captured by the last calibration request
    calibration: Option<UnitQuaternion<f64>>,
}

impl OrientationTracker {
    /// Create a tracker with the default mounting geometry
    pub fn new() -> Self {
        Self::with_settings(OrientationSettings::default())
    }

    /// Create a tracker with specified settings
    pub fn with_settings(settings: OrientationSettings) -> Self {
        let reference = reference_quaternion(&settings.reference_offset);
        debug!(
            "orientation tracker created, reference quaternion = {:?}",
            reference.coords
        );

        Self {
            settings,
            reference,
            live_sample: None,
            calibration: None,
        }
    }

    /// Update settings, recomputing the reference rotation
    ///
    /// The live sample and any recorded calibration are kept.
    pub fn set_settings(&mut self, settings: OrientationSettings) {
        self.settings = settings;
        self.reference = reference_quaternion(&settings.reference_offset);
    }

    /// Get current settings
    pub fn settings(&self) -> OrientationSettings {
        self.settings
    }

    /// Process one sensor sample given in SDK order `[qx, qy, qz, qw]`
    ///
    /// The sample is normalized and becomes the live sample. A degenerate
    /// sample is rejected with [`OrientationError::DegenerateInput`] and
    /// leaves the live sample untouched.
    pub fn on_sample(&mut self, quaternion: [f32; 4]) -> Result<OrientationOutput> {
        let live = checked_unit(from_sdk_components(quaternion)).inspect_err(|_| {
            warn!("rejected degenerate sensor quaternion {quaternion:?}");
        })?;
        self.live_sample = Some(live);

        let output = OrientationOutput {
            euler: euler_angles(live.quaternion())?,
            inclination_angle: inclination_angle(live.quaternion())?,
            direction: self.compute_direction(&live)?,
        };
        trace!(
            "sample processed: inclination = {:.2}, direction = {:?}",
            output.inclination_angle, output.direction
        );

        Ok(output)
    }

    /// Process a sensor sample together with its motion channels
    pub fn on_motion_sample(
        &mut self,
        quaternion: [f32; 4],
        motion: MotionSample,
    ) -> Result<MotionOutput> {
        let orientation = self.on_sample(quaternion)?;
        let gyroscope = motion.gyroscope.cast::<f64>();

        Ok(MotionOutput {
            orientation,
            free_acceleration: motion.free_acceleration.cast::<f64>(),
            gyroscope,
            angular_rate_magnitude: gyroscope.norm(),
        })
    }

    /// Host entry point for an explicit calibration request
    pub fn on_calibration_requested(&mut self) -> Result<()> {
        self.record_calibration()
    }

    /// Capture the live sample as the calibration sample
    ///
    /// Overwrites any previous calibration. Fails with
    /// [`OrientationError::NoCalibrationData`] if no sample was ever received.
    pub fn record_calibration(&mut self) -> Result<()> {
        let Some(live) = self.live_sample else {
            warn!("calibration requested before any sensor sample was received");
            return Err(OrientationError::NoCalibrationData);
        };

        if self.calibration.is_some() {
            debug!("replacing previous calibration");
        }
        self.calibration = Some(live);
        debug!("calibration recorded: {:?}", live.coords);

        Ok(())
    }

    /// Calibrated pointing direction for `live`
    ///
    /// Returns the zero vector until a calibration has been recorded. Once
    /// calibrated, a `live` quaternion with non-finite components fails with
    /// [`OrientationError::DegenerateInput`].
    pub fn compute_direction(&self, live: &UnitQuaternion<f64>) -> Result<Vector3<f64>> {
        match &self.calibration {
            Some(calibration) => relative_direction(&self.reference, calibration, live)
                .inspect_err(|_| warn!("rejected degenerate direction query {:?}", live.coords)),
            None => Ok(Vector3::zeros()),
        }
    }

    /// Whether a calibration has been recorded
    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_some()
    }

    /// Sensor sample captured by the last calibration request
    pub fn calibration(&self) -> Option<UnitQuaternion<f64>> {
        self.calibration
    }

    /// Most recently accepted sensor sample
    pub fn live_sample(&self) -> Option<UnitQuaternion<f64>> {
        self.live_sample
    }

    /// Constant device-to-calibration rotation
    pub fn reference_quaternion(&self) -> UnitQuaternion<f64> {
        self.reference
    }
}

impl Default for OrientationTracker {
    fn default() -> Self {
        Self::new()
    }
}
