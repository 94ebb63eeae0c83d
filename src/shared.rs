//! Thread-safe handle around [`OrientationTracker`]
//!
//! Sensor callbacks and calibration requests usually arrive on different
//! threads. Both the live sample and the calibration sample sit behind one
//! lock, so a calibration request always captures a complete sample.

use std::sync::{Arc, Mutex, MutexGuard};

use nalgebra::{UnitQuaternion, Vector3};

use crate::error::Result;
use crate::tracker::OrientationTracker;
use crate::types::{MotionOutput, MotionSample, OrientationOutput, OrientationSettings};

/// Cloneable, lock-protected tracker handle
///
/// # Example
/// ```
/// use std::thread;
/// use sensor_orientation::SharedTracker;
///
/// let tracker = SharedTracker::new();
/// let sensor = tracker.clone();
///
/// thread::spawn(move || {
///     sensor.on_sample([0.0, 0.0, 0.0, 1.0]).unwrap();
/// })
/// .join()
/// .unwrap();
///
/// tracker.on_calibration_requested().unwrap();
/// assert!(tracker.is_calibrated());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedTracker {
    inner: Arc<Mutex<OrientationTracker>>,
}

impl SharedTracker {
    /// Create a handle around a tracker with default settings
    pub fn new() -> Self {
        Self::from_tracker(OrientationTracker::new())
    }

    /// Create a handle around a tracker with specified settings
    pub fn with_settings(settings: OrientationSettings) -> Self {
        Self::from_tracker(OrientationTracker::with_settings(settings))
    }

    /// Wrap an existing tracker
    pub fn from_tracker(tracker: OrientationTracker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Access the tracker immutably under the lock
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrientationTracker) -> R,
    {
        let guard = self.lock();
        f(&*guard)
    }

    /// Access the tracker mutably under the lock
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrientationTracker) -> R,
    {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Process one sensor sample under the lock
    pub fn on_sample(&self, quaternion: [f32; 4]) -> Result<OrientationOutput> {
        self.with_mut(|tracker| tracker.on_sample(quaternion))
    }

    /// Process a sensor sample with its motion channels under the lock
    pub fn on_motion_sample(
        &self,
        quaternion: [f32; 4],
        motion: MotionSample,
    ) -> Result<MotionOutput> {
        self.with_mut(|tracker| tracker.on_motion_sample(quaternion, motion))
    }

    /// Capture the current live sample as the calibration sample
    pub fn on_calibration_requested(&self) -> Result<()> {
        self.with_mut(OrientationTracker::record_calibration)
    }

    /// Calibrated pointing direction for `live`
    pub fn compute_direction(&self, live: &UnitQuaternion<f64>) -> Result<Vector3<f64>> {
        self.with(|tracker| tracker.compute_direction(live))
    }

    /// Whether a calibration has been recorded
    pub fn is_calibrated(&self) -> bool {
        self.with(OrientationTracker::is_calibrated)
    }

    /// Copy of the tracker state at this instant
    pub fn snapshot(&self) -> OrientationTracker {
        self.with(OrientationTracker::clone)
    }

    // Every tracker operation leaves the state consistent before it can
    // panic, so a poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, OrientationTracker> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
