use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use sensor_orientation::{
    Axis, AxisRotation, OrientationError, OrientationSettings, OrientationTracker,
    QuaternionExt, ReferenceOffset, conjugate, euler_angles, inclination_angle, multiply,
    rotation_matrix,
};

const EPSILON: f64 = 1e-6;
const IDENTITY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Expected direction for an identity calibration with the default
/// X(-45°) ∘ Y(-45°) reference offset
const IDENTITY_DIRECTION: [f64; 3] = [-core::f64::consts::FRAC_1_SQRT_2, -0.5, -0.5];

fn random_unit_quaternion(rng: &mut Pcg64) -> UnitQuaternion<f64> {
    loop {
        let q = Quaternion::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if q.norm() > 0.1 {
            return UnitQuaternion::new_normalize(q);
        }
    }
}

fn assert_direction(actual: Vector3<f64>, expected: [f64; 3]) {
    let expected = Vector3::from(expected);
    assert!(
        (actual - expected).norm() < EPSILON,
        "direction {:?} != {:?}",
        actual,
        expected
    );
}

/// q ∘ q* is the identity for unit quaternions
#[test]
fn test_multiply_by_conjugate_is_identity() {
    let mut rng = Pcg64::seed_from_u64(7);

    for _ in 0..1000 {
        let q = random_unit_quaternion(&mut rng).into_inner();
        let product = multiply(&q, &conjugate(&q));

        assert!((product.w - 1.0).abs() < 1e-12);
        assert!(product.imag().norm() < 1e-12);

        let method_form = q.compose(&q.conjugated());
        assert_eq!(method_form, product);
    }
}

/// Conversions never return NaN, including slightly over-unit input
#[test]
fn test_conversions_never_nan() {
    let mut rng = Pcg64::seed_from_u64(11);

    for _ in 0..1000 {
        let q = random_unit_quaternion(&mut rng).into_inner();
        // Push the magnitude just past 1 to mimic floating-point overshoot
        let overshoot = q * (1.0 + 1e-7);

        for input in [q, overshoot] {
            let euler = euler_angles(&input).unwrap();
            assert!(!euler.yaw.is_nan() && !euler.pitch.is_nan() && !euler.roll.is_nan());
            assert!((-90.0..=90.0).contains(&euler.pitch));

            let inclination = inclination_angle(&input).unwrap();
            assert!(!inclination.is_nan());
            assert!((-90.0..=90.0).contains(&inclination));
        }
    }
}

/// Identity quaternion maps to level orientation
#[test]
fn test_identity_scenario() {
    let mut tracker = OrientationTracker::new();
    let output = tracker.on_sample(IDENTITY).unwrap();

    assert!(output.yaw().abs() < EPSILON);
    assert!(output.pitch().abs() < EPSILON);
    assert!(output.roll().abs() < EPSILON);
    assert!(output.inclination_angle.abs() < EPSILON);
}

/// Direction stays zero until a calibration is recorded
#[test]
fn test_uncalibrated_direction() {
    let mut rng = Pcg64::seed_from_u64(3);
    let mut tracker = OrientationTracker::new();

    for _ in 0..100 {
        let q = random_unit_quaternion(&mut rng);
        let output = tracker.on_sample(q.sdk_components()).unwrap();
        assert_eq!(output.direction, Vector3::zeros());
        assert_eq!(tracker.compute_direction(&q), Ok(Vector3::zeros()));
    }
    assert!(!tracker.is_calibrated());
}

/// Calibration before any sample fails
#[test]
fn test_calibration_before_sample() {
    let mut tracker = OrientationTracker::new();
    assert_eq!(
        tracker.on_calibration_requested(),
        Err(OrientationError::NoCalibrationData)
    );

    // A rejected sample does not count as data
    assert!(tracker.on_sample([0.0; 4]).is_err());
    assert_eq!(
        tracker.on_calibration_requested(),
        Err(OrientationError::NoCalibrationData)
    );
}

/// Same state and input give the same direction
#[test]
fn test_direction_is_idempotent() {
    let mut rng = Pcg64::seed_from_u64(5);
    let mut tracker = OrientationTracker::new();

    let calibration = random_unit_quaternion(&mut rng);
    tracker.on_sample(calibration.sdk_components()).unwrap();
    tracker.record_calibration().unwrap();

    for _ in 0..100 {
        let q = random_unit_quaternion(&mut rng);
        let first = tracker.compute_direction(&q).unwrap();
        let second = tracker.compute_direction(&q).unwrap();
        assert_eq!(first, second);
    }
}

/// Calibrate with identity, query identity
#[test]
fn test_identity_calibration_scenario() {
    let mut tracker = OrientationTracker::new();
    tracker.on_sample(IDENTITY).unwrap();
    tracker.on_calibration_requested().unwrap();

    let output = tracker.on_sample(IDENTITY).unwrap();
    assert_direction(output.direction, IDENTITY_DIRECTION);
}

/// Calibrate with A, query A: the calibration cancels the live sample
#[test]
fn test_calibration_cancels_sample() {
    let mut rng = Pcg64::seed_from_u64(13);

    for _ in 0..200 {
        let mut tracker = OrientationTracker::new();
        let a = random_unit_quaternion(&mut rng).sdk_components();

        tracker.on_sample(a).unwrap();
        tracker.record_calibration().unwrap();
        let output = tracker.on_sample(a).unwrap();

        assert_direction(output.direction, IDENTITY_DIRECTION);
    }
}

/// The direction is always a unit vector once calibrated
#[test]
fn test_calibrated_direction_is_unit() {
    let mut rng = Pcg64::seed_from_u64(17);
    let mut tracker = OrientationTracker::new();
    tracker
        .on_sample(random_unit_quaternion(&mut rng).sdk_components())
        .unwrap();
    tracker.record_calibration().unwrap();

    for _ in 0..500 {
        let output = tracker
            .on_sample(random_unit_quaternion(&mut rng).sdk_components())
            .unwrap();
        assert!((output.direction.norm() - 1.0).abs() < EPSILON);
    }
}

/// Direction equals the negated first column of R(TqC ∘ cal* ∘ live)
#[test]
fn test_direction_matches_rotation_matrix() {
    let mut rng = Pcg64::seed_from_u64(19);
    let mut tracker = OrientationTracker::new();

    let calibration = random_unit_quaternion(&mut rng);
    tracker.on_sample(calibration.sdk_components()).unwrap();
    tracker.record_calibration().unwrap();
    let calibration = tracker.calibration().unwrap();
    let reference = tracker.reference_quaternion();

    for _ in 0..100 {
        let live = random_unit_quaternion(&mut rng);
        let tqs = multiply(
            &multiply(reference.quaternion(), &conjugate(calibration.quaternion())),
            live.quaternion(),
        );
        let r = rotation_matrix(&tqs).unwrap();
        let expected = [-r[(0, 0)], -r[(1, 0)], -r[(2, 0)]];

        assert_direction(tracker.compute_direction(&live).unwrap(), expected);
    }
}

/// Rotating the sensor 90° about the reference Z axis after calibration
#[test]
fn test_direction_after_known_rotation() {
    let settings = OrientationSettings {
        reference_offset: ReferenceOffset {
            first: AxisRotation {
                axis: Axis::Z,
                angle: 0.0,
            },
            second: AxisRotation {
                axis: Axis::Z,
                angle: 0.0,
            },
        },
    };
    let mut tracker = OrientationTracker::with_settings(settings);
    tracker.on_sample(IDENTITY).unwrap();
    tracker.record_calibration().unwrap();

    let quarter_turn = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 90f64.to_radians());
    let output = tracker.on_sample(quarter_turn.sdk_components()).unwrap();

    assert_direction(output.direction, [0.0, -1.0, 0.0]);
    assert!((output.yaw() - 90.0).abs() < 1e-4);
}

/// Rotation matrix agrees with nalgebra for random unit quaternions
#[test]
fn test_rotation_matrix_consistency() {
    let mut rng = Pcg64::seed_from_u64(23);

    for _ in 0..500 {
        let q = random_unit_quaternion(&mut rng);
        let ours = rotation_matrix(q.quaternion()).unwrap();
        let reference = q.to_rotation_matrix().into_inner();

        assert!((ours - reference).norm() < 1e-10);
    }
}
