//! Replay of a recorded sensor stream
//!
//! Feeds `testdata/quaternion_stream.csv` through an [`OrientationTracker`],
//! calibrating on the first sample the way a user would press "calibrate"
//! while holding the sensor in the reference pose. The derived signals are
//! plotted to `replay_plots.png`:
//! 1. Euler angles (yaw, pitch, roll)
//! 2. Inclination angle against the recorded reference
//! 3. Calibrated direction vector components
//!
//! Run with: `cargo run --example replay`

use nalgebra::Vector3;
use plotters::prelude::*;
use sensor_orientation::{MotionSample, OrientationOutput, OrientationTracker};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct StreamRecord {
    #[serde(rename = "Time (s)")]
    time: f32,
    #[serde(rename = "Quat X")]
    quat_x: f32,
    #[serde(rename = "Quat Y")]
    quat_y: f32,
    #[serde(rename = "Quat Z")]
    quat_z: f32,
    #[serde(rename = "Quat W")]
    quat_w: f32,
    #[serde(rename = "FreeAcc X (m/s2)")]
    free_acc_x: f32,
    #[serde(rename = "FreeAcc Y (m/s2)")]
    free_acc_y: f32,
    #[serde(rename = "FreeAcc Z (m/s2)")]
    free_acc_z: f32,
    #[serde(rename = "Gyroscope X (deg/s)")]
    gyro_x: f32,
    #[serde(rename = "Gyroscope Y (deg/s)")]
    gyro_y: f32,
    #[serde(rename = "Gyroscope Z (deg/s)")]
    gyro_z: f32,
    #[serde(rename = "Inclination (deg)")]
    inclination: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("Orientation replay - Euler, inclination and calibrated direction");

    let mut reader = csv::Reader::from_path("testdata/quaternion_stream.csv")?;
    let mut records = Vec::new();

    for result in reader.deserialize() {
        let record: StreamRecord = result?;
        records.push(record);
    }

    if records.is_empty() {
        return Err("recording is empty".into());
    }

    let mut tracker = OrientationTracker::new();
    let mut outputs: Vec<OrientationOutput> = Vec::with_capacity(records.len());

    println!("Processing {} sensor samples...", records.len());

    for (i, record) in records.iter().enumerate() {
        let quaternion = [record.quat_x, record.quat_y, record.quat_z, record.quat_w];
        let motion = MotionSample {
            free_acceleration: Vector3::new(record.free_acc_x, record.free_acc_y, record.free_acc_z),
            gyroscope: Vector3::new(record.gyro_x, record.gyro_y, record.gyro_z),
        };

        let output = tracker.on_motion_sample(quaternion, motion)?;

        // Calibrate in the starting pose
        if i == 0 {
            tracker.on_calibration_requested()?;
        }

        if i % 30 == 0 {
            println!(
                "t={:.2}s: inclination={:.1}° direction=({:.2}, {:.2}, {:.2}) |ω|={:.1}°/s",
                record.time,
                output.orientation.inclination_angle,
                output.orientation.direction_x(),
                output.orientation.direction_y(),
                output.orientation.direction_z(),
                output.angular_rate_magnitude
            );
        }

        outputs.push(output.orientation);
    }

    println!("Generating plots...");
    create_plots(&records, &outputs)?;

    println!("✓ Plots saved to replay_plots.png");
    Ok(())
}

/// Three stacked panels sharing the time axis
fn create_plots(
    records: &[StreamRecord],
    outputs: &[OrientationOutput],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new("replay_plots.png", (1000, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((3, 1));
    let time_range = records[0].time..records[records.len() - 1].time;

    // 1. Euler angles
    let mut euler_chart = ChartBuilder::on(&panels[0])
        .margin(10)
        .x_label_area_size(0)
        .y_label_area_size(50)
        .build_cartesian_2d(time_range.clone(), -180f32..180f32)?;

    euler_chart.configure_mesh().y_desc("Degrees").draw()?;

    let euler_series: [(&str, RGBColor, fn(&OrientationOutput) -> f64); 3] = [
        ("Yaw", BLUE, |o| o.yaw()),
        ("Pitch", GREEN, |o| o.pitch()),
        ("Roll", RED, |o| o.roll()),
    ];
    for (label, color, value) in euler_series {
        euler_chart
            .draw_series(LineSeries::new(
                records
                    .iter()
                    .zip(outputs.iter())
                    .map(|(r, o)| (r.time, value(o) as f32)),
                &color,
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));
    }
    euler_chart.configure_series_labels().draw()?;

    // 2. Inclination
    let mut inclination_chart = ChartBuilder::on(&panels[1])
        .margin(10)
        .x_label_area_size(0)
        .y_label_area_size(50)
        .build_cartesian_2d(time_range.clone(), -90f32..90f32)?;

    inclination_chart.configure_mesh().y_desc("Degrees").draw()?;

    inclination_chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .zip(outputs.iter())
                .map(|(r, o)| (r.time, o.inclination_angle as f32)),
            &MAGENTA,
        ))?
        .label("Inclination")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], MAGENTA));

    inclination_chart
        .draw_series(LineSeries::new(
            records.iter().map(|r| (r.time, r.inclination as f32)),
            &BLACK.mix(0.4),
        ))?
        .label("Recorded reference")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLACK.mix(0.4)));

    inclination_chart.configure_series_labels().draw()?;

    // 3. Direction vector
    let mut direction_chart = ChartBuilder::on(&panels[2])
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(time_range, -1.1f32..1.1f32)?;

    direction_chart.configure_mesh().x_desc("Time (s)").draw()?;

    let direction_series: [(&str, RGBColor, fn(&OrientationOutput) -> f64); 3] = [
        ("Direction X", BLUE, |o| o.direction_x()),
        ("Direction Y", GREEN, |o| o.direction_y()),
        ("Direction Z", RED, |o| o.direction_z()),
    ];
    for (label, color, value) in direction_series {
        direction_chart
            .draw_series(LineSeries::new(
                records
                    .iter()
                    .zip(outputs.iter())
                    .map(|(r, o)| (r.time, value(o) as f32)),
                &color,
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));
    }
    direction_chart.configure_series_labels().draw()?;

    root.present()?;
    Ok(())
}
