mod common;

use common::synthetic::{line_channel, slanted_lane_logits};
use lane_mask::image::ImageF32;
use lane_mask::{LaneMaskPipeline, LaneParams};

#[test]
fn diagonal_channel_produces_diagonal_mask() {
    let _ = env_logger::builder().is_test(true).try_init();
    let channel = line_channel(100, 100, (0, 0), (50, 50), 200.0 / 255.0);
    let pipeline = LaneMaskPipeline::new(LaneParams::default());
    let line = pipeline
        .process_channel(&channel)
        .expect("pipeline should succeed");

    assert_eq!(line.mask.dimensions(), (100, 100));
    let model = line.model.expect("49 rows are enough to fit");
    assert!((model.slope - 1.0).abs() < 1e-3, "slope={}", model.slope);
    assert!(model.intercept.abs() < 1e-2, "intercept={}", model.intercept);

    let mut lit = 0usize;
    for (x, y, px) in line.mask.enumerate_pixels() {
        if px[0] == 255 {
            lit += 1;
            let dist = (x as f32 - y as f32).abs() / std::f32::consts::SQRT_2;
            assert!(dist <= 5.0, "pixel ({x}, {y}) is {dist:.2} px off the diagonal");
        }
    }
    assert!(lit > 100, "expected a visible stroke, got {lit} pixels");
    assert_eq!(line.mask.get_pixel(25, 25)[0], 255);
    assert_eq!(line.mask.get_pixel(80, 80)[0], 0);
}

#[test]
fn zero_channel_produces_black_mask_of_same_shape() {
    let pipeline = LaneMaskPipeline::default();
    let masks = pipeline
        .masks(&[ImageF32::new(64, 32), ImageF32::new(64, 32)])
        .unwrap();
    assert_eq!(masks.len(), 2);
    for mask in masks {
        assert_eq!(mask.dimensions(), (64, 32));
        assert!(mask.as_raw().iter().all(|&v| v == 0));
    }
}

#[test]
fn logits_frame_yields_one_mask_per_selected_line() {
    let _ = env_logger::builder().is_test(true).try_init();
    let logits = slanted_lane_logits(5, 208, 976, 2, 300, 4);
    let pipeline = LaneMaskPipeline::new(LaneParams::default());
    let report = pipeline
        .process_logits_with_diagnostics(logits.view())
        .expect("pipeline should succeed");

    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.trace.lanes.len(), 2);
    let input = report.trace.input.as_ref().unwrap();
    assert_eq!((input.channels, input.height, input.width), (5, 208, 976));

    let left = &report.lines[0];
    assert_eq!(left.mask.dimensions(), (448, 208));
    let model = left.model.expect("lane band spans every row");
    let expected = 448.0 / 976.0;
    assert!(
        (model.slope - expected).abs() < 0.05,
        "slope={} expected≈{expected}",
        model.slope
    );
    assert!(!left.fitted.is_empty());

    let right = &report.lines[1];
    assert!(right.is_blank());
    assert!(right.mask.as_raw().iter().all(|&v| v == 0));
    assert!(!report.trace.lanes[1].fitted());
}

#[test]
fn repeated_runs_are_bit_identical() {
    let channel = line_channel(120, 80, (30, 10), (70, 75), 0.9);
    let pipeline = LaneMaskPipeline::default();
    let a = pipeline.process_channel(&channel).unwrap();
    let b = pipeline.process_channel(&channel).unwrap();
    assert_eq!(a.polyline, b.polyline);
    assert_eq!(a.mask.as_raw(), b.mask.as_raw());
}

#[test]
fn report_serializes_to_json() {
    let channel = line_channel(60, 60, (10, 0), (40, 59), 1.0);
    let report = LaneMaskPipeline::default()
        .process_with_diagnostics(&[channel])
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    let lane = &json["trace"]["lanes"][0];
    assert_eq!(lane["width"], 60);
    assert!(lane["centerlinePoints"].as_u64().unwrap() > 5);
    assert!(lane["model"]["slope"].is_number());
    assert!(json.get("lines").is_none());
}
