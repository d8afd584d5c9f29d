// File: crates/lutgrid-render/tests/overlay.rs
// Purpose: Validate the overlay sink: missing background fails, present background writes a PNG.

use image::{Rgb, RgbImage, RgbaImage};
use lutgrid_core::VisualizationSink;
use lutgrid_render::{OverlayOptions, OverlaySink};
use std::path::PathBuf;

fn demo_series() -> Vec<(f64, f64)> {
    (0..400).map(|i| (i as f64, 2.0 * i as f64)).collect()
}

#[test]
fn missing_background_is_fatal() {
    let mut opts = OverlayOptions::default();
    opts.background = PathBuf::from("target/test_out/no_such_background.jpeg");
    opts.out_dir = PathBuf::from("target/test_out/overlay_missing");
    let mut sink = OverlaySink::new(opts);

    let err = sink.render("g", &demo_series()).unwrap_err();
    assert!(format!("{err:#}").contains("no_such_background.jpeg"));
    assert!(sink.last_output.is_none());
}

#[test]
fn renders_grid_png_next_to_background() {
    let dir = PathBuf::from("target/test_out/overlay_ok");
    std::fs::create_dir_all(&dir).unwrap();
    let bg = dir.join("background.jpeg");
    RgbImage::from_pixel(16, 16, Rgb([90, 140, 90])).save(&bg).unwrap();

    let mut opts = OverlayOptions::default();
    opts.background = bg;
    opts.out_dir = dir.clone();
    let mut sink = OverlaySink::new(opts);

    sink.render("pump curve", &demo_series()).expect("render");
    let out = sink.last_output.clone().expect("output recorded");
    assert_eq!(out, dir.join("grid_pump_curve.png"));
    let bytes = std::fs::read(&out).expect("png written");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn plot_title_and_view_follow_inputs() {
    let dir = PathBuf::from("target/test_out/overlay_plot");
    std::fs::create_dir_all(&dir).unwrap();
    let bg = dir.join("bg.png");
    RgbaImage::new(4, 4).save(&bg).unwrap();

    let mut opts = OverlayOptions::default();
    opts.background = bg;
    let sink = OverlaySink::new(opts);
    let plot = sink.build_plot("abc", &demo_series()).expect("plot");
    assert_eq!(plot.title, "Grid: abc");
    assert_eq!((plot.x_axis.min, plot.x_axis.max), (0.0, 399.0));
    assert_eq!((plot.y_axis.min, plot.y_axis.max), (0.0, 798.0));
}
