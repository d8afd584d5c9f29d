// File: crates/lutgrid-render/tests/autoscale.rs
// Purpose: Validate autoscale over series points and the backdrop extent.

use image::RgbaImage;
use lutgrid_render::{Backdrop, Extent, LineSeries, Origin, Plot, ViewState};

#[test]
fn autoscale_covers_series_and_backdrop() {
    let mut plot = Plot::new("t");
    plot.add_series(LineSeries::new((0..400).map(|i| (i as f64, 2.0 * i as f64)).collect()));
    plot.set_backdrop(Backdrop::new(RgbaImage::new(2, 2), Extent::new(-10.0, 200.0, 0.0, 200.0), Origin::Lower));
    plot.autoscale();

    assert_eq!(plot.x_axis.min, -10.0);
    assert_eq!(plot.x_axis.max, 399.0);
    assert_eq!(plot.y_axis.min, 0.0);
    assert_eq!(plot.y_axis.max, 798.0);
}

#[test]
fn empty_plot_gets_unit_view() {
    let plot = Plot::new("empty");
    let v = ViewState::from_plot(&plot);
    assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (0.0, 1.0, 0.0, 1.0));
}

#[test]
fn degenerate_ranges_are_widened() {
    let mut plot = Plot::new("flat");
    plot.add_series(LineSeries::new(vec![(3.0, 5.0), (3.0, 5.0)]));
    let v = ViewState::from_plot(&plot);
    assert_eq!((v.x_min, v.x_max), (3.0, 4.0));
    assert_eq!((v.y_min, v.y_max), (5.0, 6.0));
}
