// File: crates/lutgrid-render/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG with a background image.

use image::{Rgba, RgbaImage};
use lutgrid_render::{Backdrop, Extent, LineSeries, Origin, Plot, RenderOptions};

fn checker(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        if (x / 4 + y / 4) % 2 == 0 { Rgba([200, 60, 60, 255]) } else { Rgba([60, 60, 200, 255]) }
    })
}

#[test]
fn render_overlay_png() {
    let mut plot = Plot::new("Grid: smoke");
    plot.set_backdrop(Backdrop::new(checker(32, 32), Extent::new(0.0, 200.0, 0.0, 200.0), Origin::Lower));
    plot.add_series(LineSeries::new((0..400).map(|i| (i as f64, 2.0 * i as f64)).collect()));
    plot.autoscale();

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke_overlay.png");
    plot.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = plot.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (opts.width as u32, opts.height as u32));
}

#[test]
fn backdrop_pixels_land_inside_extent() {
    // Solid red image over the lower-left quarter of a 0..2 x 0..2 view.
    let red = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
    let mut plot = Plot::new("quarter");
    plot.set_backdrop(Backdrop::new(red, Extent::new(0.0, 1.0, 0.0, 1.0), Origin::Lower));
    plot.add_series(LineSeries::new(vec![(2.0, 2.0), (2.0, 2.0)]));
    plot.autoscale();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = plot.render_to_png_bytes(&opts).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    let l = opts.insets.left as f32;
    let t = opts.insets.top as f32;
    let r = (opts.width - opts.insets.right as i32) as f32;
    let b = (opts.height - opts.insets.bottom as i32) as f32;
    // Centre of the lower-left quarter of the plot area.
    let lower_left = img.get_pixel((l + (r - l) * 0.25) as u32, (b - (b - t) * 0.25) as u32);
    assert_eq!(lower_left.0, [255, 0, 0, 255]);
    // Centre of the upper-right quarter shows the background instead.
    let upper_right = img.get_pixel((l + (r - l) * 0.75) as u32, (t + (b - t) * 0.25) as u32);
    assert_ne!(upper_right.0, [255, 0, 0, 255]);
}

#[test]
fn lower_origin_puts_first_row_at_bottom() {
    // Row 0 green, remaining rows blue.
    let img = RgbaImage::from_fn(4, 4, |_, y| if y == 0 { Rgba([0, 255, 0, 255]) } else { Rgba([0, 0, 255, 255]) });
    let mut plot = Plot::new("origin");
    plot.set_backdrop(Backdrop::new(img, Extent::new(0.0, 1.0, 0.0, 1.0), Origin::Lower));
    plot.autoscale();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = plot.render_to_png_bytes(&opts).expect("render");
    let out = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    let cx = ((opts.insets.left as i32 + opts.width - opts.insets.right as i32) / 2) as u32;
    let t = opts.insets.top as f32;
    let b = (opts.height - opts.insets.bottom as i32) as f32;
    let near_bottom = out.get_pixel(cx, (b - (b - t) * 0.1) as u32);
    let near_top = out.get_pixel(cx, (t + (b - t) * 0.1) as u32);
    assert_eq!(near_bottom.0, [0, 255, 0, 255]);
    assert_eq!(near_top.0, [0, 0, 255, 255]);
}
