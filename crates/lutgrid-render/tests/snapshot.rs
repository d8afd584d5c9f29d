// File: crates/lutgrid-render/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic overlay (gradient backdrop + y = 2x line) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; the layout checks below still run.
// - Independently of the golden file, rendering twice must give identical pixels
//   and the backdrop, line and empty plot area must land where the view puts them.

use image::{Rgba, RgbaImage};
use lutgrid_render::{Backdrop, Extent, LineSeries, Origin, Plot, RenderOptions, Theme};

fn render_bytes() -> Vec<u8> {
    let gradient = RgbaImage::from_fn(20, 20, |x, y| Rgba([(x * 12) as u8, (y * 12) as u8, 128, 255]));
    let mut plot = Plot::new("Grid: golden");
    plot.set_backdrop(Backdrop::new(gradient, Extent::new(0.0, 200.0, 0.0, 200.0), Origin::Lower));
    plot.add_series(LineSeries::new((0..400).map(|i| (i as f64, 2.0 * i as f64)).collect()));
    plot.autoscale();

    let mut opts = RenderOptions::default();
    opts.width = 400;
    opts.height = 300;
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    plot.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_overlay() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("overlay.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn overlay_render_is_deterministic() {
    let a = image::load_from_memory(&render_bytes()).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode b").to_rgba8();
    assert_eq!(a.dimensions(), (400, 300));
    assert_eq!(a.as_raw(), b.as_raw(), "two renders of the same plot differ");
}

// View is x 0..399, y 0..798 over the plot area l=72, t=48, r=376, b=244.
#[test]
fn overlay_layout_places_backdrop_and_line() {
    let img = image::load_from_memory(&render_bytes()).expect("decode").to_rgba8();
    let bg = Theme::light().background;
    let bg = [bg.r(), bg.g(), bg.b(), 255];

    // outside the plot area nothing is drawn
    assert_eq!(img.get_pixel(10, 10).0, bg);

    // backdrop spans data 0..200 on both axes: screen x 72..224, y 195..244
    let p = img.get_pixel(110, 231).0;
    assert_ne!(p, bg);
    assert_eq!(p[2], 128, "backdrop pixel expected, got {p:?}");

    // y = 2x crosses screen (262, 121), clear of the backdrop and the grid
    let on_line = (259..266).flat_map(|x| (118..125).map(move |y| (x, y))).any(|(x, y)| {
        let p = img.get_pixel(x, y).0;
        p[2] as i32 - p[0] as i32 > 60
    });
    assert!(on_line, "no line stroke near (262, 121)");

    // right of the backdrop and below the line the plot area stays empty
    assert_eq!(img.get_pixel(340, 200).0, bg);
}
