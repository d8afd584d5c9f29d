// File: crates/lutgrid-render/src/plot.rs
// Summary: Plot struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{format_tick, PlotAxis};
use crate::backdrop::Backdrop;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels and tick labels. Off for pixel-exact comparisons.
    pub draw_labels: bool,
    pub tick_count: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            tick_count: 5,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LineSeries {
    pub points: Vec<(f64, f64)>,
    /// Overrides the theme stroke color.
    pub color: Option<skia::Color>,
}

impl LineSeries {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points, color: None }
    }
}

pub struct Plot {
    pub title: String,
    pub series: Vec<LineSeries>,
    pub x_axis: PlotAxis,
    pub y_axis: PlotAxis,
    pub backdrop: Option<Backdrop>,
}

impl Plot {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            x_axis: PlotAxis::new("x", 0.0, 1.0),
            y_axis: PlotAxis::new("y", 0.0, 1.0),
            backdrop: None,
        }
    }

    pub fn add_series(&mut self, series: LineSeries) {
        self.series.push(series);
    }

    pub fn set_backdrop(&mut self, backdrop: Backdrop) {
        self.backdrop = Some(backdrop);
    }

    /// Fit both axes to the series and the backdrop extent.
    pub fn autoscale(&mut self) {
        ViewState::from_plot(self).apply_to_plot(self);
    }

    /// Render the plot to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);

        let area = PlotArea {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32) as f32,
            b: (opts.height - opts.insets.bottom as i32) as f32,
            x: &self.x_axis,
            y: &self.y_axis,
        };

        draw_grid(canvas, &area, theme, opts.tick_count);

        canvas.save();
        canvas.clip_rect(area.rect(), None, true);
        if let Some(backdrop) = &self.backdrop {
            draw_backdrop(canvas, &area, backdrop)?;
        }
        for s in &self.series {
            draw_line_series(canvas, &area, theme, s);
        }
        canvas.restore();

        draw_axes(canvas, &area, theme);
        if opts.draw_labels {
            draw_labels(canvas, &area, theme, opts.tick_count, &self.title, opts.width);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the plot to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

struct PlotArea<'a> {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    x: &'a PlotAxis,
    y: &'a PlotAxis,
}

impl PlotArea<'_> {
    fn rect(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.l, self.t, self.r, self.b)
    }

    fn sx(&self, x: f64) -> f32 {
        let span = (self.x.max - self.x.min).max(1e-9);
        self.l + ((x - self.x.min) / span) as f32 * (self.r - self.l)
    }

    fn sy(&self, y: f64) -> f32 {
        let span = (self.y.max - self.y.min).max(1e-9);
        self.b - ((y - self.y.min) / span) as f32 * (self.b - self.t)
    }
}

fn draw_grid(canvas: &skia::Canvas, area: &PlotArea, theme: &Theme, ticks: usize) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for x in area.x.ticks(ticks) {
        let px = area.sx(x);
        canvas.draw_line((px, area.t), (px, area.b), &paint);
    }
    for y in area.y.ticks(ticks) {
        let py = area.sy(y);
        canvas.draw_line((area.l, py), (area.r, py), &paint);
    }
}

fn draw_backdrop(canvas: &skia::Canvas, area: &PlotArea, backdrop: &Backdrop) -> Result<()> {
    let image = backdrop.to_skia_image()?;
    let e = backdrop.extent;
    let (x0, x1) = (area.sx(e.x_min), area.sx(e.x_max));
    let (y0, y1) = (area.sy(e.y_max), area.sy(e.y_min));
    let dst = skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    canvas.draw_image_rect(&image, None, dst, &paint);
    Ok(())
}

fn draw_line_series(canvas: &skia::Canvas, area: &PlotArea, theme: &Theme, series: &LineSeries) {
    let data = &series.points;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((area.sx(x0), area.sy(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((area.sx(x), area.sy(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(series.color.unwrap_or(theme.line_stroke));

    canvas.draw_path(&path, &stroke);
}

fn draw_axes(canvas: &skia::Canvas, area: &PlotArea, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((area.l, area.b), (area.r, area.b), &axis_paint);
    canvas.draw_line((area.l, area.t), (area.l, area.b), &axis_paint);
}

fn draw_labels(canvas: &skia::Canvas, area: &PlotArea, theme: &Theme, ticks: usize, title: &str, width: i32) {
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(theme.axis_label);
    paint_text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(12.0);

    let mut paint_tick = paint_text.clone();
    paint_tick.set_color(theme.tick);
    for x in area.x.ticks(ticks) {
        let s = format_tick(x);
        let (w, _) = font.measure_str(&s, Some(&paint_tick));
        canvas.draw_str(&s, (area.sx(x) - w * 0.5, area.b + 16.0), &font, &paint_tick);
    }
    for y in area.y.ticks(ticks) {
        let s = format_tick(y);
        let (w, _) = font.measure_str(&s, Some(&paint_tick));
        canvas.draw_str(&s, (area.l - w - 6.0, area.sy(y) + 4.0), &font, &paint_tick);
    }

    canvas.draw_str(&area.x.label, (area.r - 24.0, area.b + 36.0), &font, &paint_text);
    canvas.draw_str(&area.y.label, (area.l - 56.0, area.t - 8.0), &font, &paint_text);

    let mut title_paint = paint_text;
    title_paint.set_color(theme.title);
    let mut title_font = skia::Font::default();
    title_font.set_size(16.0);
    let (tw, _) = title_font.measure_str(title, Some(&title_paint));
    canvas.draw_str(title, ((width as f32 - tw) * 0.5, area.t - 18.0), &title_font, &title_paint);
}
