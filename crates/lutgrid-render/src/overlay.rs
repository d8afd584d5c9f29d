// File: crates/lutgrid-render/src/overlay.rs
// Summary: Visualization sink drawing a series over a fixed background image, written as PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use lutgrid_core::VisualizationSink;
use tracing::info;

use crate::backdrop::{Backdrop, Origin};
use crate::plot::{LineSeries, Plot, RenderOptions};
use crate::theme;
use crate::types::Extent;

/// Environment variable overriding [`OverlayOptions::background`].
pub const BACKGROUND_ENV: &str = "LUTGRID_BACKGROUND";
/// Environment variable overriding [`OverlayOptions::out_dir`].
pub const OUT_DIR_ENV: &str = "LUTGRID_OUT_DIR";
/// Environment variable selecting a render theme by name.
pub const THEME_ENV: &str = "LUTGRID_THEME";

pub struct OverlayOptions {
    pub background: PathBuf,
    pub extent: Extent,
    pub origin: Origin,
    pub out_dir: PathBuf,
    pub render: RenderOptions,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            background: PathBuf::from("download.jpeg"),
            extent: Extent::new(0.0, 200.0, 0.0, 200.0),
            origin: Origin::Lower,
            out_dir: PathBuf::from("target/out"),
            render: RenderOptions::default(),
        }
    }
}

impl OverlayOptions {
    /// Defaults with `LUTGRID_BACKGROUND`, `LUTGRID_OUT_DIR` and `LUTGRID_THEME` applied when set.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(p) = std::env::var_os(BACKGROUND_ENV) {
            opts.background = PathBuf::from(p);
        }
        if let Some(p) = std::env::var_os(OUT_DIR_ENV) {
            opts.out_dir = PathBuf::from(p);
        }
        if let Ok(name) = std::env::var(THEME_ENV) {
            opts.render.theme = theme::find(&name);
        }
        opts
    }
}

pub struct OverlaySink {
    pub opts: OverlayOptions,
    /// Path of the most recent PNG written.
    pub last_output: Option<PathBuf>,
}

impl OverlaySink {
    pub fn new(opts: OverlayOptions) -> Self {
        Self { opts, last_output: None }
    }

    /// Output file for a grid: `<out_dir>/grid_<name>.png`.
    pub fn output_path(&self, grid_name: &str) -> PathBuf {
        self.opts.out_dir.join(format!("grid_{}.png", sanitize(grid_name)))
    }

    /// Build the plot without rendering it.
    pub fn build_plot(&self, grid_name: &str, series: &[(f64, f64)]) -> Result<Plot> {
        let backdrop = Backdrop::open(&self.opts.background, self.opts.extent, self.opts.origin)?;
        let mut plot = Plot::new(format!("Grid: {grid_name}"));
        plot.set_backdrop(backdrop);
        plot.add_series(LineSeries::new(series.to_vec()));
        plot.autoscale();
        Ok(plot)
    }
}

impl VisualizationSink for OverlaySink {
    fn render(&mut self, grid_name: &str, series: &[(f64, f64)]) -> Result<()> {
        let plot = self.build_plot(grid_name, series)?;
        let out = self.output_path(grid_name);
        plot.render_to_png(&self.opts.render, &out)
            .with_context(|| format!("writing {}", out.display()))?;
        info!(grid = grid_name, points = series.len(), output = %out.display(), "overlay written");
        self.last_output = Some(out);
        Ok(())
    }
}

fn sanitize(name: &str) -> String {
    let s: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if s.is_empty() { "grid".to_string() } else { s }
}
