// File: crates/lutgrid-core/src/sink.rs
// Summary: Renderer-agnostic hook for presenting a grid alongside a coordinate series.

use anyhow::Result;

/// Receives the grid name and an (x, y) series to present.
pub trait VisualizationSink {
    fn render(&mut self, grid_name: &str, series: &[(f64, f64)]) -> Result<()>;
}

/// Sink that keeps every call in memory. Useful where no image backend exists.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<(String, Vec<(f64, f64)>)>,
}

impl VisualizationSink for RecordingSink {
    fn render(&mut self, grid_name: &str, series: &[(f64, f64)]) -> Result<()> {
        self.calls.push((grid_name.to_string(), series.to_vec()));
        Ok(())
    }
}
