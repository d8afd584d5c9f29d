// File: crates/lutgrid-render/src/axis.rs
// Summary: Plot axis (label + visible range) and tick placement.

#[derive(Clone, Debug, PartialEq)]
pub struct PlotAxis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl PlotAxis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// `count` evenly spaced tick values across the range, endpoints included.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linspace(self.min, self.max, count)
    }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

pub fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 { format!("{v:.0}") } else { format!("{v:.2}") }
}
