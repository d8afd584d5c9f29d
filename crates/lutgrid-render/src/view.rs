// File: crates/lutgrid-render/src/view.rs
// Visible data ranges: autoscale over series and background extent.

use crate::plot::Plot;
use crate::types::Extent;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Smallest view containing every series point and the backdrop extent.
    pub fn from_plot(plot: &Plot) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &plot.series {
            for &(x, y) in &s.points {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if let Some(b) = &plot.backdrop {
            let Extent { x_min: bx0, x_max: bx1, y_min: by0, y_max: by1 } = b.extent;
            x_min = x_min.min(bx0.min(bx1));
            x_max = x_max.max(bx0.max(bx1));
            y_min = y_min.min(by0.min(by1));
            y_max = y_max.max(by0.max(by1));
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_plot(&self, plot: &mut Plot) {
        plot.x_axis.min = self.x_min;
        plot.x_axis.max = self.x_max;
        plot.y_axis.min = self.y_min;
        plot.y_axis.max = self.y_max;
    }
}
