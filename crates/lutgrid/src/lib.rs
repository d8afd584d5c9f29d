// File: crates/lutgrid/src/lib.rs
// Summary: Driver: table path + grid name in, inferred axis lists out, then hand-off to a visualization sink.

use std::io::Write;

use anyhow::{Context, Result};
use lutgrid_core::{format_names, infer_static_axes, AxisName, Grid, GridError, VisualizationSink, DEFAULT_TICKS};
use tracing::info;

/// What a run produced, besides console output and the rendered image.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub grid_name: String,
    pub inputs: Vec<AxisName>,
    pub outputs: Vec<AxisName>,
    pub rows: usize,
    pub columns: usize,
}

/// Points of the demonstration line `y = 2x` for `x` in `0..400`.
pub fn demo_series() -> Vec<(f64, f64)> {
    (0..400).map(|x| x as f64).map(|x| (x, x * 2.0)).collect()
}

/// Run the driver over positional `args` (table path, grid name).
///
/// Writes the input names, then the output names, one list per line to `out`.
pub fn run<W: Write>(args: &[String], out: &mut W, sink: &mut dyn VisualizationSink) -> Result<RunSummary> {
    let [table_path, grid_name] = args else {
        return Err(GridError::ArgumentCount { expected: 2, got: args.len() }.into());
    };

    let mut grid = Grid::new(grid_name.as_str());
    grid.set_table(table_path.as_str())
        .with_context(|| format!("loading table for grid '{grid_name}'"))?;
    infer_static_axes(&mut grid, DEFAULT_TICKS)?;

    let inputs = grid.input_names();
    let outputs = grid.output_names();
    writeln!(out, "{}", format_names(&inputs))?;
    writeln!(out, "{}", format_names(&outputs))?;

    let series = demo_series();
    sink.render(grid.name(), &series)
        .with_context(|| format!("rendering grid '{grid_name}'"))?;

    let summary = RunSummary {
        grid_name: grid.name().to_string(),
        rows: grid.table().len(),
        columns: inputs.len() + outputs.len(),
        inputs,
        outputs,
    };
    info!(grid = %summary.grid_name, rows = summary.rows, columns = summary.columns, "run complete");
    Ok(summary)
}
