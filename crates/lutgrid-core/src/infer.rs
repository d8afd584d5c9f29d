// File: crates/lutgrid-core/src/infer.rs
// Summary: Derive one static axis per table column from the column's value range.

use tracing::{debug, info};

use crate::axis::{AxisName, AxisRole, StaticAxis};
use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::table::Table;

/// Tick count given to inferred axes.
pub const DEFAULT_TICKS: u32 = 5;

/// (min, max) of `column` over every row. NaN cells are an error.
pub fn column_range(table: &Table, column: usize) -> Result<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (row, cells) in table.iter().enumerate() {
        let v = *cells.get(column).ok_or(GridError::MissingCell { row, column })?;
        if v.is_nan() {
            return Err(GridError::NanCell { row, column });
        }
        min = min.min(v);
        max = max.max(v);
    }
    Ok((min, max))
}

/// Add a static axis named after each column of the grid's table.
///
/// The column count comes from the first row. Columns below `count / 2` become
/// input axes, the rest output axes.
pub fn infer_static_axes(grid: &mut Grid, ticks: u32) -> Result<()> {
    let columns = match grid.table().first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(GridError::EmptyTable),
    };
    let threshold = columns / 2;

    for i in 0..columns {
        let range = column_range(grid.table(), i)?;
        let role = AxisRole::from_is_input(i < threshold);
        let axis = StaticAxis::new(AxisName::Index(i), range, ticks, role, None)?;
        debug!(column = i, min = range.0, max = range.1, %role, "inferred axis");
        grid.add_static_axis(axis);
    }

    info!(grid = grid.name(), columns, inputs = threshold, outputs = columns - threshold, "axes inferred");
    Ok(())
}
