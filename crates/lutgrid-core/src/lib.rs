// File: crates/lutgrid-core/src/lib.rs
// Summary: Core library entry point; exports the axis/grid model, table loading and axis inference.

pub mod axis;
pub mod error;
pub mod grid;
pub mod infer;
pub mod sink;
pub mod table;

pub use axis::{Axis, AxisKind, AxisName, AxisRole, DynamicAxis, StaticAxis};
pub use error::{ErrorKind, GridError};
pub use grid::{AxisMap, Grid};
pub use infer::{infer_static_axes, DEFAULT_TICKS};
pub use sink::{RecordingSink, VisualizationSink};
pub use table::{read_table, read_table_file, Table, TableSource};

/// Format names as a bracketed list, e.g. `[0, 1]`.
pub fn format_names(names: &[AxisName]) -> String {
    let inner = names.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(", ");
    format!("[{inner}]")
}
