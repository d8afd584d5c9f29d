// File: crates/lutgrid-core/src/grid.rs
// Summary: Grid struct: named collection of input/output axes plus a sample table.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::axis::{Axis, AxisKind, AxisName, AxisRole, DynamicAxis, StaticAxis};
use crate::error::{GridError, Result};
use crate::table::{Table, TableSource};

pub type AxisMap = BTreeMap<AxisName, Axis>;

#[derive(Clone, Debug, Default)]
pub struct Grid {
    name: String,
    input_axes: AxisMap,
    output_axes: AxisMap,
    table: Table,
}

impl Grid {
    /// Empty grid with its own, fresh axis maps and table.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Grid pre-populated with axes and a table; takes ownership of all three.
    pub fn with_parts(name: impl Into<String>, output_axes: AxisMap, input_axes: AxisMap, table: Table) -> Self {
        Self { name: name.into(), input_axes, output_axes, table }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn input_axes(&self) -> &AxisMap { &self.input_axes }
    pub fn output_axes(&self) -> &AxisMap { &self.output_axes }
    pub fn table(&self) -> &Table { &self.table }

    pub fn input_names(&self) -> Vec<AxisName> { self.input_axes.keys().cloned().collect() }
    pub fn output_names(&self) -> Vec<AxisName> { self.output_axes.keys().cloned().collect() }

    fn axes(&self, role: AxisRole) -> &AxisMap {
        match role {
            AxisRole::Input => &self.input_axes,
            AxisRole::Output => &self.output_axes,
        }
    }

    fn axes_mut(&mut self, role: AxisRole) -> &mut AxisMap {
        match role {
            AxisRole::Input => &mut self.input_axes,
            AxisRole::Output => &mut self.output_axes,
        }
    }

    /// Number of axes of `kind` among the axes with `role`.
    pub fn count_of(&self, kind: AxisKind, role: AxisRole) -> usize {
        self.axes(role).values().filter(|a| a.kind() == kind).count()
    }

    pub fn contains_axis(&self, name: &AxisName) -> bool {
        self.input_axes.contains_key(name) || self.output_axes.contains_key(name)
    }

    /// Insert a static axis, replacing any axis of the same name and role.
    ///
    /// Unlike [`Grid::add_dynamic_axis`] this does not check for name collisions.
    pub fn add_static_axis(&mut self, axis: StaticAxis) {
        let role = axis.role();
        let name = axis.name().clone();
        let replaced = self.axes_mut(role).insert(name.clone(), Axis::Static(axis));
        if let Some(old) = replaced {
            warn!(grid = %self.name, axis = %name, replaced = ?old.kind(), "static axis replaced an existing {role} axis");
        }
    }

    /// Insert a dynamic axis.
    ///
    /// Fails when the name is taken by any axis, or when a dynamic axis with the
    /// same role already exists.
    pub fn add_dynamic_axis(&mut self, axis: DynamicAxis) -> Result<()> {
        if self.contains_axis(axis.name()) {
            return Err(GridError::NameCollision(axis.name().clone()));
        }
        let role = axis.role();
        if self.count_of(AxisKind::Dynamic, role) >= 1 {
            return Err(GridError::DynamicAxisLimit(role));
        }
        self.axes_mut(role).insert(axis.name().clone(), Axis::Dynamic(axis));
        Ok(())
    }

    /// Replace the table from a file path or from ready rows.
    pub fn set_table(&mut self, source: impl Into<TableSource>) -> Result<()> {
        self.table = source.into().load()?;
        debug!(grid = %self.name, rows = self.table.len(), "table set");
        Ok(())
    }
}
