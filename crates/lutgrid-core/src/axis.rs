// File: crates/lutgrid-core/src/axis.rs
// Summary: Axis model: names, roles, static (ranged) and dynamic (open-ended) axes.

use std::fmt;

use crate::error::{GridError, Result};

/// Axis identifier: a column index or a free-form label.
///
/// Indices order before labels, so a map keyed by `AxisName` iterates
/// inferred column axes in column order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxisName {
    Index(usize),
    Label(String),
}

impl fmt::Display for AxisName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisName::Index(i) => write!(f, "{i}"),
            AxisName::Label(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<usize> for AxisName {
    fn from(i: usize) -> Self { AxisName::Index(i) }
}

impl From<&str> for AxisName {
    fn from(s: &str) -> Self { AxisName::Label(s.to_string()) }
}

impl From<String> for AxisName {
    fn from(s: String) -> Self { AxisName::Label(s) }
}

/// Whether an axis is consumed as a lookup key or produced as a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRole {
    Input,
    Output,
}

impl AxisRole {
    pub fn from_is_input(is_input: bool) -> Self {
        if is_input { AxisRole::Input } else { AxisRole::Output }
    }

    pub fn is_input(self) -> bool { matches!(self, AxisRole::Input) }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AxisRole::Input => "input",
            AxisRole::Output => "output",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    Static,
    Dynamic,
}

/// Axis with a fixed numeric range and tick count.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticAxis {
    name: AxisName,
    range: (f64, f64),
    ticks: u32,
    role: AxisRole,
    starting_value: f64,
}

impl StaticAxis {
    /// Build a static axis.
    ///
    /// An explicit `starting_value` must lie in `range.0..=range.1`. Without one
    /// the starting value is `floor(|range.1 - range.0| / 2)`, which is the half
    /// width of the range rather than its midpoint.
    pub fn new(
        name: impl Into<AxisName>,
        range: (f64, f64),
        ticks: u32,
        role: AxisRole,
        starting_value: Option<f64>,
    ) -> Result<Self> {
        let name = name.into();
        let starting_value = match starting_value {
            Some(v) => {
                if !(range.0 <= v && v <= range.1) {
                    return Err(GridError::StartingValueOutOfRange {
                        name,
                        value: v,
                        min: range.0,
                        max: range.1,
                    });
                }
                v
            }
            None => default_starting_value(range),
        };
        Ok(Self { name, range, ticks, role, starting_value })
    }

    pub fn name(&self) -> &AxisName { &self.name }
    pub fn range(&self) -> (f64, f64) { self.range }
    pub fn ticks(&self) -> u32 { self.ticks }
    pub fn role(&self) -> AxisRole { self.role }
    pub fn starting_value(&self) -> f64 { self.starting_value }
}

pub fn default_starting_value(range: (f64, f64)) -> f64 {
    ((range.1 - range.0).abs() / 2.0).floor()
}

/// Open-ended axis without a fixed range.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicAxis {
    name: AxisName,
    role: AxisRole,
    starting_value: Option<f64>,
}

impl DynamicAxis {
    pub fn new(name: impl Into<AxisName>, role: AxisRole, starting_value: Option<f64>) -> Self {
        Self { name: name.into(), role, starting_value }
    }

    pub fn name(&self) -> &AxisName { &self.name }
    pub fn role(&self) -> AxisRole { self.role }
    pub fn starting_value(&self) -> Option<f64> { self.starting_value }
}

/// Either kind of axis, as stored by a [`crate::Grid`].
#[derive(Clone, Debug, PartialEq)]
pub enum Axis {
    Static(StaticAxis),
    Dynamic(DynamicAxis),
}

impl Axis {
    pub fn kind(&self) -> AxisKind {
        match self {
            Axis::Static(_) => AxisKind::Static,
            Axis::Dynamic(_) => AxisKind::Dynamic,
        }
    }

    pub fn name(&self) -> &AxisName {
        match self {
            Axis::Static(a) => a.name(),
            Axis::Dynamic(a) => a.name(),
        }
    }

    pub fn role(&self) -> AxisRole {
        match self {
            Axis::Static(a) => a.role(),
            Axis::Dynamic(a) => a.role(),
        }
    }

    pub fn starting_value(&self) -> Option<f64> {
        match self {
            Axis::Static(a) => Some(a.starting_value()),
            Axis::Dynamic(a) => a.starting_value(),
        }
    }

    pub fn as_static(&self) -> Option<&StaticAxis> {
        match self {
            Axis::Static(a) => Some(a),
            Axis::Dynamic(_) => None,
        }
    }
}

impl From<StaticAxis> for Axis {
    fn from(a: StaticAxis) -> Self { Axis::Static(a) }
}

impl From<DynamicAxis> for Axis {
    fn from(a: DynamicAxis) -> Self { Axis::Dynamic(a) }
}
