// File: crates/lutgrid-core/src/error.rs
// Summary: Error type shared by the grid model, table loader and driver.

use std::path::PathBuf;

use thiserror::Error;

use crate::axis::{AxisName, AxisRole};

/// Coarse classification of a [`GridError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments, out-of-range values, axis conflicts, empty tables.
    Validation,
    /// Table path missing or not a regular file.
    FileNotFound,
    /// Table source of an unsupported shape.
    Type,
    /// Table cell that is not a float, or is NaN.
    Parse,
    /// Underlying read failure.
    Io,
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("expected {expected} arguments (table path, grid name), got {got}")]
    ArgumentCount { expected: usize, got: usize },

    #[error("starting value {value} of axis {name} outside range [{min}, {max}]")]
    StartingValueOutOfRange { name: AxisName, value: f64, min: f64, max: f64 },

    #[error("an axis named {0} already exists")]
    NameCollision(AxisName),

    #[error("only one dynamic {0} axis is allowed")]
    DynamicAxisLimit(AxisRole),

    #[error("table cannot be empty")]
    EmptyTable,

    #[error("row {row} has no value for column {column}")]
    MissingCell { row: usize, column: usize },

    #[error("row {row}, column {column} is NaN")]
    NanCell { row: usize, column: usize },

    #[error("file {} does not exist", .0.display())]
    TableNotFound(PathBuf),

    #[error("table must be a file path or a list of rows, got {0}")]
    UnsupportedTableSource(String),

    /// `line` is the 1-based source line, `column` the 0-based field index.
    #[error("line {line}, column {column}: cannot parse {text:?} as a number")]
    ParseCell { line: usize, column: usize, text: String },

    #[error("reading table: {0}")]
    Io(#[from] std::io::Error),

    #[error("reading table: {0}")]
    Csv(#[from] csv::Error),
}

impl GridError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridError::ArgumentCount { .. }
            | GridError::StartingValueOutOfRange { .. }
            | GridError::NameCollision(_)
            | GridError::DynamicAxisLimit(_)
            | GridError::EmptyTable
            | GridError::MissingCell { .. }
            | GridError::NanCell { .. } => ErrorKind::Validation,
            GridError::TableNotFound(_) => ErrorKind::FileNotFound,
            GridError::UnsupportedTableSource(_) => ErrorKind::Type,
            GridError::ParseCell { .. } => ErrorKind::Parse,
            GridError::Io(_) | GridError::Csv(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
