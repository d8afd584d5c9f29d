// File: crates/lutgrid-core/src/table.rs
// Summary: Table sources and the comma-separated table reader.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{GridError, Result};

/// Rows × columns of samples.
pub type Table = Vec<Vec<f64>>;

/// Where a grid's table comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum TableSource {
    /// Comma-separated text file, one row per line.
    Path(PathBuf),
    /// Already materialized rows.
    Rows(Table),
}

impl TableSource {
    /// Resolve the source into rows, reading the file if needed.
    pub fn load(self) -> Result<Table> {
        match self {
            TableSource::Path(p) => read_table_file(&p),
            TableSource::Rows(rows) => Ok(rows),
        }
    }
}

impl From<&str> for TableSource {
    fn from(s: &str) -> Self { TableSource::Path(PathBuf::from(s)) }
}

impl From<String> for TableSource {
    fn from(s: String) -> Self { TableSource::Path(PathBuf::from(s)) }
}

impl From<&Path> for TableSource {
    fn from(p: &Path) -> Self { TableSource::Path(p.to_path_buf()) }
}

impl From<PathBuf> for TableSource {
    fn from(p: PathBuf) -> Self { TableSource::Path(p) }
}

impl From<Table> for TableSource {
    fn from(rows: Table) -> Self { TableSource::Rows(rows) }
}

/// Untyped boundary: a JSON string names a file, an array of numeric arrays is
/// a row set, anything else is rejected with a type error.
impl TryFrom<Value> for TableSource {
    type Error = GridError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(TableSource::Path(PathBuf::from(s))),
            Value::Array(rows) => {
                let mut table = Vec::with_capacity(rows.len());
                for row in &rows {
                    let cells = row
                        .as_array()
                        .ok_or_else(|| GridError::UnsupportedTableSource(format!("list containing {}", describe(row))))?;
                    let parsed = cells
                        .iter()
                        .map(|c| c.as_f64().ok_or_else(|| GridError::UnsupportedTableSource(format!("row containing {}", describe(c)))))
                        .collect::<Result<Vec<f64>>>()?;
                    table.push(parsed);
                }
                Ok(TableSource::Rows(table))
            }
            other => Err(GridError::UnsupportedTableSource(describe(&other).to_string())),
        }
    }
}

fn describe(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Read a comma-separated table from `path`.
///
/// The path must name an existing regular file.
pub fn read_table_file(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(GridError::TableNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let table = read_table(file)?;
    debug!(path = %path.display(), rows = table.len(), "table file read");
    Ok(table)
}

/// Parse newline-separated rows of comma-separated floats.
///
/// No header, quoting or escaping. Cells are trimmed, lines holding nothing but
/// whitespace are skipped and rows may differ in length. NaN cells are rejected.
pub fn read_table<R: Read>(mut reader: R) -> Result<Table> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(data.as_slice());

    let mut table = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if rec.iter().all(str::is_empty) {
            continue;
        }
        let line = rec.position().map(|p| source_line(&data, p)).unwrap_or(table.len() + 1);
        let cells = rec
            .iter()
            .enumerate()
            .map(|(column, text)| match text.parse::<f64>() {
                Ok(v) if !v.is_nan() => Ok(v),
                _ => Err(GridError::ParseCell { line, column, text: text.to_string() }),
            })
            .collect::<Result<Vec<f64>>>()?;
        table.push(cells);
    }
    Ok(table)
}

// csv positions a record before the empty lines it skips; step over them.
fn source_line(data: &[u8], pos: &csv::Position) -> usize {
    let start = (pos.byte() as usize).min(data.len());
    let skipped = data[start..]
        .iter()
        .take_while(|&&b| b == b'\n' || b == b'\r')
        .filter(|&&b| b == b'\n')
        .count();
    pos.line() as usize + skipped
}
