//! Spreadsheet export of client-assembled item lists.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde_json::Value;

use crate::error::InfraError;

/// Fixed header row of every export.
pub const EXPORT_HEADERS: [&str; 6] = [
    "No.",
    "Description",
    "Quantity",
    "UoM Name",
    "Remark",
    "Warehouse",
];

/// One exported cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportCell {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl TryFrom<Value> for ExportCell {
    type Error = InfraError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(ExportCell::Empty),
            Value::Bool(b) => Ok(ExportCell::Bool(b)),
            Value::Number(n) => n.as_f64().map(ExportCell::Number).ok_or_else(|| {
                InfraError::MalformedExport(format!("number {n} cannot be written to a cell"))
            }),
            Value::String(s) => Ok(ExportCell::Text(s)),
            other => Err(InfraError::MalformedExport(format!(
                "unsupported cell value {other}"
            ))),
        }
    }
}

/// A row of six positional cells, matching `EXPORT_HEADERS`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow([ExportCell; 6]);

impl ExportRow {
    pub fn new(cells: [ExportCell; 6]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[ExportCell; 6] {
        &self.0
    }

    /// Validate a raw client row; `index` is only used in error messages.
    pub fn from_values(index: usize, values: Vec<Value>) -> Result<Self, InfraError> {
        let len = values.len();
        let cells: Vec<ExportCell> = values
            .into_iter()
            .map(ExportCell::try_from)
            .collect::<Result<_, _>>()?;
        let cells: [ExportCell; 6] = cells.try_into().map_err(|_| {
            InfraError::MalformedExport(format!(
                "row {index} has {len} fields, expected {}",
                EXPORT_HEADERS.len()
            ))
        })?;
        Ok(Self(cells))
    }
}

/// Writes export rows to a fixed spreadsheet path, replacing any previous export.
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    path: PathBuf,
}

impl XlsxExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name of the output file, as reported to clients.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn export(&self, rows: &[ExportRow]) -> Result<(), InfraError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let sheet = workbook.add_worksheet();

        for (col, header) in EXPORT_HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = u32::try_from(i + 1).map_err(|_| {
                InfraError::MalformedExport(format!("too many rows ({})", rows.len()))
            })?;
            write_row(sheet, r, row)?;
        }

        workbook.save(&self.path)?;
        tracing::info!(path = %self.path.display(), rows = rows.len(), "export written");
        Ok(())
    }
}

fn write_row(sheet: &mut Worksheet, row: u32, cells: &ExportRow) -> Result<(), InfraError> {
    for (col, cell) in cells.cells().iter().enumerate() {
        let col = col as u16;
        match cell {
            ExportCell::Text(s) => {
                sheet.write_string(row, col, s.as_str())?;
            }
            ExportCell::Number(n) => {
                sheet.write_number(row, col, *n)?;
            }
            ExportCell::Bool(b) => {
                sheet.write_boolean(row, col, *b)?;
            }
            ExportCell::Empty => {}
        }
    }
    Ok(())
}
