//! Inventory table loading.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use serde_json::{Map, Number, Value};

use bomkit_inventory::{ITEM_CODE, InventoryTable, ItemRecord};

use crate::error::InfraError;

/// Source of the read-only inventory table.
pub trait InventorySource: Send + Sync {
    fn load(&self) -> Result<InventoryTable, InfraError>;
}

/// Inventory read from the first worksheet of a spreadsheet file.
///
/// The first row holds the column names; each following row becomes one
/// record. A missing file yields an empty table.
#[derive(Debug, Clone)]
pub struct XlsxInventorySource {
    path: PathBuf,
}

impl XlsxInventorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventorySource for XlsxInventorySource {
    fn load(&self) -> Result<InventoryTable, InfraError> {
        match std::fs::metadata(&self.path) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "inventory spreadsheet not found; starting with an empty table");
                return Ok(InventoryTable::empty());
            }
            Err(e) => return Err(InfraError::io(&self.path, e)),
        }

        let mut workbook = open_workbook_auto(&self.path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| InfraError::NoWorksheet(self.path.clone()))??;

        let mut rows = range.rows();
        let Some(header) = rows.next() else {
            return Ok(InventoryTable::empty());
        };
        let columns: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(i, cell)| column_name(i, cell))
            .collect();

        let records = rows
            .filter(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
            .map(|row| row_to_record(&columns, row))
            .collect();

        Ok(InventoryTable::new(records))
    }
}

fn column_name(index: usize, cell: &Data) -> String {
    match cell {
        Data::Empty => format!("Unnamed: {index}"),
        other => other.to_string(),
    }
}

fn row_to_record(columns: &[String], row: &[Data]) -> ItemRecord {
    let mut fields = Map::with_capacity(columns.len());
    for (name, cell) in columns.iter().zip(row) {
        let value = if name == ITEM_CODE {
            code_value(cell)
        } else {
            cell_value(cell)
        };
        fields.insert(name.clone(), value);
    }
    ItemRecord::new(fields)
}

/// Item codes are always text; integral numeric cells print without `.0`.
fn code_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        other => Value::from(other.to_string()),
    }
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        Data::String(s) => Value::from(s.as_str()),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => Number::from_f64(dt.as_f64()).map_or(Value::Null, Value::Number),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::from(s.as_str()),
        Data::Error(_) | Data::Empty => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use serde_json::json;

    fn write_inventory(path: &Path) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, name) in ["Item Code", "Item Description", "Inventory UoM", "Warehouse"]
            .iter()
            .enumerate()
        {
            sheet.write_string(0, col as u16, *name).unwrap();
        }
        sheet.write_string(1, 0, "A1").unwrap();
        sheet.write_string(1, 1, "Bolt").unwrap();
        sheet.write_string(1, 2, "pcs").unwrap();
        sheet.write_string(1, 3, "WH1").unwrap();

        // Numeric code, no description.
        sheet.write_number(2, 0, 1002.0).unwrap();
        sheet.write_string(2, 2, "kg").unwrap();
        sheet.write_number(2, 3, 7.0).unwrap();

        workbook.save(path).unwrap();
    }

    #[test]
    fn missing_spreadsheet_is_an_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let table = XlsxInventorySource::new(dir.path().join("ITEMLIST.xlsx"))
            .load()
            .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn loads_rows_in_order_with_raw_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ITEMLIST.xlsx");
        write_inventory(&path);

        let table = XlsxInventorySource::new(&path).load().unwrap();
        assert_eq!(table.len(), 2);

        let first = serde_json::to_value(&table.records()[0]).unwrap();
        assert_eq!(
            first,
            json!({
                "Item Code": "A1",
                "Item Description": "Bolt",
                "Inventory UoM": "pcs",
                "Warehouse": "WH1",
            })
        );
    }

    #[test]
    fn numeric_codes_become_text_and_blank_cells_null() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ITEMLIST.xlsx");
        write_inventory(&path);

        let table = XlsxInventorySource::new(&path).load().unwrap();
        let rec = table.find("1002").expect("numeric code is looked up as text");
        assert_eq!(rec.get("Item Description"), Some(&Value::Null));
        assert_eq!(rec.description(), None);
        assert_eq!(rec.get("Warehouse").and_then(Value::as_f64), Some(7.0));
    }

    #[test]
    fn large_numeric_codes_are_not_truncated() {
        assert_eq!(code_value(&Data::Float(1e20)), json!("100000000000000000000"));
        assert_eq!(code_value(&Data::Float(1002.0)), json!("1002"));
        assert_eq!(code_value(&Data::Float(12.5)), json!("12.5"));
        assert_eq!(code_value(&Data::Int(42)), json!("42"));
    }

    #[test]
    fn path_through_a_regular_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let err = XlsxInventorySource::new(blocker.join("ITEMLIST.xlsx"))
            .load()
            .unwrap_err();
        assert!(matches!(err, InfraError::Io { .. }), "{err:?}");
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ITEMLIST.xlsx");
        std::fs::write(&path, b"not a spreadsheet").unwrap();

        assert!(XlsxInventorySource::new(&path).load().is_err());
    }
}
