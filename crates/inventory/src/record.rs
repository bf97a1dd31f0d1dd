use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use bomkit_core::Quantity;

/// Column holding the unique item identifier.
pub const ITEM_CODE: &str = "Item Code";
/// Column holding the free-text description searched by `InventoryTable::search`.
pub const ITEM_DESCRIPTION: &str = "Item Description";
/// Field added to records returned with a relationship quantity.
pub const QUANTITY: &str = "Quantity";

/// One row of the inventory table, kept in its raw column → value shape.
///
/// Columns other than `Item Code` and `Item Description` (unit of measure,
/// warehouse, ...) are carried opaquely, in spreadsheet column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemRecord(Map<String, Value>);

impl ItemRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Convenience constructor for a record with just a code and description.
    pub fn with_description(code: &str, description: Option<&str>) -> Self {
        let mut fields = Map::new();
        fields.insert(ITEM_CODE.to_string(), Value::from(code));
        fields.insert(
            ITEM_DESCRIPTION.to_string(),
            description.map_or(Value::Null, Value::from),
        );
        Self(fields)
    }

    /// The item code, if the record carries one as text.
    pub fn code(&self) -> Option<&str> {
        self.0.get(ITEM_CODE).and_then(Value::as_str)
    }

    /// The description, only when it is text (missing, null and numeric
    /// descriptions yield `None`).
    pub fn description(&self) -> Option<&str> {
        self.0.get(ITEM_DESCRIPTION).and_then(Value::as_str)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Copy of this record with `Quantity` set to `qty`.
    ///
    /// An existing `Quantity` column is overwritten in place; otherwise the
    /// field is appended after the other columns.
    pub fn with_quantity(&self, qty: Quantity) -> Self {
        let mut fields = self.0.clone();
        fields.insert(QUANTITY.to_string(), Value::from(qty.get()));
        Self(fields)
    }
}

impl From<Map<String, Value>> for ItemRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl FromIterator<(String, Value)> for ItemRecord {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
