use serde::Deserialize;
use serde_json::Value;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    pub code: String,
}

/// `items[0]` is the parent, the rest are children; each is `"code:qty"`.
#[derive(Debug, Deserialize)]
pub struct AssociateRequest {
    pub items: Vec<String>,
}

/// Rows of `[No., Description, Quantity, UoM Name, Remark, Warehouse]`.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub items: Vec<Vec<Value>>,
}

// -------------------------
// Response messages
// -------------------------

pub fn associated_message(parent: &str) -> String {
    format!("Items associated with parent code '{parent}'.")
}

pub fn exported_message(file_name: &str) -> String {
    format!("Data exported to '{file_name}' successfully!")
}

pub fn export_failed_message(err: impl core::fmt::Display) -> String {
    format!("Failed to export data: {err}")
}

pub fn storage_failed_message(err: impl core::fmt::Display) -> String {
    format!("An error occurred: {err}")
}
