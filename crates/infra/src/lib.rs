//! Infrastructure layer: spreadsheet and JSON file adapters.

pub mod error;
pub mod export;
pub mod inventory_source;
pub mod relationship_store;

pub use error::InfraError;
pub use export::{EXPORT_HEADERS, ExportCell, ExportRow, XlsxExporter};
pub use inventory_source::{InventorySource, XlsxInventorySource};
pub use relationship_store::{InMemoryRelationshipStore, JsonFileRelationshipStore, RelationshipStore};
