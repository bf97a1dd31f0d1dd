//! Inventory domain module.
//!
//! This crate contains the business rules for item lookup and bill-of-materials
//! associations, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod association;
pub mod query;
pub mod record;
pub mod relationship;
pub mod table;

pub use association::{Association, AssociationLine};
pub use query::{ItemWithChildren, fetch_with_children};
pub use record::{ITEM_CODE, ITEM_DESCRIPTION, ItemRecord, QUANTITY};
pub use relationship::{ChildQuantities, RelationshipEntry, RelationshipMap};
pub use table::InventoryTable;
