use serde::Serialize;

use bomkit_core::{DomainError, DomainResult, ItemCode};

use crate::record::ItemRecord;
use crate::relationship::RelationshipMap;
use crate::table::InventoryTable;

/// A parent record and its resolved children, each annotated with `Quantity`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemWithChildren {
    pub parent: ItemRecord,
    pub children: Vec<ItemRecord>,
    /// Child codes that are stored but no longer resolve to a record.
    #[serde(skip)]
    pub dropped: Vec<ItemCode>,
}

/// Look up `code`'s relationship entry and resolve it against the table.
///
/// Not found when there is no entry or the parent code has no record.
/// Children without a record are left out of `children` (and listed in
/// `dropped`); the rest keep the entry's child order.
pub fn fetch_with_children(
    table: &InventoryTable,
    relationships: &RelationshipMap,
    code: &str,
) -> DomainResult<ItemWithChildren> {
    let entry = relationships.get(code).ok_or_else(DomainError::not_found)?;
    let parent = table.find(code).ok_or_else(DomainError::not_found)?;

    let mut children = Vec::with_capacity(entry.children.len());
    let mut dropped = Vec::new();
    for (child_code, qty) in entry.children.iter() {
        match table.find(child_code.as_str()) {
            Some(record) => children.push(record.with_quantity(qty)),
            None => dropped.push(child_code.clone()),
        }
    }

    Ok(ItemWithChildren {
        parent: parent.with_quantity(entry.qty),
        children,
        dropped,
    })
}
