//! Bill-of-materials relationships: parent code → declared quantity + children.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use bomkit_core::{ItemCode, Quantity};

/// Child code → quantity, in insertion order.
///
/// Serialized as a JSON object. Inserting a code that is already present
/// replaces its quantity and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildQuantities(IndexMap<ItemCode, Quantity>);

impl ChildQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: ItemCode, qty: Quantity) {
        self.0.insert(code, qty);
    }

    pub fn get(&self, code: &str) -> Option<Quantity> {
        self.0.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemCode, Quantity)> {
        self.0.iter().map(|(c, q)| (c, *q))
    }
}

impl FromIterator<(ItemCode, Quantity)> for ChildQuantities {
    fn from_iter<T: IntoIterator<Item = (ItemCode, Quantity)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A parent's declared quantity plus its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEntry {
    pub qty: Quantity,
    pub children: ChildQuantities,
}

impl RelationshipEntry {
    pub fn new(qty: Quantity, children: ChildQuantities) -> Self {
        Self { qty, children }
    }
}

/// All relationship entries keyed by parent code, in insertion order.
///
/// Serialized as `{"<parent>": {"qty": n, "children": {...}}, ...}`, the
/// on-disk format of the relationship file. Replacing a parent keeps its
/// position; new parents are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipMap(IndexMap<ItemCode, RelationshipEntry>);

impl RelationshipMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, parent: &str) -> Option<&RelationshipEntry> {
        self.0.get(parent)
    }

    /// Replace (never merge) the entry for `parent`, returning the previous one.
    pub fn insert(&mut self, parent: ItemCode, entry: RelationshipEntry) -> Option<RelationshipEntry> {
        self.0.insert(parent, entry)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemCode, &RelationshipEntry)> {
        self.0.iter()
    }
}
