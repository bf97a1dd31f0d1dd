//! Association requests: `["parent:qty", "child:qty", ...]`.

use core::str::FromStr;

use bomkit_core::{DomainError, DomainResult, ItemCode, Quantity};

use crate::relationship::{ChildQuantities, RelationshipEntry};
use crate::table::InventoryTable;

/// One `code:qty` item of an association request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationLine {
    pub code: ItemCode,
    pub qty: Quantity,
}

impl FromStr for AssociationLine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(code), Some(qty), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DomainError::validation(format!(
                "'{s}' is not in 'code:qty' form"
            )));
        };

        let qty = qty.parse::<Quantity>().map_err(|_| {
            DomainError::validation(format!("invalid quantity '{qty}' for item '{code}'"))
        })?;

        Ok(Self {
            code: ItemCode::from(code),
            qty,
        })
    }
}

/// A parsed association: the first item is the parent, the rest are children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub parent: AssociationLine,
    pub children: Vec<AssociationLine>,
}

impl Association {
    /// Parse and check each item against the inventory, in request order.
    ///
    /// The parent is checked before any child is parsed, so an unknown parent
    /// is reported even when a later child item is malformed. The first
    /// failure aborts the whole association.
    pub fn resolve<S: AsRef<str>>(items: &[S], table: &InventoryTable) -> DomainResult<Self> {
        let (parent, children) = items
            .split_first()
            .ok_or_else(|| DomainError::validation("at least a parent item is required"))?;

        let parent: AssociationLine = parent.as_ref().parse()?;
        if !table.contains(parent.code.as_str()) {
            return Err(DomainError::UnknownParent(parent.code.to_string()));
        }

        let children = children
            .iter()
            .map(|item| {
                let child: AssociationLine = item.as_ref().parse()?;
                if !table.contains(child.code.as_str()) {
                    return Err(DomainError::UnknownChild(child.code.to_string()));
                }
                Ok(child)
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self { parent, children })
    }

    /// The entry that replaces any previous one for this parent.
    pub fn entry(&self) -> RelationshipEntry {
        let children: ChildQuantities = self
            .children
            .iter()
            .map(|c| (c.code.clone(), c.qty))
            .collect();
        RelationshipEntry::new(self.parent.qty, children)
    }
}
