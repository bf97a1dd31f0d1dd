use std::sync::Arc;

use bomkit_inventory::RelationshipMap;

use crate::error::InfraError;

/// Durable home of the relationship map.
pub trait RelationshipStore: Send + Sync {
    /// Load the full map. A store that has never been written yields an empty map.
    fn load(&self) -> Result<RelationshipMap, InfraError>;

    /// Replace the stored map with `map`.
    fn save(&self, map: &RelationshipMap) -> Result<(), InfraError>;
}

impl<S> RelationshipStore for Arc<S>
where
    S: RelationshipStore + ?Sized,
{
    fn load(&self) -> Result<RelationshipMap, InfraError> {
        (**self).load()
    }

    fn save(&self, map: &RelationshipMap) -> Result<(), InfraError> {
        (**self).save(map)
    }
}
