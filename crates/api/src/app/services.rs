//! Service wiring: the inventory table, the relationship map and its store,
//! and the exporter, owned by one object shared across handlers.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde_json::Value;
use thiserror::Error;

use bomkit_core::{DomainError, ItemCode};
use bomkit_infra::{
    ExportRow, InfraError, InventorySource, JsonFileRelationshipStore, RelationshipStore,
    XlsxExporter, XlsxInventorySource,
};
use bomkit_inventory::{
    Association, InventoryTable, ItemRecord, ItemWithChildren, RelationshipMap,
    fetch_with_children,
};

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

/// Application state, loaded once at startup.
///
/// The inventory is immutable after load. The relationship map is guarded by
/// an `RwLock`: associations hold the write lock from save to commit so the
/// in-memory map only changes after the store accepted the new content.
pub struct BomService {
    inventory: Arc<InventoryTable>,
    relationships: RwLock<RelationshipMap>,
    store: Arc<dyn RelationshipStore>,
    exporter: Mutex<XlsxExporter>,
}

impl BomService {
    pub fn new(
        inventory: InventoryTable,
        store: Arc<dyn RelationshipStore>,
        exporter: XlsxExporter,
    ) -> Result<Self, ServiceError> {
        for code in inventory.duplicate_codes() {
            tracing::warn!(code = %code, "duplicate item code in inventory; first row wins");
        }

        let relationships = store.load()?;
        tracing::info!(
            items = inventory.len(),
            relationships = relationships.len(),
            "inventory data loaded"
        );

        Ok(Self {
            inventory: Arc::new(inventory),
            relationships: RwLock::new(relationships),
            store,
            exporter: Mutex::new(exporter),
        })
    }

    /// Load everything from the files named in `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServiceError> {
        let inventory = XlsxInventorySource::new(&config.inventory_path).load()?;
        let store = Arc::new(JsonFileRelationshipStore::new(&config.relationships_path));
        Self::new(inventory, store, XlsxExporter::new(&config.export_path))
    }

    pub fn inventory(&self) -> &InventoryTable {
        &self.inventory
    }

    /// Copy of the current relationship map.
    pub fn relationships(&self) -> RelationshipMap {
        self.relationships
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn search(&self, query: &str) -> Vec<ItemRecord> {
        self.inventory.search(query).into_iter().cloned().collect()
    }

    pub fn fetch(&self, code: &str) -> Result<ItemWithChildren, ServiceError> {
        let relationships = self
            .relationships
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let found = fetch_with_children(&self.inventory, &relationships, code)?;

        if !found.dropped.is_empty() {
            tracing::debug!(
                parent = code,
                dropped = ?found.dropped,
                "children no longer in inventory were left out"
            );
        }
        Ok(found)
    }

    /// Parse, validate and persist an association, replacing any previous
    /// entry for the parent. Nothing is written unless every code resolves.
    pub fn associate<S: AsRef<str>>(&self, items: &[S]) -> Result<ItemCode, ServiceError> {
        let association = Association::resolve(items, &self.inventory)?;
        let entry = association.entry();
        let parent = association.parent.code;

        let mut relationships = self
            .relationships
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = relationships.clone();
        next.insert(parent.clone(), entry);

        if let Err(e) = self.store.save(&next) {
            tracing::error!(parent = %parent, error = %e, "failed to persist relationships");
            return Err(e.into());
        }
        *relationships = next;

        tracing::info!(
            parent = %parent,
            children = association.children.len(),
            "relationship stored"
        );
        Ok(parent)
    }

    /// Validate every row, then write the export file. Returns the file name.
    pub fn export(&self, rows: Vec<Vec<Value>>) -> Result<String, ServiceError> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, values)| ExportRow::from_values(i + 1, values))
            .collect::<Result<Vec<_>, _>>()?;

        let exporter = self.exporter.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = exporter.export(&rows) {
            tracing::error!(error = %e, "export failed");
            return Err(e.into());
        }
        Ok(exporter.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomkit_core::Quantity;
    use bomkit_infra::InMemoryRelationshipStore;
    use serde_json::json;

    fn service_with(store: Arc<InMemoryRelationshipStore>, dir: &std::path::Path) -> BomService {
        let inventory = InventoryTable::new(vec![
            ItemRecord::with_description("A1", Some("Bolt")),
            ItemRecord::with_description("B2", Some("Nut")),
            ItemRecord::with_description("C3", Some("Washer")),
        ]);
        BomService::new(
            inventory,
            store,
            XlsxExporter::new(dir.join("exported_data.xlsx")),
        )
        .unwrap()
    }

    #[test]
    fn associate_persists_and_updates_memory() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(InMemoryRelationshipStore::new());
        let svc = service_with(store.clone(), dir.path());

        let parent = svc.associate(&["A1:10", "B2:5"]).unwrap();
        assert_eq!(parent, ItemCode::from("A1"));
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.snapshot(), svc.relationships());

        let got = svc.fetch("A1").unwrap();
        assert_eq!(got.parent.get("Quantity"), Some(&json!(10)));
        assert_eq!(got.children.len(), 1);
        assert_eq!(got.children[0].get("Quantity"), Some(&json!(5)));
    }

    #[test]
    fn unknown_parent_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(InMemoryRelationshipStore::new());
        let svc = service_with(store.clone(), dir.path());
        svc.associate(&["A1:1", "B2:1"]).unwrap();
        let before = store.snapshot();

        let err = svc.associate(&["Z9:1", "B2:1"]).unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::UnknownParent(_))));
        assert_eq!(store.snapshot(), before);
        assert_eq!(svc.relationships(), before);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn unknown_child_is_all_or_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(InMemoryRelationshipStore::new());
        let svc = service_with(store.clone(), dir.path());
        svc.associate(&["A1:1", "B2:1"]).unwrap();

        let err = svc.associate(&["A1:2", "C3:1", "X1:1"]).unwrap_err();
        assert_eq!(err.to_string(), "Child item code 'X1' does not exist.");

        let entry = svc.relationships().get("A1").cloned().unwrap();
        assert_eq!(entry.qty, Quantity::new(1));
        assert!(entry.children.get("C3").is_none());
    }

    #[test]
    fn failed_save_does_not_change_memory() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(InMemoryRelationshipStore::new());
        let svc = service_with(store.clone(), dir.path());

        store.fail_saves(true);
        let err = svc.associate(&["A1:1"]).unwrap_err();
        assert!(matches!(err, ServiceError::Infra(_)));
        assert!(svc.relationships().is_empty());
        assert!(matches!(
            svc.fetch("A1").unwrap_err(),
            ServiceError::Domain(DomainError::NotFound)
        ));
    }

    #[test]
    fn existing_relationships_are_loaded_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let seed = Arc::new(InMemoryRelationshipStore::new());
        service_with(seed.clone(), dir.path())
            .associate(&["A1:3", "C3:2"])
            .unwrap();

        let reloaded = service_with(
            Arc::new(InMemoryRelationshipStore::with_map(seed.snapshot())),
            dir.path(),
        );
        let got = reloaded.fetch("A1").unwrap();
        assert_eq!(got.children[0].code(), Some("C3"));
    }

    #[test]
    fn export_reports_file_name_and_rejects_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service_with(Arc::new(InMemoryRelationshipStore::new()), dir.path());

        let name = svc
            .export(vec![vec![
                json!("1"),
                json!("Bolt"),
                json!(10),
                json!("pcs"),
                json!(""),
                json!("WH1"),
            ]])
            .unwrap();
        assert_eq!(name, "exported_data.xlsx");
        assert!(dir.path().join("exported_data.xlsx").exists());

        let err = svc.export(vec![vec![json!("1")]]).unwrap_err();
        assert_eq!(err.to_string(), "row 1 has 1 fields, expected 6");
    }
}
