use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bomkit_inventory::RelationshipMap;

use crate::error::InfraError;

use super::RelationshipStore;

/// Relationship map persisted as a single JSON document.
///
/// Saves go to a sibling `*.inprogress` file which is then renamed over the
/// target, so readers see either the old or the new document.
#[derive(Debug, Clone)]
pub struct JsonFileRelationshipStore {
    path: PathBuf,
}

impl JsonFileRelationshipStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".inprogress");
        self.path.with_file_name(name)
    }
}

impl RelationshipStore for JsonFileRelationshipStore {
    fn load(&self) -> Result<RelationshipMap, InfraError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "relationship file not found; starting empty");
                return Ok(RelationshipMap::new());
            }
            Err(e) => return Err(InfraError::io(&self.path, e)),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&self, map: &RelationshipMap) -> Result<(), InfraError> {
        let bytes = serde_json::to_vec(map)?;
        let temp_path = self.temp_path();

        std::fs::write(&temp_path, &bytes).map_err(|e| InfraError::io(&temp_path, e))?;

        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(InfraError::io(&self.path, e));
        }

        tracing::debug!(path = %self.path.display(), entries = map.len(), "relationship file rewritten");
        Ok(())
    }
}
