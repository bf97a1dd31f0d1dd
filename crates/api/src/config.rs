//! Process configuration, read from `BOMKIT_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "BOMKIT_BIND_ADDR";
pub const INVENTORY_PATH_VAR: &str = "BOMKIT_INVENTORY_PATH";
pub const RELATIONSHIPS_PATH_VAR: &str = "BOMKIT_RELATIONSHIPS_PATH";
pub const EXPORT_PATH_VAR: &str = "BOMKIT_EXPORT_PATH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: '{value}'")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Source-of-truth inventory spreadsheet (read once at startup).
    pub inventory_path: PathBuf,
    /// Relationship JSON file (read at startup, rewritten on every association).
    pub relationships_path: PathBuf,
    /// Export spreadsheet, overwritten by every export.
    pub export_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            inventory_path: PathBuf::from("ITEMLIST.xlsx"),
            relationships_path: PathBuf::from("item_relationships.json"),
            export_path: PathBuf::from("exported_data.xlsx"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup; unset variables keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value,
            })?;
        }
        if let Some(path) = lookup(INVENTORY_PATH_VAR) {
            config.inventory_path = path.into();
        }
        if let Some(path) = lookup(RELATIONSHIPS_PATH_VAR) {
            config.relationships_path = path.into();
        }
        if let Some(path) = lookup(EXPORT_PATH_VAR) {
            config.export_path = path.into();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_conventional_file_names() {
        let c = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(c, AppConfig::default());
        assert_eq!(c.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.inventory_path, PathBuf::from("ITEMLIST.xlsx"));
        assert_eq!(c.relationships_path, PathBuf::from("item_relationships.json"));
        assert_eq!(c.export_path, PathBuf::from("exported_data.xlsx"));
    }

    #[test]
    fn variables_override_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (BIND_ADDR_VAR, "127.0.0.1:5000"),
            (INVENTORY_PATH_VAR, "/data/items.xlsx"),
            (EXPORT_PATH_VAR, "/tmp/out.xlsx"),
        ]);
        let c = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(c.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.inventory_path, PathBuf::from("/data/items.xlsx"));
        assert_eq!(c.relationships_path, PathBuf::from("item_relationships.json"));
        assert_eq!(c.export_path, PathBuf::from("/tmp/out.xlsx"));
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let err = AppConfig::from_lookup(|k| (k == BIND_ADDR_VAR).then(|| "nope".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: "nope".into()
            }
        );
    }
}
