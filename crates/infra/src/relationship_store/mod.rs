//! Relationship persistence boundary.
//!
//! The whole map is loaded once at startup and rewritten in full on every
//! successful association; stores never merge or append.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryRelationshipStore;
pub use json_file::JsonFileRelationshipStore;
pub use r#trait::RelationshipStore;
