/// Instance catalog adapters
mod in_memory_catalog;
mod persistent_catalog;

pub use in_memory_catalog::InMemoryInstanceCatalog;
pub use persistent_catalog::PersistentInstanceCatalog;
