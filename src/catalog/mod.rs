//! Catalog module
//!
//! Food catalog loading and the in-memory preference store.

pub mod preferences;
pub mod store;

pub use preferences::PreferenceStore;
pub use store::{Catalog, CatalogError, CatalogFile, CatalogResult};
