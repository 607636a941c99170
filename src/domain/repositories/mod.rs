//! Persistence trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::store`; mock implementations
//! are generated via `mockall` for unit tests.

pub mod mapping_store;

pub use mapping_store::{MappingStore, StoreError, StoreResult};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
