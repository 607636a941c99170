//! Domain layer: the mapping entity and the store contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait definitions
//!
//! The domain layer has no dependency on HTTP or on a concrete store.

pub mod entities;
pub mod repositories;
