//! Core domain entities.
//!
//! The service has a single entity, [`Mapping`]: a flat key → URL pair with no
//! ownership, expiry, or hierarchy.

pub mod mapping;

pub use mapping::Mapping;
