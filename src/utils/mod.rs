//! Utility functions shared across layers.
//!
//! - [`validation`] - Key and URL syntax checks

pub mod validation;
