//! Mapping entity: a short key pointing at a redirect target.

use serde::Serialize;

/// A key-to-URL mapping as persisted in the store.
///
/// The key is the store's primary identifier and never changes once written;
/// only the value it points to can be overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    pub key: String,
    pub value: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
