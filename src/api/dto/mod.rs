//! Data Transfer Objects for API requests.

pub mod mapping;
