//! HTTP request handlers.

pub mod mappings;
pub mod redirect;

pub use mappings::{add_handler, read_all_handler, update_handler};
pub use redirect::redirect_handler;
