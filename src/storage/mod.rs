//! In-process storage for the catalog and browsing sessions

pub mod in_memory;
pub mod seed;

pub use in_memory::{InMemoryCatalog, SessionStore};
