//! Store — data-access layer over the hosted table store.
//!
//! DESIGN
//! ======
//! The backend is an external hosted table store reached over its REST
//! dialect; there is no local database. Everything the application needs
//! from it is three row operations, captured by the [`TableStore`] trait:
//! insert a row, read a whole table, delete rows matching one column.
//! [`RestTableStore`] speaks the hosted dialect; [`MemoryStore`] backs
//! unit tests and the no-config dev fallback.

pub mod config;
pub mod memory;
pub mod rest;
pub mod types;

pub use memory::MemoryStore;
pub use rest::RestTableStore;
pub use types::{StoreError, TableStore};

/// Name of the problems table.
pub const TABLE_PROBLEMS: &str = "problems";
/// Name of the factors table.
pub const TABLE_FACTORS: &str = "factors";
