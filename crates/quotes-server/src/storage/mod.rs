//! Storage layer
//!
//! SQLite (embedded) through sqlx. Reads go straight to the pool; writes run
//! inside an explicit per-request transaction obtained from [`Database::begin`].

pub mod db;
pub mod error;

pub use db::{Database, Tx};
pub use error::StorageError;
