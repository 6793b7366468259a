//! HTTP handlers

pub mod authors;
pub mod health;
pub mod quotes;

pub use health::health;
