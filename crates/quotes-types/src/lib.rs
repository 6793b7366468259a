//! Quotes Types - Pure record and payload definitions
//!
//! This crate contains only serde data types, shared by the server and by
//! anything that talks to it over HTTP.

pub mod author;
pub mod quote;

pub use author::*;
pub use quote::*;
