//! Core types for Gridkit
//!
//! This crate defines the shared vocabulary of the system:
//! - [`Value`]: typed cell value with a total cross-type ordering
//! - [`Entity`]: an `id`-keyed record with arbitrary additional fields
//! - [`Error`] / [`Result`]: the error taxonomy used by all layers
//!
//! Nothing in this crate performs I/O. Storage backends live in
//! `gridkit-store`; view derivation lives in `gridkit-table`.

pub mod entity;
pub mod error;
pub mod value;

pub use entity::{Entity, ValueRef};
pub use error::{Error, Result};
pub use value::Value;
