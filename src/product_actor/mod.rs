//! Product-specific domain logic: code uniqueness and partial updates.

pub mod entity;
pub mod error;

pub use error::*;
