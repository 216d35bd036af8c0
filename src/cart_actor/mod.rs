//! Cart-specific domain logic, including the add-item action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
