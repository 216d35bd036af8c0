//! Typed clients for the resource actors.
//!
//! Each client wraps a [`ResourceClient`](crate::actor_framework::ResourceClient)
//! and converts framework outcomes into the domain's error type.

#[macro_use]
mod macros;

pub mod cart_client;
pub mod product_client;

pub use cart_client::*;
pub use product_client::*;
