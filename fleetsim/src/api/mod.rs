//! Read-only HTTP surface over the fabrication contract.
//!
//! Every endpoint re-runs the pure fabrication for its view, so a
//! dashboard polling these routes gets exactly the caller-driven
//! refresh model the core is built around.

mod server;
mod v0;

pub use server::{SharedState, router, serve};
