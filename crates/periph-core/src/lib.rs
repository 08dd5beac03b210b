//! Shared service plumbing: tracing setup, HTTP layers, health probes, serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
