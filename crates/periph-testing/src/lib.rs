//! Test utilities for the store service.
//!
//! Provides `MockAuth` for minting access tokens and a catalog page builder.
//! Import from tests only; never from production code.

pub mod auth;
pub mod catalog;
