//! Domain types shared across the storefront crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod order;
pub mod product;
pub mod user;
