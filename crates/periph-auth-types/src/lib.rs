//! Auth types shared by the storefront service and its tests.
//!
//! Provides JWT issuing/validation and the access-token header reader.

pub mod header;
pub mod token;
