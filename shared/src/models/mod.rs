//! Data models
//!
//! Shared between the cart state manager and the surrounding storefront
//! surfaces. Records arriving from the catalog API are plain serde types;
//! identifiers are opaque strings assigned by the backend.

pub mod dish;
pub mod order;

// Re-exports
pub use dish::*;
pub use order::*;
