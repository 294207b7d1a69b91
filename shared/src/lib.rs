//! Shared types for the storefront
//!
//! Common types used across the storefront crates: catalog models, cart
//! collection types, checkout drafts, and money helpers.

pub mod cart;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{Cart, CartLine};
pub use models::{Dish, OrderDishRef, OrderDraft};
