//! Storefront client-side state
//!
//! Home of the cart state manager: the component that owns the user's cart,
//! enforces the single-restaurant invariant, runs the cross-restaurant
//! conflict state machine, and persists the cart across sessions.

pub mod cart;

// Re-exports
pub use cart::{
    AddOutcome, CartError, CartManager, CartNotice, CartNotifier, CartStore, ConflictState,
    JsonFileStore, MemoryStore, NullNotifier, PendingConflict, StoreError, TracingNotifier,
};
