//! Cart state management
//!
//! This module implements the cart manager around a small number of pieces:
//!
//! - **manager**: `CartManager`, owner of the cart and sole arbiter of the
//!   conflict state machine
//! - **conflict**: the `Idle` / `AwaitingDecision` state machine types
//! - **store**: `CartStore` persistence trait plus file and in-memory
//!   implementations
//! - **notify**: `CartNotifier` trait and the user-facing notice values
//!
//! # Mutation Flow
//!
//! ```text
//! add_item(dish)
//!     ├─ validate dish record
//!     ├─ reject if a conflict is already awaiting a decision
//!     ├─ same restaurant → mutate cart (append or increment)
//!     │      ├─ persist snapshot (best effort, logged on failure)
//!     │      └─ notify display surfaces
//!     └─ other restaurant → park as PendingConflict, cart untouched
//! ```
//!
//! Collaborators are injected at construction; there is no ambient global
//! cart. Display surfaces read the cart and derived totals through the
//! manager and route every mutation back through it.

pub mod conflict;
pub mod manager;
pub mod notify;
pub mod store;

// Re-exports
pub use conflict::{ConflictState, PendingConflict};
pub use manager::{AddOutcome, CartError, CartManager};
pub use notify::{CartNotice, CartNotifier, NullNotifier, TracingNotifier};
pub use store::{CartStore, JsonFileStore, MemoryStore, StoreError};
