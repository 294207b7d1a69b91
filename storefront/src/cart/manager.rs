//! CartManager - cart ownership, invariants, and the conflict machine
//!
//! The manager is the only writer of cart state. Operations run
//! synchronously to completion; there is no internal concurrency. Every
//! successful mutation is followed by a best-effort snapshot save through
//! the injected [`CartStore`] and, where the user should see feedback, a
//! [`CartNotice`] through the injected [`CartNotifier`].
//!
//! # Operation Flow
//!
//! ```text
//! operation
//!     ├─ 1. Validate input / machine state
//!     ├─ 2. Mutate the in-memory cart
//!     ├─ 3. Persist snapshot (failures logged, never raised)
//!     └─ 4. Notify display surfaces
//! ```

use super::conflict::{ConflictState, PendingConflict};
use super::notify::{CartNotice, CartNotifier};
use super::store::CartStore;
use shared::cart::{Cart, CartLine};
use shared::models::{Dish, OrderDishRef, OrderDraft};
use std::sync::Arc;
use thiserror::Error;

/// Cart operation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Invalid dish record: bad {0}")]
    InvalidDish(&'static str),

    #[error("A conflicting add is already awaiting a decision")]
    ConflictPending,

    #[error("No conflict is awaiting a decision")]
    NoPendingConflict,

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Delivery address is required")]
    MissingAddress,
}

pub type CartResult<T> = Result<T, CartError>;

/// What an `add_item` call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended with quantity 1
    Added,
    /// An existing line's quantity was incremented
    QuantityUpdated(i32),
    /// Cross-restaurant dish parked as a pending conflict; cart untouched
    ConflictDetected,
}

/// Owner of the mutable cart and sole arbiter of the conflict machine
///
/// Constructed explicitly with its collaborators; consumers receive it by
/// reference and must route all mutations through its operations.
pub struct CartManager {
    cart: Cart,
    conflict: ConflictState,
    store: Arc<dyn CartStore>,
    notifier: Arc<dyn CartNotifier>,
}

impl std::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartManager")
            .field("cart", &self.cart)
            .field("conflict", &self.conflict)
            .finish()
    }
}

impl CartManager {
    /// Create a manager, rehydrating the cart from the store.
    ///
    /// A missing, unreadable, or invariant-violating snapshot degrades to
    /// an empty cart; construction never fails on persistence problems.
    pub fn new(store: Arc<dyn CartStore>, notifier: Arc<dyn CartNotifier>) -> Self {
        let cart = match store.load() {
            Ok(Some(lines)) => {
                if Cart::lines_well_formed(&lines) {
                    tracing::debug!(lines = lines.len(), "Restored cart snapshot");
                    Cart::from_lines(lines)
                } else {
                    tracing::warn!("Persisted cart snapshot violates invariants, starting empty");
                    Cart::default()
                }
            }
            Ok(None) => Cart::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load cart snapshot, starting empty");
                Cart::default()
            }
        };

        Self {
            cart,
            conflict: ConflictState::Idle,
            store,
            notifier,
        }
    }

    // ============ Reads ============

    /// Read-only view of the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn pending_conflict(&self) -> Option<&PendingConflict> {
        self.conflict.pending()
    }

    pub fn total_items(&self) -> i32 {
        self.cart.total_items()
    }

    pub fn total_amount(&self) -> f64 {
        self.cart.total_amount()
    }

    // ============ Mutations ============

    /// Add one unit of a dish to the cart.
    ///
    /// A dish from another restaurant never mutates the cart; it becomes
    /// the pending conflict and the caller presents the decision to the
    /// user. While a decision is pending, further adds are rejected so the
    /// parked attempt is never silently discarded.
    pub fn add_item(&mut self, dish: &Dish) -> CartResult<AddOutcome> {
        dish.validate().map_err(CartError::InvalidDish)?;

        if self.conflict.is_awaiting_decision() {
            return Err(CartError::ConflictPending);
        }

        if let Some(current) = self.cart.restaurant_id() {
            if current != dish.restaurant_id {
                let current_restaurant_id = current.to_string();
                tracing::debug!(
                    dish_id = %dish.id,
                    cart_restaurant = %current_restaurant_id,
                    dish_restaurant = %dish.restaurant_id,
                    "Cross-restaurant add parked as pending conflict"
                );
                self.conflict = ConflictState::AwaitingDecision(PendingConflict {
                    incoming: dish.clone(),
                    current_restaurant_id,
                });
                return Ok(AddOutcome::ConflictDetected);
            }
        }

        if let Some(line) = self.cart.line_mut(&dish.id) {
            line.quantity += 1;
            let quantity = line.quantity;
            self.persist();
            self.notifier.notify(CartNotice::QuantityUpdated {
                name: dish.name.clone(),
                quantity,
            });
            Ok(AddOutcome::QuantityUpdated(quantity))
        } else {
            self.cart.push(CartLine::from_dish(dish));
            self.persist();
            self.notifier.notify(CartNotice::ItemAdded {
                name: dish.name.clone(),
            });
            Ok(AddOutcome::Added)
        }
    }

    /// Replace the whole cart with the pending dish.
    pub fn resolve_conflict_confirm(&mut self) -> CartResult<()> {
        let pending = match std::mem::take(&mut self.conflict) {
            ConflictState::AwaitingDecision(pending) => pending,
            ConflictState::Idle => return Err(CartError::NoPendingConflict),
        };

        self.cart.replace_with(CartLine::from_dish(&pending.incoming));
        self.persist();
        self.notifier.notify(CartNotice::CartReplaced {
            name: pending.incoming.name,
        });
        Ok(())
    }

    /// Keep the cart as it is and drop the pending dish.
    pub fn resolve_conflict_cancel(&mut self) -> CartResult<()> {
        if !self.conflict.is_awaiting_decision() {
            return Err(CartError::NoPendingConflict);
        }
        self.conflict = ConflictState::Idle;
        Ok(())
    }

    /// Set a line's quantity; anything below 1 removes the line.
    ///
    /// Unknown `dish_id` is a no-op.
    pub fn update_quantity(&mut self, dish_id: &str, new_quantity: i32) {
        if new_quantity < 1 {
            self.remove_item(dish_id);
            return;
        }
        if let Some(line) = self.cart.line_mut(dish_id) {
            line.quantity = new_quantity;
            self.persist();
        }
    }

    /// Remove a line if present; emptying the cart lapses its restaurant
    /// affinity.
    pub fn remove_item(&mut self, dish_id: &str) {
        if let Some(removed) = self.cart.remove(dish_id) {
            self.persist();
            self.notifier
                .notify(CartNotice::ItemRemoved { name: removed.name });
        }
    }

    /// Empty the cart and delete the persisted snapshot. Idempotent.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.conflict = ConflictState::Idle;
        if let Err(e) = self.store.delete() {
            tracing::warn!(error = %e, "Failed to delete cart snapshot");
        }
    }

    /// Build the order submission payload from the current cart.
    ///
    /// The caller is expected to `clear()` once submission succeeds.
    pub fn checkout_draft(&self, delivery_address: &str) -> CartResult<OrderDraft> {
        if self.cart.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let delivery_address = delivery_address.trim();
        if delivery_address.is_empty() {
            return Err(CartError::MissingAddress);
        }

        // restaurant_id() is Some for a non-empty cart
        let restaurant_id = self
            .cart
            .restaurant_id()
            .ok_or(CartError::EmptyCart)?
            .to_string();

        Ok(OrderDraft {
            restaurant_id,
            dishes: self
                .cart
                .lines()
                .iter()
                .map(|line| OrderDishRef {
                    dish_id: line.dish_id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            delivery_address: delivery_address.to_string(),
        })
    }

    /// Post-commit hook: save the snapshot, surviving store failures.
    fn persist(&self) {
        if let Err(e) = self.store.save(self.cart.lines()) {
            tracing::warn!(error = %e, "Failed to persist cart snapshot");
        }
    }
}
