//! User-facing cart notices
//!
//! Every successful mutation yields a short-lived acknowledgement for the
//! toast layer. Conflicts deliberately produce no notice; the UI reads the
//! pending conflict off the manager and renders its own prompt.

use serde::Serialize;
use std::fmt;

/// Acknowledgement of a completed cart mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartNotice {
    ItemAdded { name: String },
    QuantityUpdated { name: String, quantity: i32 },
    ItemRemoved { name: String },
    CartReplaced { name: String },
}

impl fmt::Display for CartNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartNotice::ItemAdded { name } => write!(f, "Added {} to cart", name),
            CartNotice::QuantityUpdated { name, .. } => {
                write!(f, "Updated quantity for {}", name)
            }
            CartNotice::ItemRemoved { .. } => write!(f, "Removed from cart"),
            CartNotice::CartReplaced { name } => {
                write!(f, "Cart replaced with {}", name)
            }
        }
    }
}

/// Sink for cart notices, implemented by the toast layer
pub trait CartNotifier: Send + Sync {
    fn notify(&self, notice: CartNotice);
}

/// Notifier that logs notices at info level
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl CartNotifier for TracingNotifier {
    fn notify(&self, notice: CartNotice) {
        tracing::info!(notice = %notice, "cart notice");
    }
}

/// Notifier that drops every notice
#[derive(Debug, Default)]
pub struct NullNotifier;

impl CartNotifier for NullNotifier {
    fn notify(&self, _notice: CartNotice) {}
}
