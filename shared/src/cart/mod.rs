//! Cart collection types
//!
//! - **line**: one dish entry with its quantity and captured price
//! - **snapshot**: the ordered cart collection with derived totals
//!
//! The persisted cart schema is exactly an ordered list of [`CartLine`]
//! records; [`Cart`] itself is never serialized.

pub mod line;
pub mod snapshot;

// Re-exports
pub use line::CartLine;
pub use snapshot::Cart;
