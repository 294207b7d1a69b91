//! Order submission payloads

use serde::{Deserialize, Serialize};

/// One dish reference inside an order draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDishRef {
    pub dish_id: String,
    pub quantity: i32,
}

/// Finalized cart snapshot handed to the order submission service
///
/// `restaurant_id` is taken from any cart line; the single-restaurant
/// invariant guarantees they all agree. Wire shape matches the `/orders`
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    pub restaurant_id: String,
    pub dishes: Vec<OrderDishRef>,
    pub delivery_address: String,
}
