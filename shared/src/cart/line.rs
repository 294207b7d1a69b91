//! Cart line - one dish entry in the cart

use crate::models::Dish;
use crate::util::now_millis;
use serde::{Deserialize, Serialize};

/// One dish entry in the cart
///
/// `unit_price` is captured when the line is created and never re-fetched;
/// a price change in the catalog does not affect items already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Dish ID, unique within the cart
    pub dish_id: String,
    /// Restaurant the dish belongs to
    pub restaurant_id: String,
    /// Name snapshot for display
    pub name: String,
    /// Image snapshot for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Price captured at add-time
    pub unit_price: f64,
    /// Always >= 1; a line driven below 1 is removed, not kept at zero
    pub quantity: i32,
    /// When the line was first added (Unix milliseconds)
    #[serde(default)]
    pub added_at: i64,
}

impl CartLine {
    /// Build a fresh line from a catalog dish with quantity 1.
    pub fn from_dish(dish: &Dish) -> Self {
        Self {
            dish_id: dish.id.clone(),
            restaurant_id: dish.restaurant_id.clone(),
            name: dish.name.clone(),
            image_url: dish.image_url.clone(),
            unit_price: dish.price,
            quantity: 1,
            added_at: now_millis(),
        }
    }

    /// Line total at the captured unit price.
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dish_captures_price_and_quantity() {
        let dish = Dish {
            id: "dish-1".to_string(),
            restaurant_id: "rest-1".to_string(),
            name: "Masala Dosa".to_string(),
            price: 120.0,
            description: Some("Crispy".to_string()),
            image_url: Some("https://cdn.example/dosa.jpg".to_string()),
            category: None,
            availability: true,
        };

        let line = CartLine::from_dish(&dish);
        assert_eq!(line.dish_id, "dish-1");
        assert_eq!(line.restaurant_id, "rest-1");
        assert_eq!(line.unit_price, 120.0);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.image_url.as_deref(), Some("https://cdn.example/dosa.jpg"));
        assert!(line.added_at > 0);
    }

    #[test]
    fn test_line_total() {
        let dish = Dish {
            id: "d".to_string(),
            restaurant_id: "r".to_string(),
            name: "x".to_string(),
            price: 5.5,
            description: None,
            image_url: None,
            category: None,
            availability: true,
        };
        let mut line = CartLine::from_dish(&dish);
        line.quantity = 3;
        assert_eq!(line.line_total(), 16.5);
    }
}
