//! Dish Model

use serde::{Deserialize, Serialize};

/// Dish record as supplied by the catalog provider
///
/// Display fields (`description`, `image_url`, `category`) are carried
/// through untouched; the cart manager never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    pub id: String,
    /// Restaurant this dish belongs to
    pub restaurant_id: String,
    pub name: String,
    /// Unit price as listed by the catalog
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_availability")]
    pub availability: bool,
}

fn default_availability() -> bool {
    true
}

impl Dish {
    /// Check that the record is usable as cart input.
    ///
    /// Returns the offending field name on failure.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.id.trim().is_empty() {
            return Err("id");
        }
        if self.restaurant_id.trim().is_empty() {
            return Err("restaurant_id");
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("price");
        }
        Ok(())
    }
}
