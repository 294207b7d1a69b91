//! Cart snapshot - ordered collection of cart lines
//!
//! Derived totals are recomputed on every access and never stored, so
//! display surfaces can never observe a stale value.

use super::line::CartLine;
use crate::money;

/// The user's cart: insertion-ordered dish selections for one restaurant
///
/// An empty cart has no restaurant affinity; the first line added sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Adopt already-validated lines (see [`Cart::lines_well_formed`]).
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Check a persisted line list against the cart invariants: one
    /// restaurant, unique dish ids, quantities >= 1, sane prices.
    pub fn lines_well_formed(lines: &[CartLine]) -> bool {
        let Some(first) = lines.first() else {
            return true;
        };
        let mut seen: Vec<&str> = Vec::with_capacity(lines.len());
        for line in lines {
            if line.restaurant_id != first.restaurant_id {
                return false;
            }
            if line.quantity < 1 {
                return false;
            }
            if !line.unit_price.is_finite() || line.unit_price < 0.0 {
                return false;
            }
            if seen.contains(&line.dish_id.as_str()) {
                return false;
            }
            seen.push(&line.dish_id);
        }
        true
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Restaurant affinity: `None` for an empty cart.
    pub fn restaurant_id(&self) -> Option<&str> {
        self.lines.first().map(|l| l.restaurant_id.as_str())
    }

    pub fn line(&self, dish_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.dish_id == dish_id)
    }

    pub fn line_mut(&mut self, dish_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.dish_id == dish_id)
    }

    /// Append a line, preserving insertion order for display.
    pub fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Remove the matching line, returning it if present.
    pub fn remove(&mut self, dish_id: &str) -> Option<CartLine> {
        let idx = self.lines.iter().position(|l| l.dish_id == dish_id)?;
        Some(self.lines.remove(idx))
    }

    /// Drop everything and start over with a single line.
    pub fn replace_with(&mut self, line: CartLine) {
        self.lines.clear();
        self.lines.push(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn total_amount(&self) -> f64 {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Total in integer cents, for float-noise-free comparisons.
    pub fn total_amount_cents(&self) -> i64 {
        money::to_cents(self.total_amount())
    }

    /// Total rendered for display surfaces, e.g. `₹360.00`.
    pub fn formatted_total(&self) -> String {
        money::format_amount(self.total_amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(dish_id: &str, restaurant_id: &str, price: f64, quantity: i32) -> CartLine {
        CartLine {
            dish_id: dish_id.to_string(),
            restaurant_id: restaurant_id.to_string(),
            name: dish_id.to_string(),
            image_url: None,
            unit_price: price,
            quantity,
            added_at: 0,
        }
    }

    #[test]
    fn test_empty_cart_has_no_affinity() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.restaurant_id(), None);
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_amount(), 0.0);
    }

    #[test]
    fn test_totals_sum_over_lines() {
        let cart = Cart::from_lines(vec![
            line("a", "r1", 5.0, 2),
            line("b", "r1", 3.0, 1),
        ]);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_amount(), 13.0);
        assert_eq!(cart.total_amount_cents(), 1300);
        assert_eq!(cart.formatted_total(), "₹13.00");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::default();
        cart.push(line("b", "r1", 1.0, 1));
        cart.push(line("a", "r1", 1.0, 1));
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.dish_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_replace_with_drops_previous_lines() {
        let mut cart = Cart::from_lines(vec![line("a", "r1", 5.0, 2)]);
        cart.replace_with(line("z", "r2", 3.0, 1));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.restaurant_id(), Some("r2"));
    }

    #[test]
    fn test_well_formed_accepts_empty_and_single_restaurant() {
        assert!(Cart::lines_well_formed(&[]));
        assert!(Cart::lines_well_formed(&[
            line("a", "r1", 5.0, 1),
            line("b", "r1", 3.0, 4),
        ]));
    }

    #[test]
    fn test_well_formed_rejects_mixed_restaurants() {
        assert!(!Cart::lines_well_formed(&[
            line("a", "r1", 5.0, 1),
            line("b", "r2", 3.0, 1),
        ]));
    }

    #[test]
    fn test_well_formed_rejects_duplicate_and_zero_quantity() {
        assert!(!Cart::lines_well_formed(&[
            line("a", "r1", 5.0, 1),
            line("a", "r1", 5.0, 2),
        ]));
        assert!(!Cart::lines_well_formed(&[line("a", "r1", 5.0, 0)]));
        assert!(!Cart::lines_well_formed(&[line("a", "r1", -5.0, 1)]));
    }
}
