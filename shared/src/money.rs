//! Money conversion helpers
//!
//! Amounts travel through the catalog API as floating-point values. For
//! comparisons and checksums they are converted to integer cents so float
//! noise never leaks into equality checks.

/// Convert an amount to cents (rounded).
///
/// # Examples
///
/// ```
/// use shared::money::to_cents;
///
/// assert_eq!(to_cents(12.50), 1250);
/// assert_eq!(to_cents(0.01), 1);
/// assert_eq!(to_cents(100.00), 10000);
/// ```
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Convert cents back to a float amount.
///
/// # Examples
///
/// ```
/// use shared::money::from_cents;
///
/// assert!((from_cents(1250) - 12.50).abs() < 0.001);
/// ```
pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Format an amount as a currency string with two decimals.
///
/// # Examples
///
/// ```
/// use shared::money::format_amount;
///
/// assert_eq!(format_amount(12.5), "₹12.50");
/// ```
pub fn format_amount(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cents_rounds() {
        assert_eq!(to_cents(0.1 + 0.2), 30);
        assert_eq!(to_cents(19.999), 2000);
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(to_cents(from_cents(12345)), 12345);
    }
}
