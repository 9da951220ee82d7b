//! Whole-rupee price representation.
//!
//! Catalog prices carry no minor unit: `1499` is one thousand four hundred and
//! ninety-nine rupees. Display uses the rupee sign with Indian digit grouping
//! (lakh/crore), so `892750` renders as `₹8,92,750`.

use core::fmt;
use core::iter::Sum;

use serde::{Deserialize, Serialize};

/// Approximate USD to INR rate used by the admin console's price column.
pub const USD_TO_INR: u64 = 83;

/// A price in whole rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The whole-rupee amount.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Convert a catalog amount to rupees at the admin console's fixed rate.
    #[must_use]
    pub const fn from_usd_approx(amount: u64) -> Self {
        Self(amount.saturating_mul(USD_TO_INR))
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| Self(acc.0.saturating_add(p.0)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", group_indian(self.0))
    }
}

/// Group digits the Indian way: the last three together, then pairs.
fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);

    for (i, c) in digits.chars().enumerate() {
        out.push(c);
        let after = len - i - 1;
        if after >= 3 && after % 2 == 1 {
            out.push(',');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Price::new(0).to_string(), "₹0");
        assert_eq!(Price::new(999).to_string(), "₹999");
    }

    #[test]
    fn test_display_thousands() {
        assert_eq!(Price::new(1499).to_string(), "₹1,499");
        assert_eq!(Price::new(4497).to_string(), "₹4,497");
    }

    #[test]
    fn test_display_lakhs_and_crores() {
        assert_eq!(Price::new(100_000).to_string(), "₹1,00,000");
        assert_eq!(Price::new(892_750).to_string(), "₹8,92,750");
        assert_eq!(Price::new(12_345_678).to_string(), "₹1,23,45,678");
    }

    #[test]
    fn test_times_and_sum() {
        let line = Price::new(1499).times(3);
        assert_eq!(line, Price::new(4497));

        let total: Price = [Price::new(1), Price::new(2), Price::new(3)]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), 6);
    }

    #[test]
    fn test_from_usd_approx() {
        assert_eq!(Price::from_usd_approx(1499).amount(), 124_417);
    }

    #[test]
    fn test_serde_is_bare_number() {
        let json = serde_json::to_string(&Price::new(1299)).unwrap_or_default();
        assert_eq!(json, "1299");
    }
}
