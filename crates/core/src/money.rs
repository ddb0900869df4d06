//! Money in the smallest currency unit.
//!
//! The storefront is single-currency, so `Money` is a plain count of cents.
//! Arithmetic saturates instead of overflowing.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Non-negative amount in cents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Convert a decimal amount (e.g. `19.99`) to cents, rounding half away
    /// from zero.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price must not be negative"));
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::validation("price is out of range"));
        }
        Ok(Self(cents as u64))
    }

    pub fn to_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Price of `quantity` units.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

/// Serde adapter for data sources that carry prices as JSON decimals.
///
/// ```ignore
/// #[serde(with = "storefront_core::money::decimal")]
/// price: Money,
/// ```
pub mod decimal {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use super::Money;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_decimal_rounds_to_nearest_cent() {
        assert_eq!(Money::from_decimal(19.99).unwrap().cents(), 1999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_decimal(5.0).unwrap().cents(), 500);
    }

    #[test]
    fn from_decimal_rejects_negative_and_nan() {
        assert!(matches!(Money::from_decimal(-0.01), Err(DomainError::Validation(_))));
        assert!(matches!(Money::from_decimal(f64::NAN), Err(DomainError::Validation(_))));
        assert!(matches!(Money::from_decimal(f64::INFINITY), Err(DomainError::Validation(_))));
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Money::from_cents(3998).to_string(), "$39.98");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn times_and_sum_saturate() {
        assert_eq!(Money::from_cents(u64::MAX).times(2).cents(), u64::MAX);
        let total: Money = [Money::from_cents(u64::MAX), Money::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), u64::MAX);
    }

    #[test]
    fn decimal_adapter_reads_json_numbers() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(with = "decimal")]
            price: Money,
        }

        let row: Row = serde_json::from_str(r#"{"price": 19.99}"#).unwrap();
        assert_eq!(row.price, Money::from_cents(1999));
        assert!(serde_json::from_str::<Row>(r#"{"price": -1}"#).is_err());
    }

    proptest! {
        #[test]
        fn times_matches_repeated_addition(cents in 0u64..1_000_000, qty in 0u32..500) {
            let unit = Money::from_cents(cents);
            let summed: Money = (0..qty).map(|_| unit).sum();
            prop_assert_eq!(unit.times(qty), summed);
        }
    }
}
